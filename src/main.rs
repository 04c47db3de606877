use anyhow::Result;
use clap::Parser;

use fanyi::cli::commands::configure::{self, ConfigureMode};
use fanyi::cli::commands::{providers, session, translate};
use fanyi::cli::{Args, Command};
use fanyi::input::InputSource;
use fanyi::translation::print_languages;
use fanyi::ui::Style;
use fanyi::{logging, output};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    output::init(output::OutputConfig::new(args.quiet));
    logging::init(args.verbose);

    if let Err(err) = run(args).await {
        fanyi::warn!("{} {err:#}", Style::error("Error:"));
        std::process::exit(translate::exit_code(&err));
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Providers { provider }) => {
            providers::print_providers(provider.as_deref())?;
        }
        Some(Command::Configure { show, init }) => {
            let mode = if init {
                ConfigureMode::Init
            } else if show {
                ConfigureMode::Show
            } else {
                ConfigureMode::Interactive
            };
            configure::run_configure(mode)?;
        }
        Some(Command::Session {
            translation,
            timeout,
        }) => {
            session::run_session(translation.resolve_options(timeout)).await?;
        }
        None => {
            let options = translate::TranslateOptions {
                source: InputSource::select(args.text, args.file),
                resolve: args.translation.resolve_options(args.timeout),
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
