use anyhow::{Context, Result};
use std::cell::RefCell;
use std::rc::Rc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::command::{Input, SlashCommand, parse_input};
use super::ui;
use crate::config::ResolvedConfig;
use crate::runner::TaskRunner;
use crate::translation::{Language, TranslationAdapter, TranslationRequest, validate_language};
use crate::view::TranslationView;

/// An interactive translation session.
///
/// Input lines and runner completions are handled on one task, which is the
/// UI execution context: only it touches the view.
pub struct TranslationSession {
    config: ResolvedConfig,
    runner: TaskRunner,
    view: Rc<RefCell<TranslationView>>,
}

impl TranslationSession {
    pub fn new(config: ResolvedConfig, adapter: TranslationAdapter) -> Self {
        let view = TranslationView::new(config.source_lang, config.target_lang, config.show_pinyin)
            .with_discard_stale(config.discard_stale);

        Self {
            runner: TaskRunner::new(adapter, config.workers),
            view: Rc::new(RefCell::new(view)),
            config,
        }
    }

    /// Read-only snapshot of the presentation state.
    pub fn view(&self) -> TranslationView {
        self.view.borrow().clone()
    }

    /// Runs until `/quit` or the end of input. Either way, every request
    /// already submitted is delivered before this returns.
    pub async fn run<R>(&mut self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        ui::print_header(&self.view.borrow());

        let mut lines = input.lines();
        let mut input_open = true;

        loop {
            if !input_open && self.runner.pending() == 0 {
                break;
            }

            tokio::select! {
                line = lines.next_line(), if input_open => {
                    match line.context("Failed to read session input")? {
                        Some(line) => {
                            if !self.handle_line(&line) {
                                break;
                            }
                        }
                        None => input_open = false,
                    }
                }
                // Callbacks render their own outcome.
                Some(_) = self.runner.dispatch_next(), if self.runner.pending() > 0 => {}
            }
        }

        if self.runner.pending() > 0 {
            tracing::debug!(
                pending = self.runner.pending(),
                "waiting for requests in flight"
            );
            while self.runner.dispatch_next().await.is_some() {}
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Returns false when the session should end.
    fn handle_line(&mut self, line: &str) -> bool {
        match parse_input(line) {
            Input::Empty => true,
            Input::Command(cmd) => self.handle_command(cmd),
            Input::Text(text) => {
                self.submit(&text);
                true
            }
        }
    }

    fn submit(&mut self, text: &str) {
        let (source_lang, target_lang) = {
            let mut view = self.view.borrow_mut();
            view.set_source(text);
            view.begin();
            ui::render_pending(&view);
            (view.source_lang(), view.target_lang())
        };

        let request = TranslationRequest::new(text, source_lang, target_lang);
        let success_view = Rc::clone(&self.view);
        let failure_view = Rc::clone(&self.view);

        self.runner.submit(
            request,
            move |id, result| {
                let mut view = success_view.borrow_mut();
                if view.apply_success(id, target_lang, &result) {
                    ui::render_translation(&view);
                }
            },
            move |id, err| {
                let mut view = failure_view.borrow_mut();
                if view.apply_failure(id, &err) {
                    ui::render_failure(&view);
                }
            },
        );
    }

    fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Swap => {
                let mut view = self.view.borrow_mut();
                view.swap_languages();
                ui::render_swapped(&view);
            }
            SlashCommand::Pinyin => {
                let mut view = self.view.borrow_mut();
                let enabled = view.toggle_pinyin();
                ui::print_notice(&format!("Pinyin {}", ui::on_off(enabled)));
                if !view.pinyin().is_empty() {
                    println!("{}", crate::ui::Style::pinyin(view.pinyin()));
                    println!();
                }
            }
            SlashCommand::Clear => {
                let mut view = self.view.borrow_mut();
                view.clear();
                ui::print_notice(&view.status().to_string());
            }
            SlashCommand::From(lang) => self.set_language(lang.as_deref(), LanguageSide::Source),
            SlashCommand::To(lang) => self.set_language(lang.as_deref(), LanguageSide::Target),
            SlashCommand::Status => ui::render_status(&self.view.borrow(), self.runner.pending()),
            SlashCommand::Config => ui::print_config(&self.config, &self.view.borrow()),
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Quit => return false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}. Type /help for commands."));
            }
        }
        true
    }

    fn set_language(&self, value: Option<&str>, side: LanguageSide) {
        let Some(code) = value else {
            ui::print_error(&format!("Usage: /{} <lang>", side.command()));
            return;
        };

        let lang: Language = match validate_language(code) {
            Ok(lang) => lang,
            Err(e) => {
                ui::print_error(&e.to_string());
                return;
            }
        };

        let mut view = self.view.borrow_mut();
        match side {
            LanguageSide::Source => view.set_source_lang(lang),
            LanguageSide::Target => view.set_target_lang(lang),
        }
        ui::print_direction(view.source_lang(), view.target_lang());
        println!();
    }
}

#[derive(Debug, Clone, Copy)]
enum LanguageSide {
    Source,
    Target,
}

impl LanguageSide {
    const fn command(self) -> &'static str {
        match self {
            Self::Source => "from",
            Self::Target => "to",
        }
    }
}
