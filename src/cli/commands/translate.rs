use anyhow::Result;
use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{ConfigManager, ResolveOptions};
use crate::input::{InputReader, InputSource};
use crate::runner::TaskRunner;
use crate::translation::{TranslationAdapter, TranslationError, TranslationRequest};
use crate::ui::{Spinner, Style};
use crate::view::TranslationView;

pub struct TranslateOptions {
    pub source: InputSource,
    pub resolve: ResolveOptions,
}

/// Translates one piece of text and prints the result.
///
/// The translation (and pinyin, for Chinese output) goes to stdout; the
/// status line goes to stderr. A failed translation is returned as a
/// [`TranslationError`] so the caller can pick an exit code.
pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let config = ConfigManager::new()?.resolve(&options.resolve)?;
    let source_text = InputReader::read(&options.source)?;

    let adapter = TranslationAdapter::from_config(&config)?;
    let mut runner = TaskRunner::new(adapter, config.workers);

    let view = Rc::new(RefCell::new(TranslationView::new(
        config.source_lang,
        config.target_lang,
        config.show_pinyin,
    )));
    view.borrow_mut().set_source(&source_text);
    view.borrow_mut().begin();

    let failure: Rc<RefCell<Option<TranslationError>>> = Rc::default();
    let request = TranslationRequest::new(source_text, config.source_lang, config.target_lang);
    let target_lang = request.target_lang;

    let success_view = Rc::clone(&view);
    let failure_view = Rc::clone(&view);
    let failure_slot = Rc::clone(&failure);

    let spinner = Spinner::new(&view.borrow().status().to_string());
    runner.submit(
        request,
        move |id, result| {
            success_view
                .borrow_mut()
                .apply_success(id, target_lang, &result);
        },
        move |id, err| {
            failure_view.borrow_mut().apply_failure(id, &err);
            failure_slot.replace(Some(err));
        },
    );
    runner.dispatch_next().await;
    spinner.stop();

    if let Some(err) = failure.take() {
        return Err(err.into());
    }

    let shown = view.borrow();
    println!("{}", shown.translated_text());
    if !shown.pinyin().is_empty() {
        println!("{}", shown.pinyin());
    }
    crate::status!("{}", Style::secondary(shown.status()));

    Ok(())
}

/// Process exit code for an error returned by any command.
pub fn exit_code(err: &anyhow::Error) -> exitcode::ExitCode {
    match err.downcast_ref::<TranslationError>() {
        Some(TranslationError::EmptyInput) => exitcode::DATAERR,
        Some(TranslationError::ProviderUnavailable(_)) => exitcode::UNAVAILABLE,
        Some(TranslationError::ProviderError(_)) => exitcode::SOFTWARE,
        None => 1,
    }
}
