//! Background execution of translation requests.
//!
//! [`TaskRunner`] lives on the UI execution context. Each submitted request
//! runs on a tokio task, gated by a fixed number of worker permits, and
//! reports back over a channel. The UI context then drains that channel with
//! [`TaskRunner::dispatch_next`] or [`TaskRunner::dispatch_ready`], which is
//! the only place callbacks run.
//!
//! Every request gets exactly one callback: `on_success` or `on_failure`,
//! never both, never twice. Requests are not cancelled by later submissions
//! and may complete in any order.

use std::any::Any;
use std::collections::{HashMap, VecDeque};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use tokio::sync::{Semaphore, mpsc};

use crate::translation::{
    TranslationAdapter, TranslationError, TranslationRequest, TranslationResult,
};

/// Terminal states remembered by default before the oldest are forgotten.
pub const DEFAULT_STATE_HISTORY: usize = 1024;

/// Sequence number assigned on submit. Later submissions get larger ids.
pub type RequestId = u64;

/// Terminal event of a request.
pub type Outcome = Result<TranslationResult, TranslationError>;

/// Lifecycle of a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    /// Never submitted to this runner.
    Idle,
    Pending,
    Completed,
    Failed,
}

impl RequestState {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

struct Completion {
    id: RequestId,
    outcome: Outcome,
}

// Callbacks run on the UI context, so they need not be Send.
struct Continuations {
    on_success: Box<dyn FnOnce(RequestId, TranslationResult)>,
    on_failure: Box<dyn FnOnce(RequestId, TranslationError)>,
}

pub struct TaskRunner {
    adapter: Arc<TranslationAdapter>,
    permits: Arc<Semaphore>,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
    pending: HashMap<RequestId, Continuations>,
    states: HashMap<RequestId, RequestState>,
    finished: VecDeque<RequestId>,
    state_history: usize,
    last_id: RequestId,
}

impl TaskRunner {
    /// Creates a runner that executes at most `workers` provider calls at once.
    pub fn new(adapter: TranslationAdapter, workers: usize) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        let metadata = adapter.metadata();
        tracing::debug!(
            provider = %metadata.name,
            endpoint = %metadata.endpoint,
            workers,
            "starting task runner"
        );

        Self {
            adapter: Arc::new(adapter),
            permits: Arc::new(Semaphore::new(workers.max(1))),
            completions_tx,
            completions_rx,
            pending: HashMap::new(),
            states: HashMap::new(),
            finished: VecDeque::new(),
            state_history: DEFAULT_STATE_HISTORY,
            last_id: 0,
        }
    }

    /// Keeps terminal states for at most `limit` finished requests.
    #[must_use]
    pub fn with_state_history(mut self, limit: usize) -> Self {
        self.state_history = limit.max(1);
        self
    }

    /// Starts `request` in the background and returns its id.
    ///
    /// Must be called from within a tokio runtime. The callbacks are held
    /// here and invoked later by a dispatch call on this same context.
    pub fn submit<S, F>(
        &mut self,
        request: TranslationRequest,
        on_success: S,
        on_failure: F,
    ) -> RequestId
    where
        S: FnOnce(RequestId, TranslationResult) + 'static,
        F: FnOnce(RequestId, TranslationError) + 'static,
    {
        self.last_id += 1;
        let id = self.last_id;

        self.pending.insert(
            id,
            Continuations {
                on_success: Box::new(on_success),
                on_failure: Box::new(on_failure),
            },
        );
        self.states.insert(id, RequestState::Pending);

        tracing::debug!(
            id,
            from = %request.source_lang,
            to = %request.target_lang,
            chars = request.source_text.chars().count(),
            "submitted translation request"
        );

        let adapter = Arc::clone(&self.adapter);
        let permits = Arc::clone(&self.permits);
        let completions_tx = self.completions_tx.clone();

        tokio::spawn(async move {
            let outcome = run_request(&adapter, &permits, &request).await;
            if completions_tx.send(Completion { id, outcome }).is_err() {
                tracing::debug!(id, "runner dropped before the outcome was delivered");
            }
        });

        id
    }

    /// Waits for the next completion and runs its callback.
    ///
    /// Returns `None` immediately when nothing is pending. Cancel safe: if the
    /// future is dropped before it resolves, no completion is lost.
    pub async fn dispatch_next(&mut self) -> Option<RequestId> {
        if self.pending.is_empty() {
            return None;
        }

        let completion = self.completions_rx.recv().await?;
        Some(self.deliver(completion))
    }

    /// Runs the callbacks of every completion that has already arrived.
    ///
    /// Never blocks. Returns how many callbacks ran.
    pub fn dispatch_ready(&mut self) -> usize {
        let mut delivered = 0;
        while let Ok(completion) = self.completions_rx.try_recv() {
            self.deliver(completion);
            delivered += 1;
        }
        delivered
    }

    /// Number of submitted requests whose callback has not run yet.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Pending requests are always known. Terminal states are kept only for
    /// the most recent finished requests; older ids report `Idle` again.
    pub fn state(&self, id: RequestId) -> RequestState {
        self.states
            .get(&id)
            .copied()
            .unwrap_or(RequestState::Idle)
    }

    fn deliver(&mut self, completion: Completion) -> RequestId {
        let Completion { id, outcome } = completion;

        // Removing the continuations is what makes delivery exactly-once.
        let Some(continuations) = self.pending.remove(&id) else {
            tracing::warn!(id, "dropping outcome for a request that is not pending");
            return id;
        };

        match outcome {
            Ok(result) => {
                tracing::info!(
                    id,
                    elapsed_seconds = result.elapsed_seconds,
                    "translation completed"
                );
                self.finish(id, RequestState::Completed);
                (continuations.on_success)(id, result);
            }
            Err(err) => {
                tracing::info!(id, error = %err, "translation failed");
                self.finish(id, RequestState::Failed);
                (continuations.on_failure)(id, err);
            }
        }

        id
    }

    fn finish(&mut self, id: RequestId, state: RequestState) {
        self.states.insert(id, state);
        self.finished.push_back(id);
        while self.finished.len() > self.state_history {
            if let Some(oldest) = self.finished.pop_front() {
                self.states.remove(&oldest);
            }
        }
    }
}

async fn run_request(
    adapter: &TranslationAdapter,
    permits: &Semaphore,
    request: &TranslationRequest,
) -> Outcome {
    let _permit = permits
        .acquire()
        .await
        .map_err(|_| TranslationError::ProviderUnavailable("worker pool closed".into()))?;

    match AssertUnwindSafe(adapter.translate(request))
        .catch_unwind()
        .await
    {
        Ok(outcome) => outcome,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::error!(%message, "translation provider panicked");
            Err(TranslationError::ProviderError(format!(
                "provider crashed: {message}"
            )))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
