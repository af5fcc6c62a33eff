use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::mpsc;
use tracing::debug;

use crate::application::use_cases::FetchPromptUseCase;
use crate::domain::entities::Prompt;

#[derive(Debug)]
pub enum Action {
    /// A fetch resolved successfully. `request_id` counts issued fetches from zero.
    PromptLoaded { request_id: u64, prompt: Prompt },
}

/// Issues prompt fetches as detached tasks and reports results as [`Action`]s.
///
/// Fetches are never cancelled or de-duplicated; results arrive in resolution
/// order, not issue order.
pub struct PromptFetcher {
    use_case: FetchPromptUseCase,
    action_tx: mpsc::UnboundedSender<Action>,
    next_request_id: AtomicU64,
}

impl PromptFetcher {
    #[must_use]
    pub const fn new(use_case: FetchPromptUseCase, action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            use_case,
            action_tx,
            next_request_id: AtomicU64::new(0),
        }
    }

    /// Starts a fetch and returns its request id.
    pub fn fetch(&self) -> u64 {
        let request_id = self.next_request_id.fetch_add(1, Ordering::Relaxed);
        let use_case = self.use_case.clone();
        let action_tx = self.action_tx.clone();

        debug!(request_id, "Prompt fetch issued");

        tokio::spawn(async move {
            let Ok(prompt) = use_case.execute().await else {
                debug!(request_id, "Prompt fetch finished without update");
                return;
            };

            if action_tx
                .send(Action::PromptLoaded { request_id, prompt })
                .is_err()
            {
                debug!(request_id, "Action channel closed, dropping prompt");
            }
        });

        request_id
    }
}
