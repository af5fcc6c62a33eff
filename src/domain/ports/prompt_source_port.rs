//! Prompt source port definition.

use async_trait::async_trait;

use crate::domain::entities::Prompt;
use crate::domain::errors::FetchError;

/// Port for fetching random prompts.
#[async_trait]
pub trait PromptSourcePort: Send + Sync {
    /// Fetches one random prompt.
    async fn fetch_random(&self) -> Result<Prompt, FetchError>;

    /// Returns the endpoint requests are sent to.
    fn endpoint(&self) -> &str;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::oneshot;

    struct ScriptedReply {
        result: Result<Prompt, FetchError>,
        gate: Option<oneshot::Receiver<()>>,
    }

    /// Mock prompt source replaying scripted replies in call order.
    pub struct MockPromptSource {
        replies: Mutex<VecDeque<ScriptedReply>>,
        calls: AtomicUsize,
    }

    impl MockPromptSource {
        /// Creates mock with no scripted replies.
        pub fn new() -> Self {
            Self {
                replies: Mutex::new(VecDeque::new()),
                calls: AtomicUsize::new(0),
            }
        }

        /// Queues a successful reply.
        pub fn push_title(&self, title: &str) {
            self.push(Ok(Prompt::new(title)), None);
        }

        /// Queues a failing reply.
        pub fn push_error(&self, error: FetchError) {
            self.push(Err(error), None);
        }

        /// Queues a successful reply that resolves only once the returned sender fires.
        pub fn push_gated_title(&self, title: &str) -> oneshot::Sender<()> {
            let (tx, rx) = oneshot::channel();
            self.push(Ok(Prompt::new(title)), Some(rx));
            tx
        }

        /// Number of fetches started so far.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn push(&self, result: Result<Prompt, FetchError>, gate: Option<oneshot::Receiver<()>>) {
            self.replies
                .lock()
                .unwrap()
                .push_back(ScriptedReply { result, gate });
        }
    }

    #[async_trait]
    impl PromptSourcePort for MockPromptSource {
        async fn fetch_random(&self) -> Result<Prompt, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let reply = self.replies.lock().unwrap().pop_front();

            let Some(reply) = reply else {
                return Err(FetchError::unexpected("no scripted reply"));
            };

            if let Some(gate) = reply.gate {
                let _ = gate.await;
            }
            reply.result
        }

        fn endpoint(&self) -> &str {
            "mock://random"
        }
    }
}
