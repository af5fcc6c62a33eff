//! Fetch prompt use case implementation.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::domain::entities::Prompt;
use crate::domain::errors::FetchError;
use crate::domain::ports::PromptSourcePort;

/// Fetches a random prompt and records the outcome in the log.
#[derive(Clone)]
pub struct FetchPromptUseCase {
    source: Arc<dyn PromptSourcePort>,
}

impl FetchPromptUseCase {
    /// Creates new fetch prompt use case.
    #[must_use]
    pub const fn new(source: Arc<dyn PromptSourcePort>) -> Self {
        Self { source }
    }

    /// Executes a single fetch. Failures are logged here and returned unchanged;
    /// no retry is attempted.
    ///
    /// # Errors
    /// Returns error if the request, status or body is not usable.
    pub async fn execute(&self) -> Result<Prompt, FetchError> {
        debug!(endpoint = %self.source.endpoint(), "Fetching random prompt");

        match self.source.fetch_random().await {
            Ok(prompt) => {
                info!(title = %prompt, "Fetched prompt");
                Ok(prompt)
            }
            Err(e) => {
                error!(
                    endpoint = %self.source.endpoint(),
                    network = e.is_network_error(),
                    error = %e,
                    "Failed to fetch prompt"
                );
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockPromptSource;
    use std::io;
    use std::sync::Mutex;
    use tracing_subscriber::fmt::MakeWriter;

    /// Collects formatted log lines in memory.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[tokio::test]
    async fn test_successful_fetch() {
        let source = Arc::new(MockPromptSource::new());
        source.push_title("Some text");

        let use_case = FetchPromptUseCase::new(source.clone());
        let prompt = use_case.execute().await.unwrap();

        assert_eq!(prompt.as_str(), "Some text");
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_failure_is_returned_without_retry() {
        let source = Arc::new(MockPromptSource::new());
        source.push_error(FetchError::network("connection refused"));
        source.push_title("never requested");

        let use_case = FetchPromptUseCase::new(source.clone());
        let result = use_case.execute().await;

        assert!(matches!(result, Err(FetchError::Network { .. })));
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_failure_is_logged_as_error() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let source = Arc::new(MockPromptSource::new());
        source.push_error(FetchError::status(503));

        let use_case = FetchPromptUseCase::new(source);
        let result = use_case.execute().await;

        assert!(result.is_err());
        let output = logs.contents();
        let line = output
            .lines()
            .find(|line| line.contains("Failed to fetch prompt"))
            .expect("failure was not logged");
        assert!(line.contains("ERROR"));
        assert!(line.contains("HTTP 503"));
    }

    #[tokio::test]
    async fn test_success_logs_no_error() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let source = Arc::new(MockPromptSource::new());
        source.push_title("Pick a color");

        let prompt = FetchPromptUseCase::new(source).execute().await.unwrap();

        assert_eq!(prompt.as_str(), "Pick a color");
        assert!(!logs.contents().contains("ERROR"));
        assert!(logs.contents().contains("Fetched prompt"));
    }
}
