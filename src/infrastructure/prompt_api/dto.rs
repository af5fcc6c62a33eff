use serde::Deserialize;

/// Random prompt response body. Fields other than `title` are ignored.
#[derive(Debug, Deserialize)]
pub struct PromptResponse {
    /// Prompt text.
    pub title: String,
}
