//! Domain layer with the screen's values, errors and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{BackgroundColor, DEFAULT_PROMPT, Prompt};
pub use errors::FetchError;
pub use ports::PromptSourcePort;
