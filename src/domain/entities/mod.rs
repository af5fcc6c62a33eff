//! Domain entities.

mod background_color;
mod prompt;

pub use background_color::BackgroundColor;
pub use prompt::{DEFAULT_PROMPT, Prompt};
