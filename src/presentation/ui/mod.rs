//! UI screens.

mod app;
mod backend;
mod prompt_screen;

pub use app::App;
pub use backend::{Action, PromptFetcher};
pub use prompt_screen::{PromptScreen, PromptScreenStyle};
