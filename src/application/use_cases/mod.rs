//! Use case implementations.

mod fetch_prompt_use_case;

pub use fetch_prompt_use_case::FetchPromptUseCase;
