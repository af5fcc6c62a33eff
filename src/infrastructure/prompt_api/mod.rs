//! Random prompt HTTP API client.

mod client;
mod dto;

pub use client::PromptApiClient;
