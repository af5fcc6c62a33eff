mod prompt_source_port;

pub use prompt_source_port::PromptSourcePort;
