//! Generation request client for the remote image model

/// HTTP submission of generation requests
pub mod client;
/// Instruction template shaping generation requests
pub mod prompt;
/// Typed response model and image payload extraction
pub mod response;

pub use client::GenerationClient;
pub use prompt::PromptTemplate;
