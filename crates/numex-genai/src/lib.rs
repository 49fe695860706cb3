//! Delegated extraction layer for numex.
//!
//! This crate hands a PDF to a hosted generative model and asks it for
//! the single largest interpreted number, constrained to a JSON response
//! schema. The model is a black box behind [`GenAiProvider`]; the local
//! heuristic pipeline in `numex-core` does not depend on it.

mod error;
mod gemini;
mod provider;
mod response;

pub use error::GenAiError;
pub use gemini::GeminiProvider;
pub use provider::{GenAiProvider, DEFAULT_PROMPT};
pub use response::{number_response_schema, NumberResponse};

/// Result type for delegated extraction.
pub type Result<T> = std::result::Result<T, GenAiError>;
