//! Data models: extracted number records and pipeline configuration.

pub mod config;
pub mod record;

pub use config::{GenAiConfig, NumexConfig, GENAI_API_KEY_ENV};
pub use record::{ExtractedNumber, InterpretedValue, Modifier};
