//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port.
//!
//! - `GeminiProvider` - Google Gemini models with structured JSON output
//! - `MockAIProvider` - Scripted provider for tests

mod gemini_provider;
mod mock_provider;

pub use gemini_provider::{
    GeminiConfig, GeminiProvider, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL,
};
pub use mock_provider::{MockAIProvider, MockResponse};
