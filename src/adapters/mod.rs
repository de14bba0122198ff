//! Adapters - Implementations of port interfaces.
//!
//! - `ai` - Gemini and scripted AI providers
//! - `gateway` - Goal gateway backed by an AI provider
//! - `http` - Axum REST API
//! - `storage` - In-memory session store

pub mod ai;
pub mod gateway;
pub mod http;
pub mod storage;
