//! pagecraft-genai - Gemini client for Pagecraft
//!
//! Thin adapter over the hosted Gemini `generateContent` HTTP endpoint.
//! Two operations: structured copy generation (JSON-constrained text) and
//! image compositing (inline PNG in, inline PNG out). Stateless
//! request/response, no retry.

pub mod client;
pub mod error;
pub mod prompt;
pub mod protocol;
pub mod service;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{ClientConfig, GeminiClient};
pub use error::{GenAiError, GenAiResult};
pub use service::{Generator, LocalGenerator};
