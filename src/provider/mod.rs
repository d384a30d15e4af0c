//! Remote completion client for youyaku.
//!
//! [`Generate`] is the seam between the reducer and the network: the HTTP
//! client implements it for real requests, and tests substitute fakes.
//! [`ErrorPolicy`] decides once, at the reducer's call site, whether a
//! failed completion aborts the reduction or flows through as sentinel text.

mod client;
mod policy;

pub use client::CompletionClient;
pub use policy::{EmbedErrors, ErrorPolicy};

use async_trait::async_trait;

use crate::error::GenerateError;

/// A prompt-to-text generation call against an opaque, possibly-failing
/// remote model.
#[async_trait]
pub trait Generate: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}
