//! Error policy for generation failures.
//!
//! The completion client tags failures as structured errors. What happens
//! next is a single policy decision made where the reducer is invoked:
//! `embed` turns a failure into an inline `[request error: ...]` sentinel
//! that is summarized like any other text, `abort` propagates the error and
//! halts the whole reduction.

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use async_trait::async_trait;

use super::Generate;
use crate::error::GenerateError;

/// How a failed completion call reaches the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Downgrade failures to inline sentinel text.
    #[default]
    Embed,
    /// Propagate the failure and halt the reduction.
    Abort,
}

impl FromStr for ErrorPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "embed" => Ok(Self::Embed),
            "abort" => Ok(Self::Abort),
            other => Err(anyhow!(
                "Unknown error policy: {other}. Supported: embed, abort"
            )),
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embed => write!(f, "embed"),
            Self::Abort => write!(f, "abort"),
        }
    }
}

/// Wraps a generator so failures become inline sentinel text instead of
/// errors. The sentinel then flows through the reduction as content.
pub struct EmbedErrors<G>(G);

impl<G> EmbedErrors<G> {
    pub fn new(inner: G) -> Self {
        Self(inner)
    }
}

#[async_trait]
impl<G: Generate> Generate for EmbedErrors<G> {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        match self.0.generate(prompt).await {
            Ok(text) => Ok(text),
            Err(err) => Ok(format!("[request error: {err}]")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysFails;

    #[async_trait]
    impl Generate for AlwaysFails {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
            Err(GenerateError::Status {
                status: 503,
                body: "overloaded".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn embed_turns_failures_into_sentinel_text() {
        let wrapped = EmbedErrors::new(AlwaysFails);
        let text = wrapped.generate("prompt").await.unwrap();
        assert!(text.starts_with("[request error:"));
        assert!(text.contains("503"));
        assert!(text.ends_with(']'));
    }

    #[tokio::test]
    async fn embed_passes_successes_through() {
        struct AlwaysSucceeds;
        #[async_trait]
        impl Generate for AlwaysSucceeds {
            async fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
                Ok("fine".to_string())
            }
        }
        let wrapped = EmbedErrors::new(AlwaysSucceeds);
        assert_eq!(wrapped.generate("prompt").await.unwrap(), "fine");
    }

    #[test]
    fn policy_parses_and_displays() {
        assert_eq!("embed".parse::<ErrorPolicy>().unwrap(), ErrorPolicy::Embed);
        assert_eq!("ABORT".parse::<ErrorPolicy>().unwrap(), ErrorPolicy::Abort);
        assert!("retry".parse::<ErrorPolicy>().is_err());
        assert_eq!(ErrorPolicy::Embed.to_string(), "embed");
    }
}
