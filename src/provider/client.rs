//! HTTP client for the completion endpoint.
//!
//! Sends a JSON completion request with a bearer-token `Authorization`
//! header and returns the first choice's trimmed text. Transport, status,
//! and decode failures are all tagged as [`GenerateError`]; the sentinel
//! downgrade, if any, happens in the policy wrapper, not here.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::Generate;
use crate::config::Config;
use crate::error::GenerateError;

/// Request body for the completions endpoint.
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    text: String,
}

/// A configured completion client ready to turn prompts into model text.
pub struct CompletionClient {
    http: Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
}

impl CompletionClient {
    /// Build a client from the loaded application config.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key can be resolved or the HTTP client
    /// cannot be constructed.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.resolve_api_key().context(
            "No API key found. Set TOGETHER_API_KEY or configure it in config.toml",
        )?;
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs()))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: config.base_url(),
            api_key,
            model: config.model.clone(),
            max_tokens: config.completion_max_tokens(),
            temperature: config.completion_temperature(),
            top_p: config.completion_top_p(),
        })
    }

    async fn complete(&self, prompt: &str) -> Result<String, GenerateError> {
        let body = CompletionRequest {
            model: &self.model,
            prompt,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            top_p: self.top_p,
        };
        let response = self
            .http
            .post(format!("{}/v1/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GenerateError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: CompletionResponse = response.json().await?;
        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or(GenerateError::EmptyResponse)?;
        Ok(choice.text.trim().to_string())
    }
}

#[async_trait]
impl Generate for CompletionClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        self.complete(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_has_the_expected_shape() {
        let body = CompletionRequest {
            model: "mistralai/Mistral-7B-Instruct-v0.3",
            prompt: "Summarize this.",
            max_tokens: 512,
            temperature: 0.3,
            top_p: 0.9,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["model"], "mistralai/Mistral-7B-Instruct-v0.3");
        assert_eq!(value["prompt"], "Summarize this.");
        assert_eq!(value["max_tokens"], 512);
        assert!(value.get("temperature").is_some());
        assert!(value.get("top_p").is_some());
    }

    #[test]
    fn response_parses_first_choice() {
        let parsed: CompletionResponse =
            serde_json::from_str(r#"{"choices":[{"text":"  a summary \n"}]}"#).unwrap();
        assert_eq!(parsed.choices[0].text.trim(), "a summary");
    }
}
