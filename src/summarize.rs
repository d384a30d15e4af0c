//! End-to-end summarization pipeline.
//!
//! Wires the core together: normalize the input, chunk it under the token
//! budget, then map-reduce the chunks through the completion client. The
//! error policy is applied here, once, by choosing which generator the
//! reducer sees.

use anyhow::{bail, Result};

use crate::chunker::{self, ChunkParams};
use crate::config::Config;
use crate::constants::MAX_REDUCE_ROUNDS;
use crate::normalize;
use crate::output;
use crate::provider::{CompletionClient, EmbedErrors, ErrorPolicy};
use crate::reducer::{PromptTemplate, Reducer};
use crate::tokens::Tokenizer;

/// Run the full pipeline over raw input text and return the final summary.
pub async fn summarize_text(text: &str, config: &Config) -> Result<String> {
    let normalized = normalize::normalize(text);
    if normalized.is_empty() {
        bail!("Nothing to summarize: the input is empty");
    }

    let tokenizer = Tokenizer::for_model(&config.model)?;
    let strategy = config.strategy()?;
    let params = ChunkParams::new(config.chunk_max_tokens(), config.chunk_overlap())?;

    let chunks = chunker::chunk(&normalized, strategy, &params, &tokenizer)?;
    if chunks.len() > 1 {
        output::render_note(&format!("{} chunks to summarize", chunks.len()));
    }

    let template = PromptTemplate::new(config.prompt_template());
    let reducer = Reducer::new(&tokenizer, strategy, params, template, MAX_REDUCE_ROUNDS);

    let client = CompletionClient::from_config(config)?;
    let summary = match config.error_policy()? {
        ErrorPolicy::Embed => reducer.reduce(&chunks, &EmbedErrors::new(client)).await?,
        ErrorPolicy::Abort => reducer.reduce(&chunks, &client).await?,
    };
    Ok(summary)
}
