//! Iterative map-reduce summarization.
//!
//! Map phase: each chunk is summarized independently, in order, one
//! completion call per chunk. Reduce phase: while more than one summary
//! remains, the summaries are newline-joined, re-chunked with the same
//! parameters, and re-summarized. The reduce loop is bounded; a generator
//! that keeps returning long text would otherwise never shrink the list.

use crate::chunker::{self, ChunkParams, ChunkStrategy};
use crate::error::SummarizeError;
use crate::provider::Generate;
use crate::tokens::Tokenizer;

/// A prompt template with a `{TEXT}` placeholder for the chunk body.
#[derive(Debug, Clone)]
pub struct PromptTemplate(String);

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// Substitute the chunk text into the placeholder.
    pub fn render(&self, text: &str) -> String {
        self.0.replace(crate::constants::PROMPT_PLACEHOLDER, text)
    }
}

/// Drives the two-phase map-then-recursively-reduce process.
pub struct Reducer<'a> {
    tokenizer: &'a Tokenizer,
    strategy: ChunkStrategy,
    params: ChunkParams,
    template: PromptTemplate,
    max_rounds: usize,
}

impl<'a> Reducer<'a> {
    pub fn new(
        tokenizer: &'a Tokenizer,
        strategy: ChunkStrategy,
        params: ChunkParams,
        template: PromptTemplate,
        max_rounds: usize,
    ) -> Self {
        Self {
            tokenizer,
            strategy,
            params,
            template,
            max_rounds,
        }
    }

    /// Summarize every chunk in order, then fold the summaries down to one.
    ///
    /// Returns an empty string for an empty chunk sequence without calling
    /// the generator.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizeError::DidNotConverge`] when the reduce phase
    /// exceeds `max_rounds` without reaching a single summary, or propagates
    /// generation and chunking failures.
    pub async fn reduce(
        &self,
        chunks: &[String],
        generator: &dyn Generate,
    ) -> Result<String, SummarizeError> {
        let mut summaries = self.map_phase(chunks, generator).await?;

        let mut rounds = 0;
        while summaries.len() > 1 {
            if rounds == self.max_rounds {
                return Err(SummarizeError::DidNotConverge { rounds });
            }
            let joined = summaries.join("\n");
            let next = chunker::chunk(&joined, self.strategy, &self.params, self.tokenizer)?;
            summaries = self.map_phase(&next, generator).await?;
            rounds += 1;
        }

        Ok(summaries.pop().unwrap_or_default())
    }

    /// One completion call per chunk, strictly serial, output order matching
    /// input order.
    async fn map_phase(
        &self,
        chunks: &[String],
        generator: &dyn Generate,
    ) -> Result<Vec<String>, SummarizeError> {
        let mut summaries = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            let prompt = self.template.render(chunk);
            summaries.push(generator.generate(&prompt).await?);
        }
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerateError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns a fixed reply and counts calls.
    struct Fixed {
        reply: String,
        calls: AtomicUsize,
    }

    impl Fixed {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Generate for Fixed {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.clone())
        }
    }

    /// Echoes the prompt back, so tests can observe template rendering.
    struct Echo;

    #[async_trait]
    impl Generate for Echo {
        async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
            Ok(prompt.to_string())
        }
    }

    fn reducer(tokenizer: &Tokenizer, max_tokens: usize, max_rounds: usize) -> Reducer<'_> {
        Reducer::new(
            tokenizer,
            ChunkStrategy::Sentence,
            ChunkParams::new(max_tokens, max_tokens / 10).unwrap(),
            PromptTemplate::new("Summarize:\n\n{TEXT}"),
            max_rounds,
        )
    }

    fn chunks(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn empty_input_returns_empty_without_generating() {
        let tokenizer = Tokenizer::for_model(crate::constants::DEFAULT_MODEL).unwrap();
        let generator = Fixed::new("unused");
        let result = reducer(&tokenizer, 2000, 8)
            .reduce(&[], &generator)
            .await
            .unwrap();
        assert_eq!(result, "");
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn single_chunk_is_one_call_returned_unchanged() {
        let tokenizer = Tokenizer::for_model(crate::constants::DEFAULT_MODEL).unwrap();
        let generator = Fixed::new("the summary.");
        let result = reducer(&tokenizer, 2000, 8)
            .reduce(&chunks(&["some chunk text."]), &generator)
            .await
            .unwrap();
        assert_eq!(result, "the summary.");
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn template_substitutes_chunk_text() {
        let tokenizer = Tokenizer::for_model(crate::constants::DEFAULT_MODEL).unwrap();
        let result = reducer(&tokenizer, 2000, 8)
            .reduce(&chunks(&["the chunk body."]), &Echo)
            .await
            .unwrap();
        assert_eq!(result, "Summarize:\n\nthe chunk body.");
    }

    #[tokio::test]
    async fn three_chunks_take_four_calls() {
        let tokenizer = Tokenizer::for_model(crate::constants::DEFAULT_MODEL).unwrap();
        // Three map calls, then the three short summaries re-chunk into a
        // single chunk and one reduce call finishes the job.
        let generator = Fixed::new("short partial summary.");
        let result = reducer(&tokenizer, 2000, 8)
            .reduce(&chunks(&["one.", "two.", "three."]), &generator)
            .await
            .unwrap();
        assert_eq!(result, "short partial summary.");
        assert_eq!(generator.calls(), 4);
    }

    #[tokio::test]
    async fn unwrapped_generator_failure_aborts_the_reduction() {
        struct AlwaysFails;
        #[async_trait]
        impl Generate for AlwaysFails {
            async fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
                Err(GenerateError::EmptyResponse)
            }
        }
        let tokenizer = Tokenizer::for_model(crate::constants::DEFAULT_MODEL).unwrap();
        let err = reducer(&tokenizer, 2000, 8)
            .reduce(&chunks(&["a chunk."]), &AlwaysFails)
            .await
            .unwrap_err();
        assert!(matches!(err, SummarizeError::Generate(_)));
    }

    #[tokio::test]
    async fn nonshrinking_generator_fails_with_did_not_converge() {
        let tokenizer = Tokenizer::for_model(crate::constants::DEFAULT_MODEL).unwrap();
        // Every reply is far over the chunk budget, so each round re-chunks
        // into multiple pieces and the list never reaches one.
        let long_reply = "words keep coming and coming without any end in sight \
and the budget is far too small to ever hold them all in a single chunk."
            .repeat(4);
        let generator = Fixed::new(&long_reply);
        let err = reducer(&tokenizer, 20, 2)
            .reduce(&chunks(&["a.", "b."]), &generator)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SummarizeError::DidNotConverge { rounds: 2 }
        ));
    }
}
