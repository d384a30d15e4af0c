//! Entry point for youyaku, an iterative document summarizer for the
//! terminal.
//!
//! Splits a document into token-bounded chunks, summarizes each through a
//! remote completion endpoint, and recursively merges the partial summaries
//! until one remains.

mod chunker;
mod cli;
mod config;
mod constants;
mod error;
mod extract;
mod normalize;
mod output;
mod provider;
mod reducer;
mod stats;
mod summarize;
mod tokens;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = cli::parse();
    if let Err(err) = cli::run(cli).await {
        output::render_error(&format!("{err:#}"));
        std::process::exit(1);
    }
}
