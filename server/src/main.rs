use anyhow::Result;
use clap::Parser;
use recipe_core::persist::load_or_sample;
use recipe_core::tokenizer::TokenizerOptions;
use recipe_core::{EngineConfig, RecipeService};
use recipe_server::build_app;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Recipe data file (.csv, .json or .jsonl); the sample dataset is written here if missing
    #[arg(long, env = "RECIPES_PATH", default_value = "data/recipes.csv")]
    data: String,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,
    /// Default number of recipes per answer
    #[arg(long, default_value_t = 3)]
    top: usize,
    /// Stem terms before indexing
    #[arg(long, default_value_t = false)]
    stem: bool,
    /// Treat known corpus ingredients mentioned in a query as required ingredients
    #[arg(long, default_value_t = false)]
    lexicon: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let config = EngineConfig { top_n: args.top, tokenizer: TokenizerOptions { stem: args.stem }, ..Default::default() };
    let mut service = RecipeService::new(load_or_sample(&args.data), config);
    if args.lexicon {
        service = service.with_corpus_lexicon();
    }
    let service = Arc::new(service);
    let app = build_app(service);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
