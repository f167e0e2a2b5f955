use anyhow::Result;
use clap::{Parser, Subcommand};
use recipe_cli::{is_exit_command, render_outcome};
use recipe_core::persist::{load_or_sample, write_sample};
use recipe_core::tokenizer::TokenizerOptions;
use recipe_core::{EngineConfig, RecipeService};
use std::io::{self, BufRead, Write};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "recipes")]
#[command(about = "Answer free-text cooking queries from a recipe collection", long_about = None)]
struct Cli {
    /// Recipe data file (.csv, .json or .jsonl); the sample dataset is written here if missing
    #[arg(long, global = true, env = "RECIPES_PATH", default_value = "data/recipes.csv")]
    data: String,
    /// Number of recipes per answer
    #[arg(long, global = true, default_value_t = 3)]
    top: usize,
    /// Stem terms before indexing
    #[arg(long, global = true, default_value_t = false)]
    stem: bool,
    /// Treat known corpus ingredients mentioned in a query as required ingredients
    #[arg(long, global = true, default_value_t = false)]
    lexicon: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a single query
    Ask {
        /// The query, e.g. "quick pasta with no dairy"
        text: Vec<String>,
    },
    /// Interactive loop; type exit, quit or bye to leave
    Repl,
    /// Write the built-in sample dataset (.csv, .json or .jsonl by extension)
    Sample {
        #[arg(long, default_value = "data/recipes.csv")]
        output: String,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sample { output } => {
            let recipes = write_sample(&output)?;
            tracing::info!(output = %output, recipes = recipes.len(), "sample dataset written");
            Ok(())
        }
        Commands::Ask { text } => {
            let service = build_service(&cli.data, cli.top, cli.stem, cli.lexicon);
            print!("{}", render_outcome(&service.answer(&text.join(" "))));
            Ok(())
        }
        Commands::Repl => {
            let service = build_service(&cli.data, cli.top, cli.stem, cli.lexicon);
            repl(&service)
        }
    }
}

fn build_service(data: &str, top: usize, stem: bool, lexicon: bool) -> RecipeService {
    let config = EngineConfig { top_n: top, tokenizer: TokenizerOptions { stem }, ..Default::default() };
    let service = RecipeService::new(load_or_sample(data), config);
    if lexicon { service.with_corpus_lexicon() } else { service }
}

fn repl(service: &RecipeService) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("Ask for any recipe or specify your preferences.");
    println!("Examples:");
    println!("  - 'Show me a recipe for chocolate cake'");
    println!("  - 'I want something with pasta'");
    println!("  - 'Give me a quick breakfast idea'");
    println!("Type 'exit' to quit.");

    let mut line = String::new();
    loop {
        print!("\nWhat would you like to cook? ");
        stdout.flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 || is_exit_command(&line) {
            println!("Goodbye!");
            return Ok(());
        }
        print!("{}", render_outcome(&service.answer(line.trim_end())));
    }
}
