use std::{path::PathBuf, process::ExitCode, time::Instant};

use clap::{Parser, ValueEnum};
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use lexscan::{
    aggregate::aggregate::TokenTable,
    display_error,
    errors::errors::Error,
    lexer::lexer::{first_error, Tokenizer},
    render::render::render,
    source::source::load_source,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TableFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "lexscan")]
#[command(about = "Highlight a source file and count its tokens by category", version)]
struct Cli {
    /// File to scan
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Print the source without ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Skip the highlighted source
    #[arg(long)]
    no_render: bool,

    /// Skip the token table
    #[arg(long)]
    no_table: bool,

    /// Token table format
    #[arg(short, long, value_enum, default_value = "text")]
    format: TableFormat,

    /// Fail on the first unrecognised character
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(level: Level) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lexscan={},warn", level)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(if cli.verbose { Level::DEBUG } else { Level::WARN });

    let content = match load_source(&cli.input) {
        Ok(content) => content,
        Err(err) => {
            display_error(&err, "", &cli.input);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let tokenizer = Tokenizer::new();
    let tokens = tokenizer.scan(&content);
    info!(elapsed = ?start.elapsed(), tokens = tokens.len(), "tokenized");

    if cli.strict {
        if let Some(token) = first_error(&tokens) {
            display_error(&Error::from_token(token), &content, &cli.input);
            return ExitCode::FAILURE;
        }
    }

    if !cli.no_render {
        println!("{}", render(&tokens, !cli.no_color));
    }

    if !cli.no_table {
        let table = TokenTable::from_tokens(&tokens);

        match cli.format {
            TableFormat::Text => print!("{}", table.report()),
            TableFormat::Json => match table.to_json() {
                Ok(json) => println!("{}", json),
                Err(err) => {
                    error!("{}", err);
                    return ExitCode::FAILURE;
                }
            },
        }
    }

    ExitCode::SUCCESS
}
