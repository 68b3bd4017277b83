//! sqlsift CLI
//!
//! Command-line front end for validating restricted SQL SELECT statements.

mod report;

use std::io::Read;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use sqlsift_core::{format_query, parse_query, tokenize_with, GrammarProfile, QuoteStyle};

/// Validate and inspect restricted SQL SELECT statements.
#[derive(Parser, Debug)]
#[command(name = "sqlsift")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Require every statement to end with `;`.
    #[arg(
        long,
        global = true,
        env = "SQLSIFT_REQUIRE_SEMICOLON",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    require_semicolon: bool,

    /// Quote characters accepted around string literals.
    #[arg(long, global = true, value_enum, default_value_t = Quotes::Both)]
    quotes: Quotes,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Quotes {
    Single,
    Double,
    Both,
}

impl From<Quotes> for QuoteStyle {
    fn from(quotes: Quotes) -> Self {
        match quotes {
            Quotes::Single => Self::Single,
            Quotes::Double => Self::Double,
            Quotes::Both => Self::Both,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate queries. Reads one query per line from stdin when none are given.
    Check {
        /// Queries to validate.
        queries: Vec<String>,
    },

    /// Print the token sequence of a query.
    Tokens {
        /// Query to tokenize (stdin if omitted).
        query: Option<String>,
    },

    /// Print the parse tree of a query.
    Tree {
        /// Query to parse (stdin if omitted).
        query: Option<String>,

        /// Print the tree as JSON instead of indented text.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    fn profile(&self) -> GrammarProfile {
        GrammarProfile::default()
            .with_semicolon_required(self.require_semicolon)
            .with_quotes(self.quotes.into())
    }
}

fn read_stdin() -> anyhow::Result<String> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(input)
}

fn query_or_stdin(query: Option<String>) -> anyhow::Result<String> {
    match query {
        Some(query) => Ok(query),
        None => read_stdin(),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let profile = cli.profile();
    debug!(?profile, "using grammar profile");

    match cli.command {
        Commands::Check { queries } => {
            let input;
            let queries: Vec<&str> = if queries.is_empty() {
                input = read_stdin()?;
                report::split_queries(&input)
            } else {
                queries.iter().map(String::as_str).collect()
            };

            let mut failures = 0usize;
            for sql in &queries {
                let result = parse_query(sql, &profile);
                if result.is_err() {
                    failures += 1;
                }
                println!("{}", report::check_line(&result));
            }
            debug!(total = queries.len(), failures, "check finished");

            Ok(if failures == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }

        Commands::Tokens { query } => {
            let sql = query_or_stdin(query)?;
            match tokenize_with(&sql, &profile) {
                Ok(tokens) => {
                    print!("{}", report::token_listing(&tokens));
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    println!("Lexical error: {e}");
                    Ok(ExitCode::FAILURE)
                }
            }
        }

        Commands::Tree { query, json } => {
            let sql = query_or_stdin(query)?;
            let result = parse_query(sql.trim(), &profile);
            match &result {
                Ok(parsed) if json => {
                    println!("{}", serde_json::to_string_pretty(parsed)?);
                    Ok(ExitCode::SUCCESS)
                }
                Ok(parsed) => {
                    print!("{}", format_query(parsed));
                    Ok(ExitCode::SUCCESS)
                }
                Err(_) => {
                    println!("{}", report::check_line(&result));
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}
