use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hsr::{
    config::Config,
    search_query::{QueryLanguageVersion, SearchTokenizer},
};

mod cli;

use cli::GrammarArgs;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn base_path(path: Option<String>) -> String {
    path.or_else(|| std::env::var("HSR_HOME").ok())
        .unwrap_or_else(|| ".".to_string())
}

fn resolve_grammar(args: &GrammarArgs, config: &Config) -> anyhow::Result<QueryLanguageVersion> {
    if let Some(grammar) = args.grammar {
        return Ok(grammar);
    }

    if let Some(host_version) = &args.host_version {
        return QueryLanguageVersion::for_host_version(host_version)
            .with_context(|| format!("invalid --host-version {host_version:?}"));
    }

    Ok(config.query_language_version())
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let args = cli::Args::parse();
    let base_path = base_path(args.path);

    let config = Config::load_with(&base_path)
        .with_context(|| format!("failed to load config from {base_path}"))?;

    match args.command {
        cli::Command::Tokenize {
            query,
            grammar_args,
        } => {
            let version = resolve_grammar(&grammar_args, &config)?;
            tracing::debug!(%version, "tokenizing query");

            let tokens = SearchTokenizer::new(version).tokenize(&query);
            println!("{}", serde_json::to_string_pretty(&tokens)?);
            Ok(())
        }

        cli::Command::Terms {
            query,
            grammar_args,
        } => {
            let version = resolve_grammar(&grammar_args, &config)?;
            tracing::debug!(%version, "collecting searchable terms");

            let query = hsr::search_query::normalize_query(&query);
            let terms = SearchTokenizer::new(version).searchable_terms(&query);
            println!("{}", serde_json::to_string_pretty(&terms)?);
            Ok(())
        }

        cli::Command::Config {} => {
            print!("{}", serde_yml::to_string(&config)?);
            Ok(())
        }
    }
}
