use clap::{Args as ClapArgs, Parser, Subcommand};

use hsr::search_query::QueryLanguageVersion;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory holding config.yaml
    /// (defaults to $HSR_HOME, then the current directory)
    #[clap(long, global = true)]
    pub path: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct GrammarArgs {
    /// Query language to use: legacy or modern
    #[clap(short, long)]
    pub grammar: Option<QueryLanguageVersion>,

    /// Derive the query language from a host release, e.g. 2.1.24
    #[clap(long, conflicts_with = "grammar")]
    pub host_version: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the tokens of a search query
    Tokenize {
        /// The search query
        #[clap(allow_hyphen_values = true)]
        query: String,

        #[command(flatten)]
        grammar_args: GrammarArgs,
    },
    /// Print the terms of a search query that would be highlighted
    Terms {
        /// The search query
        #[clap(allow_hyphen_values = true)]
        query: String,

        #[command(flatten)]
        grammar_args: GrammarArgs,
    },
    /// Print the effective configuration
    Config {},
}
