mod commands;
mod logging;
mod parser;
mod playground;
mod query;
mod schema;
mod tui;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "subplay",
    about = "Explore a subgraph's GraphQL schema and build queries by toggling fields"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default subplay.conf in the current directory
    Init,
    /// Print the introspection query to send to the gateway
    Introspect,
    /// List the schema grouped into entities, id-less objects and scalars
    Schema {
        /// Saved introspection response (`-` for stdin)
        file: Option<PathBuf>,
    },
    /// Print every type with its fields and field types
    Outline {
        /// Saved introspection response (`-` for stdin)
        file: Option<PathBuf>,
    },
    /// Add or remove a field in a query document and print the result
    Toggle {
        /// Schema type owning the field, e.g. `Token`
        #[arg(long = "type", value_name = "TYPE")]
        type_name: String,
        /// Field to toggle, e.g. `symbol`
        #[arg(long)]
        field: String,
        /// Query document (`-` for stdin); defaults to the configured or built-in query
        query: Option<PathBuf>,
    },
    /// Print a query document in canonical indentation
    Fmt {
        /// Query document (`-` for stdin); defaults to the configured or built-in query
        query: Option<PathBuf>,
    },
    /// Print a query selecting every root field that takes no arguments
    Holistic {
        /// Saved introspection response (`-` for stdin)
        file: Option<PathBuf>,
    },
    /// Pretty-print a query result with null, empty string and empty list values removed
    Prune {
        /// Query result JSON; reads stdin when omitted
        file: Option<PathBuf>,
    },
    /// Open the interactive schema explorer
    View {
        /// Saved introspection response (`-` for stdin)
        file: Option<PathBuf>,
        /// Query document to start from
        #[arg(long)]
        query: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !matches!(cli.command, Command::View { .. }) {
        logging::init();
    }

    match cli.command {
        Command::Init => commands::init::run(),
        Command::Introspect => commands::introspect::run(),
        Command::Schema { file } => commands::schema::run(file),
        Command::Outline { file } => commands::outline::run(file),
        Command::Toggle {
            type_name,
            field,
            query,
        } => commands::toggle::run(&type_name, &field, query),
        Command::Fmt { query } => commands::fmt::run(query),
        Command::Holistic { file } => commands::holistic::run(file),
        Command::Prune { file } => commands::prune::run(file),
        Command::View { file, query } => commands::view::run(file, query),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn toggle_requires_type_and_field() {
        let parsed = Cli::try_parse_from(["subplay", "toggle", "--field", "name"]);
        let err = parsed.err().expect("expected clap parse error");
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn toggle_parses_type_field_and_query() {
        let cli = Cli::try_parse_from([
            "subplay", "toggle", "--type", "Token", "--field", "symbol", "q.graphql",
        ])
        .expect("toggle should parse");
        match cli.command {
            Command::Toggle {
                type_name,
                field,
                query,
            } => {
                assert_eq!(type_name, "Token");
                assert_eq!(field, "symbol");
                assert_eq!(query, Some(PathBuf::from("q.graphql")));
            }
            _ => panic!("expected toggle command"),
        }
    }

    #[test]
    fn view_accepts_stdin_schema() {
        let cli = Cli::try_parse_from(["subplay", "view", "-"]).expect("view should parse");
        match cli.command {
            Command::View { file, query } => {
                assert_eq!(file, Some(PathBuf::from("-")));
                assert!(query.is_none());
            }
            _ => panic!("expected view command"),
        }
    }
}
