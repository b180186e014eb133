//! CLI commands and argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// NetSuite REST client CLI
#[derive(Parser, Debug)]
#[command(name = "netsuite-rest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML); the environment is used when omitted
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Prefix of the credential environment variables (e.g. NS_PROD)
    #[arg(long, global = true, default_value = "NS")]
    pub env_prefix: String,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Fail when a paginated fetch stops before the end of the result set
    #[arg(long, global = true)]
    pub strict: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every record of a type
    List {
        /// Record type (e.g. customer, vendor, account)
        record_type: String,

        /// Page size
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Fetch every row of a SuiteAnalytics dataset
    Dataset {
        /// Dataset id (e.g. custdataset_enterprise_revenue)
        dataset_id: String,

        /// Page size
        #[arg(long, default_value = "1000")]
        limit: u32,
    },

    /// Run a SuiteQL query (without LIMIT/OFFSET)
    Query {
        /// SuiteQL query string
        query: String,

        /// Page size
        #[arg(long, default_value = "1000")]
        limit: u32,
    },

    /// Fetch one record
    Get {
        /// Record type
        record_type: String,
        /// Record id
        id: String,
    },

    /// Create a record
    Create {
        /// Record type
        record_type: String,

        /// Request body
        #[command(flatten)]
        payload: Payload,
    },

    /// Update fields of a record (PATCH)
    Update {
        /// Record type
        record_type: String,
        /// Record id
        id: String,

        /// Request body
        #[command(flatten)]
        payload: Payload,
    },

    /// Delete a record
    Delete {
        /// Record type
        record_type: String,
        /// Record id
        id: String,
    },
}

/// JSON body, inline or from a file
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct Payload {
    /// Inline JSON body
    #[arg(long)]
    pub data: Option<String>,

    /// Path to a JSON body
    #[arg(long)]
    pub data_file: Option<PathBuf>,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON
    Json,
    /// Indented JSON
    Pretty,
    /// One JSON record per line
    Jsonl,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        let cli =
            Cli::try_parse_from(["netsuite-rest", "list", "customer", "--limit", "50"]).unwrap();
        assert_eq!(cli.env_prefix, "NS");
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(
            cli.command,
            Commands::List { ref record_type, limit: Some(50) } if record_type == "customer"
        ));
    }

    #[test]
    fn test_parse_query_default_limit() {
        let cli = Cli::try_parse_from([
            "netsuite-rest",
            "--strict",
            "query",
            "SELECT id FROM customer",
        ])
        .unwrap();
        assert!(cli.strict);
        assert!(matches!(cli.command, Commands::Query { limit: 1000, .. }));
    }

    #[test]
    fn test_create_requires_payload() {
        assert!(Cli::try_parse_from(["netsuite-rest", "create", "customer"]).is_err());
        assert!(Cli::try_parse_from([
            "netsuite-rest",
            "create",
            "customer",
            "--data",
            "{}",
            "--data-file",
            "body.json"
        ])
        .is_err());
    }

    #[test]
    fn test_parse_update() {
        let cli = Cli::try_parse_from([
            "netsuite-rest",
            "-f",
            "pretty",
            "update",
            "vendor",
            "9",
            "--data",
            r#"{"email":"ap@example.com"}"#,
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Pretty);
        let Commands::Update { id, payload, .. } = cli.command else {
            panic!("Expected Update");
        };
        assert_eq!(id, "9");
        assert!(payload.data.is_some());
    }
}
