//! CLI argument definitions using clap
//!
//! Commands:
//! - tms serve [--config <path>] [--port <port>]
//! - tms init [--config <path>]
//! - tms export <id> [--config <path>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// TMS - a minimal test case management API
#[derive(Parser, Debug)]
#[command(name = "tms")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// SQLite database file (overrides the config file)
    #[arg(long)]
    pub database: Option<PathBuf>,

    /// Directory exported documents are written to (overrides the config file)
    #[arg(long)]
    pub export_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP API server
    Serve {
        #[command(flatten)]
        config: ConfigArgs,

        /// Port to listen on (overrides the config file)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Create the database schema and exit
    Init {
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Export one test case to a document and exit
    Export {
        /// Test case id
        test_case_id: i64,

        #[command(flatten)]
        config: ConfigArgs,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = Cli::try_parse_from(["tms", "serve", "--port", "8080", "--database", "x.db"]).unwrap();
        match cli.command {
            Command::Serve { config, port } => {
                assert_eq!(port, Some(8080));
                assert_eq!(config.database, Some(PathBuf::from("x.db")));
                assert_eq!(config.config, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_export() {
        let cli = Cli::try_parse_from(["tms", "-v", "export", "3", "--export-dir", "out"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Command::Export { test_case_id, config } => {
                assert_eq!(test_case_id, 3);
                assert_eq!(config.export_dir, Some(PathBuf::from("out")));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_export_requires_id() {
        assert!(Cli::try_parse_from(["tms", "export"]).is_err());
    }
}
