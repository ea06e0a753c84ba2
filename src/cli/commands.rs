//! CLI command implementations
//!
//! Each command resolves its configuration, opens the store (creating the
//! schema when needed) and runs on a fresh tokio runtime.

use serde::Serialize;
use serde_json::json;
use tracing::info;

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};
use crate::export::{ExportedDocument, Exporter};
use crate::http_server::{HttpServer, TestCaseState};
use crate::observability;
use crate::store::TestCaseStore;

/// Parse arguments, set up logging, and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    observability::init_logging(cli.verbose)
        .map_err(|e| CliError::boot_failed(format!("Failed to initialize logging: {}", e)))?;

    run_command(cli.command)
}

/// Dispatch one command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config, port } => {
            let config = Config::resolve(&config)?.with_port(port)?;
            serve(config)
        }
        Command::Init { config } => init(Config::resolve(&config)?),
        Command::Export {
            test_case_id,
            config,
        } => export(Config::resolve(&config)?, test_case_id),
    }
}

fn runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))
}

/// Start the HTTP server
pub fn serve(config: Config) -> CliResult<()> {
    let addr = config.http.socket_addr()?;
    let cors_origins = config.http.cors_origins()?;

    runtime()?.block_on(async {
        let store = TestCaseStore::open(&config.database_path).await?;
        let exporter = Exporter::with_labels(&config.export_dir, config.export_labels.clone());

        let server = HttpServer::new(addr, TestCaseState::new(store.clone(), exporter))
            .with_cors_origins(cors_origins);

        info!(
            database = %config.database_path.display(),
            export_dir = %config.export_dir.display(),
            "Starting TMS API on {}",
            server.socket_addr()
        );

        let result = server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)));

        store.close().await;
        result
    })
}

/// Create the database schema and exit
pub fn init(config: Config) -> CliResult<()> {
    runtime()?.block_on(async {
        let store = TestCaseStore::open(&config.database_path).await?;
        store.close().await;

        println!(
            "{}",
            json!({ "message": format!("Initialized {}", config.database_path.display()) })
        );
        Ok::<(), CliError>(())
    })
}

/// Export one test case without starting the server
pub fn export(config: Config, test_case_id: i64) -> CliResult<()> {
    runtime()?.block_on(async {
        let store = TestCaseStore::open(&config.database_path).await?;
        let exporter = Exporter::with_labels(&config.export_dir, config.export_labels.clone());

        let result = exporter.export(&store, test_case_id).await;
        store.close().await;
        let exported = result?;

        println!("{}", export_report(&exported)?);
        Ok::<(), CliError>(())
    })
}

/// Line printed by `export`: the API's message plus the document details
#[derive(Serialize)]
struct ExportReport<'a> {
    message: String,
    #[serde(flatten)]
    document: &'a ExportedDocument,
}

fn export_report(exported: &ExportedDocument) -> CliResult<String> {
    let report = ExportReport {
        message: format!("Exported to {}", exported.file_name),
        document: exported,
    };
    Ok(serde_json::to_string(&report)?)
}
