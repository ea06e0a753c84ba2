//! Configuration file handling
//!
//! The file is a single JSON object. Every field is optional; command line
//! flags override whatever the file says.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

use super::args::ConfigArgs;
use super::errors::{CliError, CliResult};
use crate::export::ExportLabels;

/// Service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database file (default "testcases.db")
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// Directory exported documents are written to (default ".")
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,

    /// HTTP listener settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Labels printed in exported documents
    #[serde(default)]
    pub export_labels: ExportLabels,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("testcases.db")
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            export_dir: default_export_dir(),
            http: HttpConfig::default(),
            export_labels: ExportLabels::default(),
        }
    }
}

/// The `http` section: where to listen and which origins may call the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Host to bind to (default "0.0.0.0")
    pub host: String,

    /// Port to bind to (default 5000)
    pub port: u16,

    /// Allowed CORS origins; empty allows any origin
    pub cors_origins: Vec<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            cors_origins: Vec::new(),
        }
    }
}

impl HttpConfig {
    /// Parse `host:port` into a bindable address
    pub fn socket_addr(&self) -> CliResult<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|e| CliError::config_error(format!("Invalid http address '{}': {}", addr, e)))
    }

    /// Parse the CORS origins into header values
    pub fn cors_origins(&self) -> CliResult<Vec<HeaderValue>> {
        self.cors_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| {
                    CliError::config_error(format!("Invalid CORS origin '{}'", origin))
                })
            })
            .collect()
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load the file named by `--config` (or defaults) and apply flag overrides
    pub fn resolve(args: &ConfigArgs) -> CliResult<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(database) = &args.database {
            config.database_path = database.clone();
        }
        if let Some(export_dir) = &args.export_dir {
            config.export_dir = export_dir.clone();
        }

        config.validate()?;
        Ok(config)
    }

    /// Override the listening port
    pub fn with_port(mut self, port: Option<u16>) -> CliResult<Self> {
        if let Some(port) = port {
            self.http.port = port;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> CliResult<()> {
        if self.database_path.as_os_str().is_empty() {
            return Err(CliError::config_error("database_path must not be empty"));
        }

        if self.export_dir.as_os_str().is_empty() {
            return Err(CliError::config_error("export_dir must not be empty"));
        }

        if self.http.port == 0 {
            return Err(CliError::config_error("http.port must be > 0"));
        }

        self.http.socket_addr()?;
        self.http.cors_origins()?;
        Ok(())
    }
}
