use std::{
    collections::HashSet,
    env, fs, io,
    path::{Path, PathBuf},
};

use clap::Parser;
use recordstore::model::record::RecordInput;
use thiserror::Error;

pub const ADMIN_PASSWORD_VAR: &str = "ADMIN_PASSWORD";

/// Path reserved for the admin portal, no resource may be mounted there
pub const ADMIN_SEGMENT: &str = "admin";

/// 📀 Record store HTTP server, keeps records in memory and serves them as JSON
///
/// Requires `ADMIN_PASSWORD` to be set (a `.env` file in the working directory is also read)
#[derive(Parser, Debug)]
pub struct Cli {
    /// Port the http server will run on
    #[clap(short, long, default_value = "8080")]
    pub port: u16,

    /// Address the http server will run on
    #[clap(short, long, default_value = "0.0.0.0")]
    pub address: String,

    /// Log every http request
    #[clap(long)]
    pub log_http: bool,

    #[clap(long, default_value_t = 2)]
    pub http_workers: usize,

    /// Resource to mount, e.g. `meetings`. Repeat to mount several, each has its own isolated store
    #[clap(short, long = "resource", default_value = "records")]
    pub resources: Vec<String>,

    /// JSON file holding an array of `{"name", "email"}` objects loaded into every store on startup
    #[clap(short, long)]
    pub seed: Option<PathBuf>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("required env var ADMIN_PASSWORD not set")]
    MissingAdminPassword,

    #[error("Invalid resource name [{0}], must be a single non-empty path segment other than 'admin'")]
    InvalidResourceName(String),

    #[error("Resource [{0}] is mounted more than once")]
    DuplicateResource(String),

    #[error("Cannot read seed file [{path}]: {source}")]
    SeedUnreadable { path: PathBuf, source: io::Error },

    #[error("Cannot parse seed file [{path}]: {source}")]
    SeedInvalid {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Reads the admin secret once, an unset or empty value is an error
pub fn load_admin_password() -> Result<String, ConfigError> {
    read_admin_password(ADMIN_PASSWORD_VAR)
}

fn read_admin_password(key: &str) -> Result<String, ConfigError> {
    env::var(key)
        .ok()
        .filter(|password| !password.is_empty())
        .ok_or(ConfigError::MissingAdminPassword)
}

pub fn validate_resources(resources: &[String]) -> Result<Vec<String>, ConfigError> {
    let mut seen = HashSet::new();

    for resource in resources {
        if resource.is_empty() || resource.contains('/') || resource == ADMIN_SEGMENT {
            return Err(ConfigError::InvalidResourceName(resource.clone()));
        }

        if !seen.insert(resource.as_str()) {
            return Err(ConfigError::DuplicateResource(resource.clone()));
        }
    }

    Ok(resources.to_vec())
}

pub fn load_seed(path: &Path) -> Result<Vec<RecordInput>, ConfigError> {
    let bytes = fs::read(path).map_err(|source| ConfigError::SeedUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&bytes).map_err(|source| ConfigError::SeedInvalid {
        path: path.to_path_buf(),
        source,
    })
}
