use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CellBaseError;

pub const DEFAULT_HOST: &str = "http://bioinfo.hpc.cam.ac.uk/cellbase";
pub const DEFAULT_VERSION: &str = "v4";
pub const DEFAULT_SPECIES: &str = "hsapiens";

/// Read-only connection parameters shared by every call of a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfiguration {
    pub host: String,
    pub version: String,
    pub species: String,
}

impl Default for ClientConfiguration {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_VERSION, DEFAULT_SPECIES)
    }
}

impl ClientConfiguration {
    pub fn new(host: &str, version: &str, species: &str) -> Self {
        Self {
            host: normalize_host(host),
            version: version.trim_matches('/').to_string(),
            species: species.trim_matches('/').to_string(),
        }
    }

    /// Loads a JSON config file. The `rest.hosts` list may name several
    /// mirrors; the first entry wins.
    pub fn from_file(path: &Path) -> Result<Self, CellBaseError> {
        let content = fs::read_to_string(path)
            .map_err(|_| CellBaseError::ConfigRead(PathBuf::from(path)))?;
        let file: ConfigFile = serde_json::from_str(&content)
            .map_err(|err| CellBaseError::ConfigParse(err.to_string()))?;

        let host = file
            .rest
            .hosts
            .first()
            .ok_or(CellBaseError::ConfigNoHosts)?;
        let version = file.version.unwrap_or_else(|| DEFAULT_VERSION.to_string());
        let species = file.species.unwrap_or_else(|| DEFAULT_SPECIES.to_string());

        Ok(Self::new(host, &version, &species))
    }
}

#[derive(Debug, Deserialize, Serialize)]
struct ConfigFile {
    #[serde(default)]
    species: Option<String>,
    #[serde(default)]
    version: Option<String>,
    rest: RestSection,
}

#[derive(Debug, Deserialize, Serialize)]
struct RestSection {
    hosts: Vec<String>,
}

fn normalize_host(host: &str) -> String {
    let trimmed = host.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}
