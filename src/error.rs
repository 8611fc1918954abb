use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CellBaseError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("gateway timed out after {attempts} attempts: {url}")]
    GatewayTimeout { attempts: u32, url: String },

    #[error("response body is not valid JSON: {0}")]
    Decode(String),

    #[error("unexpected response envelope: {0}")]
    Envelope(String),

    #[error("missing config file at {0}")]
    ConfigRead(PathBuf),

    #[error("failed to parse JSON config: {0}")]
    ConfigParse(String),

    #[error("no hosts defined in config file")]
    ConfigNoHosts,
}

impl CellBaseError {
    /// Transient failures worth re-issuing through the backoff wrapper.
    /// Status and envelope errors are authoritative answers, not glitches.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CellBaseError::Transport(_) | CellBaseError::Decode(_)
        )
    }
}
