//! Error types for uploads and configuration files.

use crate::types::Service;
use reqwest::StatusCode;
use std::path::PathBuf;
use std::time::Duration;

/// Why an upload failed. Each variant names the phase that failed.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// The form, the HTTP client, or the request could not be built
    #[error("failed to build upload request: {0}")]
    Construction(#[source] reqwest::Error),

    /// The round trip took longer than the caller's timeout
    #[error("upload to {service} timed out after {} seconds", .timeout.as_secs())]
    Timeout { service: Service, timeout: Duration },

    /// DNS, refused connection, TLS and other transport failures
    #[error("failed to connect to {service}: {source}")]
    Connection {
        service: Service,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with something other than 200
    #[error("HTTP error occurred: {} - {body}", status_line(.status))]
    Remote { status: StatusCode, body: String },

    /// Status was 200 but the body could not be read
    #[error("failed to read response body: {0}")]
    ResponseRead(#[source] reqwest::Error),
}

/// `404 Not Found`, or just `499` when the code has no standard reason
fn status_line(status: &StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

impl UploadError {
    /// Classify a failure from sending the request.
    pub(crate) fn from_send(service: Service, timeout: Duration, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UploadError::Timeout { service, timeout }
        } else if err.is_builder() {
            UploadError::Construction(err)
        } else {
            UploadError::Connection { service, source: err }
        }
    }

    /// Classify a failure from reading a 200 response body.
    pub(crate) fn from_body(service: Service, timeout: Duration, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UploadError::Timeout { service, timeout }
        } else {
            UploadError::ResponseRead(err)
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, UploadError::Timeout { .. })
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, UploadError::Connection { .. })
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, UploadError::Remote { .. })
    }

    /// HTTP status of a remote rejection
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            UploadError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors from reading or writing the uploader config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not find config directory")]
    NoConfigDir,

    #[error("failed to access config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}
