//! Error types.
//!
//! A top-level [`Error`] with one sub-enum per concern. Store failures are
//! wrapped in [`Error::StoreAccess`] by the engine so they carry the
//! operation and path that triggered them.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Top-level error for all keepath operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid path: {0}")]
    InvalidPath(#[from] PathError),

    #[error("{op} {path}: {source}")]
    StoreAccess {
        op: Operation,
        path: String,
        #[source]
        source: StoreError,
    },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Input(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Wrap a store failure with the operation and path it happened under.
    pub fn store_access(op: Operation, path: impl fmt::Display, source: StoreError) -> Self {
        Error::StoreAccess {
            op,
            path: path.to_string(),
            source,
        }
    }
}

/// The externally visible operations, used for error context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ReadSecret,
    ReadGroup,
    WriteSecret,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::ReadSecret => "read-secret",
            Operation::ReadGroup => "read-group",
            Operation::WriteSecret => "write-secret",
        };
        f.write_str(name)
    }
}

/// Rejected path input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("path is required")]
    Missing,

    #[error("path is empty or blank")]
    Blank,

    #[error("path '{0}' has no segments")]
    NoSegments(String),
}

/// Failures raised by a tree store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("unknown group id {0}")]
    UnknownGroup(usize),

    #[error("unknown entry id {0}")]
    UnknownEntry(usize),

    #[error("database not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("database already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("failed to read database: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write database: {0}")]
    Write(#[source] std::io::Error),

    #[error("decryption failed: {0}")]
    Decrypt(String),

    #[error("encryption failed: {0}")]
    Encrypt(String),

    #[error("corrupt database: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize database: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Configuration loading failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("no password given: pass --master-password or set KEEPATH_PASSWORD")]
    NoPassword,

    #[error("password prompt failed: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, Error>;
