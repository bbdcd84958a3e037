//! Unified error type for SMIL translation.
//!
//! Every failure of the loader funnels into [`Error`], which carries enough
//! context for a transport layer to derive a status code via
//! [`Error::http_status`]. Extraction itself cannot fail.

use std::path::{Path, PathBuf};

/// Failure modes of a single translation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The SMIL file could not be opened or read.
    #[error("SMIL file not found: {}", path.display())]
    NotFound {
        /// The path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The input is not a well-formed XML document.
    #[error("Malformed SMIL document: {0}")]
    MalformedDocument(String),

    /// Catch-all for unexpected failures (parser limits, worker panics).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Map this error to the HTTP status a transport should answer with.
    pub fn http_status(&self) -> u16 {
        match self {
            Error::NotFound { .. } => 404,
            Error::MalformedDocument(_) => 502,
            Error::Internal(_) => 502,
        }
    }

    /// Convenience constructor for [`Error::NotFound`].
    pub fn not_found(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Error::NotFound {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Self {
        match e {
            roxmltree::Error::NodesLimitReached
            | roxmltree::Error::AttributesLimitReached
            | roxmltree::Error::NamespacesLimitReached => Error::Internal(e.to_string()),
            other => Error::MalformedDocument(other.to_string()),
        }
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
