//! Counter persistence error types.
//!
//! Reading the counter file never fails: a missing or corrupt file is a
//! count of zero. Only writing the new value back can go wrong.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while persisting the cake count.
#[derive(Debug, Error)]
pub enum CounterError {
    /// The temporary file next to the counter file could not be created or written.
    #[error("failed to write cake count to '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The temporary file could not be renamed over the counter file.
    #[error("failed to replace counter file '{path}'")]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
