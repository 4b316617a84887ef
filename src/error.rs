//! Error types shared by the walker, the renderers, and the CLI.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A failed tree run. Every variant is fatal to the invocation: there is no
/// retry and no partial tree.
#[derive(Debug, Error)]
pub enum Error {
    /// The target path does not refer to a directory.
    #[error("'{}' is not a directory", path.display())]
    InvalidTarget { path: PathBuf },

    /// A directory listing failed, either because access was denied or
    /// because the path vanished mid-traversal.
    #[error("cannot list '{}': {source}", path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The rendered output could not be written.
    #[error("cannot write '{target}': {source}")]
    Write {
        target: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
