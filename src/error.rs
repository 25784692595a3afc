//! Error type for listing operations

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every failure that aborts a listing.
///
/// Nothing is recovered inside the walk: the first error unwinds the whole
/// traversal and is reported by the binary.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("cannot read directory '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read an entry of '{}': {source}", path.display())]
    ReadEntry {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read metadata of '{}': {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot hash '{}': {source}", path.display())]
    Hash {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ListError>;
