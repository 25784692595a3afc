//! listfile - list every file under a directory as delimited lines

pub mod digest;
pub mod error;
pub mod lister;
pub mod output;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use digest::{HashAlgorithm, digest_file};
pub use error::{ListError, Result};
pub use lister::{DirectoryLister, FileRecord, ListerConfig, ListingOutput, ListingSummary};
pub use output::{DelimitedFormatter, OutputConfig};
