//! Recursive directory listing
//!
//! `DirectoryLister` walks a tree depth-first and streams one `FileRecord`
//! per regular file into a `ListingOutput` sink. Formatting lives in
//! `crate::output`.

mod config;
mod entry;
mod walker;

pub use config::ListerConfig;
pub use entry::{DirectoryEntry, EntryKind, FileRecord, ListingSummary, display_dir};
pub use walker::{DirectoryLister, ListingOutput};
