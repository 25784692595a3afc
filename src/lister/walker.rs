//! DirectoryLister - depth-first walk that streams one record per file

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::Path;

use crate::digest::{HashAlgorithm, digest_file};
use crate::error::{ListError, Result};

use super::config::ListerConfig;
use super::entry::{DirectoryEntry, FileRecord, ListingSummary, display_dir};

/// Sink for listing output - receives records in walk order.
pub trait ListingOutput {
    /// Called for each subdirectory before its contents, when announcements are enabled.
    fn announce_directory(&mut self, name: &OsStr) -> std::io::Result<()>;

    fn write_file(&mut self, record: &FileRecord) -> std::io::Result<()>;

    fn finish(&mut self, summary: &ListingSummary) -> std::io::Result<()>;
}

/// Recursive lister. Entries are visited in the order the OS returns them.
///
/// The first failure anywhere in the tree aborts the walk; records already
/// handed to the output stay there.
pub struct DirectoryLister {
    config: ListerConfig,
}

impl DirectoryLister {
    pub fn new(config: ListerConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and stream every regular file beneath it into `output`.
    pub fn list<O: ListingOutput>(&self, root: &Path, output: &mut O) -> Result<ListingSummary> {
        let mut summary = ListingSummary::default();
        self.walk_dir(root, output, &mut summary)?;
        output.finish(&summary)?;

        log::debug!(
            "listed {} files in {} subdirectories under {}",
            summary.file_count,
            summary.dir_count,
            root.display()
        );
        Ok(summary)
    }

    fn walk_dir<O: ListingOutput>(
        &self,
        dir: &Path,
        output: &mut O,
        summary: &mut ListingSummary,
    ) -> Result<()> {
        log::debug!("reading {}", dir.display());

        let entries = fs::read_dir(dir).map_err(|source| ListError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let dir_display = display_dir(dir);

        for entry in entries {
            let entry = entry.map_err(|source| ListError::ReadEntry {
                path: dir.to_path_buf(),
                source,
            })?;
            let entry = DirectoryEntry::from_dir_entry(&entry)?;

            if entry.is_dir() {
                if self.config.announce_subdirectories {
                    output.announce_directory(&entry.name)?;
                }
                summary.dir_count += 1;
                self.walk_dir(&entry.path, output, summary)?;
            } else if entry.is_file() {
                let record = self.build_record(&dir_display, &entry)?;
                output.write_file(&record)?;
                summary.file_count += 1;
            } else {
                log::debug!("skipping {} (not a regular file)", entry.path.display());
            }
        }

        Ok(())
    }

    fn build_record(&self, dir_display: &OsString, entry: &DirectoryEntry) -> Result<FileRecord> {
        let mut record = FileRecord::new(dir_display, entry);

        for algorithm in self.config.hash_algorithms() {
            let hex = digest_file(&entry.path, algorithm).map_err(|source| ListError::Hash {
                path: entry.path.clone(),
                source,
            })?;
            match algorithm {
                HashAlgorithm::Md5 => record.md5 = Some(hex),
                HashAlgorithm::Sha256 => record.sha256 = Some(hex),
            }
        }

        Ok(record)
    }
}
