//! Per-entry records produced while walking

use std::ffi::OsString;
use std::fs::{DirEntry, FileType};
use std::path::{MAIN_SEPARATOR, MAIN_SEPARATOR_STR, Path, PathBuf};
use std::time::SystemTime;

use crate::error::{ListError, Result};

/// How the walk treats an entry. Symlinks are never followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// Symlinks, sockets, FIFOs, devices
    Other,
}

impl From<FileType> for EntryKind {
    fn from(file_type: FileType) -> Self {
        if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

/// One filesystem entry, alive only while its line is produced.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    /// Raw OS name, not necessarily UTF-8
    pub name: OsString,
    pub path: PathBuf,
    pub kind: EntryKind,
    pub size: u64,
    pub modified: SystemTime,
}

impl DirectoryEntry {
    /// Read name, type, size and mtime without following symlinks.
    pub fn from_dir_entry(entry: &DirEntry) -> Result<Self> {
        let path = entry.path();
        let metadata = entry.metadata().map_err(|source| ListError::Metadata {
            path: path.clone(),
            source,
        })?;
        let modified = metadata.modified().map_err(|source| ListError::Metadata {
            path: path.clone(),
            source,
        })?;

        Ok(Self {
            name: entry.file_name(),
            kind: metadata.file_type().into(),
            size: metadata.len(),
            modified,
            path,
        })
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Everything an output sink needs to render one file line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Containing directory, always ending in a path separator
    pub dir_display: OsString,
    pub name: OsString,
    pub size: u64,
    pub modified: SystemTime,
    pub md5: Option<String>,
    pub sha256: Option<String>,
}

impl FileRecord {
    pub fn new(dir_display: &OsString, entry: &DirectoryEntry) -> Self {
        Self {
            dir_display: dir_display.clone(),
            name: entry.name.clone(),
            size: entry.size,
            modified: entry.modified,
            md5: None,
            sha256: None,
        }
    }
}

/// Counts reported once a walk completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingSummary {
    /// Subdirectories descended into, the root excluded
    pub dir_count: usize,
    pub file_count: usize,
}

/// Render a directory path with exactly one trailing separator added when missing.
///
/// The path keeps its raw OS bytes; only the trailing-separator check looks at
/// a lossy view, which cannot turn a non-separator into one.
pub fn display_dir(path: &Path) -> OsString {
    let mut text = path.as_os_str().to_os_string();
    if !path.as_os_str().to_string_lossy().ends_with(MAIN_SEPARATOR) {
        text.push(MAIN_SEPARATOR_STR);
    }
    text
}
