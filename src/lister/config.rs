//! Configuration types for the directory lister

use crate::digest::HashAlgorithm;

/// What the lister does besides emitting one line per file.
#[derive(Debug, Clone, Default)]
pub struct ListerConfig {
    /// Emit a standalone line with each subdirectory's name before its files
    pub announce_subdirectories: bool,
    pub include_md5: bool,
    pub include_sha256: bool,
}

impl ListerConfig {
    /// Digests to compute per file, in the order they appear on the line.
    pub fn hash_algorithms(&self) -> Vec<HashAlgorithm> {
        let mut algorithms = Vec::with_capacity(2);
        if self.include_md5 {
            algorithms.push(HashAlgorithm::Md5);
        }
        if self.include_sha256 {
            algorithms.push(HashAlgorithm::Sha256);
        }
        algorithms
    }
}
