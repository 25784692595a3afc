//! Streaming file digests rendered as lowercase hex

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use md5::Md5;
use sha2::{Digest, Sha256};

const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Hash algorithms a listing can append to a file line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Md5,
    Sha256,
}

impl HashAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha256 => "sha256",
        }
    }
}

/// Feed everything `reader` yields into a fresh `D` and return the hex digest.
pub fn hex_digest<D: Digest, R: Read>(reader: &mut R) -> io::Result<String> {
    let mut hasher = D::new();
    let mut buffer = vec![0u8; READ_BUFFER_SIZE];

    loop {
        let bytes_read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Open `path` and digest its full contents with `algorithm`.
///
/// The file is read from the start on every call, so asking for both
/// algorithms reads the file twice.
pub fn digest_file(path: &Path, algorithm: HashAlgorithm) -> io::Result<String> {
    let mut reader = BufReader::new(File::open(path)?);
    let hex = match algorithm {
        HashAlgorithm::Md5 => hex_digest::<Md5, _>(&mut reader)?,
        HashAlgorithm::Sha256 => hex_digest::<Sha256, _>(&mut reader)?,
    };
    log::trace!("{} {} {}", algorithm.as_str(), hex, path.display());
    Ok(hex)
}
