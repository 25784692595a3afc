//! Delimited line formatter
//!
//! `DelimitedFormatter` renders each file as
//! `path DELIM name DELIM size DELIM mtime [DELIM md5] [DELIM sha256]`
//! and writes it straight to the underlying writer. Path and name go out as
//! the raw bytes the filesystem returned.

use std::ffi::OsStr;
use std::io::{self, BufWriter, StdoutLock, Write};

use crate::lister::{FileRecord, ListingOutput, ListingSummary};

use super::config::OutputConfig;
use super::utils::{format_timestamp, os_bytes, string_field};

/// Line-per-file formatter. Implements `ListingOutput` for use with `DirectoryLister`.
pub struct DelimitedFormatter<W: Write> {
    config: OutputConfig,
    writer: W,
}

impl DelimitedFormatter<BufWriter<StdoutLock<'static>>> {
    /// Formatter over a buffered, locked stdout.
    pub fn stdout(config: OutputConfig) -> Self {
        Self::new(config, BufWriter::new(io::stdout().lock()))
    }
}

impl<W: Write> DelimitedFormatter<W> {
    pub fn new(config: OutputConfig, writer: W) -> Self {
        Self { config, writer }
    }

    /// Render one file record without the trailing newline.
    pub fn format_record(&self, record: &FileRecord) -> Vec<u8> {
        let quote = self.config.quote_fields;

        let mut fields = vec![
            string_field(&os_bytes(&record.dir_display), quote),
            string_field(&os_bytes(&record.name), quote),
            record.size.to_string().into_bytes(),
            format_timestamp(record.modified).into_bytes(),
        ];
        if let Some(md5) = &record.md5 {
            fields.push(string_field(md5.as_bytes(), quote));
        }
        if let Some(sha256) = &record.sha256 {
            fields.push(string_field(sha256.as_bytes(), quote));
        }

        fields.join(self.config.delimiter.as_bytes())
    }

    /// Render a subdirectory announcement line without the trailing newline.
    pub fn format_announcement(&self, name: &OsStr) -> Vec<u8> {
        string_field(&os_bytes(name), self.config.quote_fields)
    }

    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.writer.write_all(line)?;
        self.writer.write_all(b"\n")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ListingOutput for DelimitedFormatter<W> {
    fn announce_directory(&mut self, name: &OsStr) -> io::Result<()> {
        let line = self.format_announcement(name);
        self.write_line(&line)
    }

    fn write_file(&mut self, record: &FileRecord) -> io::Result<()> {
        let line = self.format_record(record);
        self.write_line(&line)
    }

    fn finish(&mut self, _summary: &ListingSummary) -> io::Result<()> {
        self.writer.flush()
    }
}
