//! Listing output formatting
//!
//! # Module Structure
//!
//! - `config` - Delimiter and quoting options
//! - `utils` - Field helpers (raw name bytes, quoting, timestamp rendering)
//! - `delimited` - Line-per-file formatter

mod config;
mod delimited;
mod utils;

pub use config::{DEFAULT_DELIMITER, OutputConfig};
pub use delimited::DelimitedFormatter;
