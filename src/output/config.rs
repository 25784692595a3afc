//! Output configuration types

pub const DEFAULT_DELIMITER: &str = ",";

/// Configuration for line formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Separator placed between fields
    pub delimiter: String,
    /// Wrap string fields in double quotes
    pub quote_fields: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            quote_fields: false,
        }
    }
}
