//! Field rendering helpers shared by formatters

use std::borrow::Cow;
use std::ffi::OsStr;
use std::time::SystemTime;

use chrono::{DateTime, Local};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.9f %z";

/// Raw bytes of an OS string, as the filesystem stored them.
#[cfg(unix)]
pub fn os_bytes(text: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;

    Cow::Borrowed(text.as_bytes())
}

/// Non-unix names have no byte form; invalid sequences become U+FFFD.
#[cfg(not(unix))]
pub fn os_bytes(text: &OsStr) -> Cow<'_, [u8]> {
    match text.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}

/// Wrap a field in one pair of double quotes. Contents are not escaped.
pub fn quote(field: &[u8]) -> Vec<u8> {
    let mut quoted = Vec::with_capacity(field.len() + 2);
    quoted.push(b'"');
    quoted.extend_from_slice(field);
    quoted.push(b'"');
    quoted
}

/// Quote `field` only when quoting is enabled.
pub fn string_field(field: &[u8], quote_fields: bool) -> Vec<u8> {
    if quote_fields {
        quote(field)
    } else {
        field.to_vec()
    }
}

/// Render a modification time in local time with nanoseconds and UTC offset.
pub fn format_timestamp(time: SystemTime) -> String {
    let local: DateTime<Local> = time.into();
    local.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, UNIX_EPOCH};

    use super::*;

    #[test]
    fn test_quote_wraps_once() {
        assert_eq!(quote(b"a.txt"), b"\"a.txt\"");
        assert_eq!(quote(b""), b"\"\"");
    }

    #[test]
    fn test_string_field_passthrough() {
        assert_eq!(string_field(b"a.txt", false), b"a.txt");
        assert_eq!(string_field(b"a.txt", true), b"\"a.txt\"");
    }

    #[test]
    fn test_os_bytes_utf8() {
        assert_eq!(&*os_bytes(OsStr::new("日本語.txt")), "日本語.txt".as_bytes());
    }

    #[test]
    #[cfg(unix)]
    fn test_os_bytes_keeps_invalid_utf8() {
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"bad\xff.txt");
        assert_eq!(&*os_bytes(name), b"bad\xff.txt");
    }

    #[test]
    fn test_timestamp_shape() {
        let time = UNIX_EPOCH + Duration::new(1_700_000_000, 123_456_789);
        let text = format_timestamp(time);

        // "YYYY-MM-DD HH:MM:SS.nnnnnnnnn +ZZZZ"
        let parts: Vec<&str> = text.split(' ').collect();
        assert_eq!(parts.len(), 3, "timestamp: {}", text);
        assert_eq!(parts[0].len(), 10);
        assert!(parts[1].ends_with(".123456789"), "timestamp: {}", text);
        assert!(parts[2].starts_with('+') || parts[2].starts_with('-'));
        assert!(!text.contains(','));
    }

    #[test]
    fn test_timestamp_is_stable() {
        let time = UNIX_EPOCH + Duration::from_secs(86_400);
        assert_eq!(format_timestamp(time), format_timestamp(time));
    }
}
