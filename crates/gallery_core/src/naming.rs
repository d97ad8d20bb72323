//! Image name generation

use chrono::Utc;

/// Source of fresh image filenames
pub trait NameSource: Send + Sync {
    /// Next generated filename, unique within a session
    fn next_name(&self) -> String;
}

/// Timestamp-based names, `<epoch-millis>.jpg`
///
/// Two calls inside the same millisecond would collide; the window is not
/// defended against.
pub struct TimestampNames;

impl NameSource for TimestampNames {
    fn next_name(&self) -> String {
        format!("{}.jpg", Utc::now().timestamp_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_shape() {
        let name = TimestampNames.next_name();

        let millis = name.strip_suffix(".jpg").unwrap();
        assert!(millis.parse::<i64>().unwrap() > 0);
    }
}
