//! Output formatting.

use commit_stats::{to_json, CommitSnapshot, JsonOptions};

/// Lowercase hex, no separators.
pub fn format_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Render a decoded snapshot, or `null` when the optional form was absent.
pub fn format_snapshot(
    snapshot: Option<&CommitSnapshot>,
    pretty: bool,
) -> commit_stats::Result<String> {
    match snapshot {
        Some(snapshot) => to_json(snapshot, &JsonOptions::new().pretty(pretty)),
        None => Ok("null".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commit_stats::UserData;

    #[test]
    fn test_format_hex() {
        assert_eq!(format_hex(&[]), "");
        assert_eq!(format_hex(&[0x00, 0x0a, 0xff]), "000aff");
    }

    #[test]
    fn test_format_snapshot() {
        let snapshot = CommitSnapshot::new(
            UserData::builder().with("sync_id", Some("abc")).build(),
            3,
        );
        assert_eq!(
            format_snapshot(Some(&snapshot), false).unwrap(),
            r#"{"commit":{"generation":3,"user_data":{"sync_id":"abc"}}}"#
        );
        assert!(format_snapshot(Some(&snapshot), true)
            .unwrap()
            .starts_with("{\n  \"commit\": {"));
        assert_eq!(format_snapshot(None, true).unwrap(), "null");
    }
}
