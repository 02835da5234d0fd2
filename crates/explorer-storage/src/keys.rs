//! Object-key builders for uploaded report files.
//!
//! Centralising key construction keeps the two formats in one place:
//! random keys for ad-hoc exports, deterministic keys for snapshots.

use chrono::{DateTime, Utc};
use rand::Rng;

const KEY_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const RANDOM_PART_LEN: usize = 20;

/// Key for an ad-hoc export: `"<20-char-random-upper-alnum>.csv"`.
///
/// Uniqueness is probabilistic only; nothing checks for collisions.
pub fn export_key() -> String {
    let mut rng = rand::thread_rng();
    let random_part: String = (0..RANDOM_PART_LEN)
        .map(|_| KEY_CHARSET[rng.gen_range(0..KEY_CHARSET.len())] as char)
        .collect();
    format!("{random_part}.csv")
}

/// Key for a snapshot: `"query-<id>.snap-<YYYYMMDD-HH:MM:SS>.csv"`.
///
/// Second granularity; two snapshots of the same query within one second
/// overwrite each other.
pub fn snapshot_key(query_id: i64, at: DateTime<Utc>) -> String {
    format!(
        "query-{query_id}.snap-{}.csv",
        at.format("%Y%m%d-%H:%M:%S")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_export_key_shape() {
        let key = export_key();
        assert!(key.ends_with(".csv"));
        let random_part = key.strip_suffix(".csv").unwrap();
        assert_eq!(random_part.len(), 20);
        assert!(random_part
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_export_keys_differ() {
        assert_ne!(export_key(), export_key());
    }

    #[test]
    fn test_snapshot_key_format() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 9).unwrap();
        assert_eq!(snapshot_key(42, at), "query-42.snap-20240305-14:30:09.csv");
    }
}
