//! Collision-resistant names for uploaded attachments.
//!
//! Format: `{epoch_millis}-{fragment}.{extension}` where `fragment` is a
//! short random base36 string. Names are never reused across attempts.

use chrono::Utc;
use memorial_types::submission::{SelectedFile, StoredReference};
use uuid::Uuid;

/// Length of the random base36 fragment.
pub const FRAGMENT_LEN: usize = 8;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Random lowercase base36 fragment of [`FRAGMENT_LEN`] characters.
pub fn random_fragment() -> String {
    let mut bits = Uuid::new_v4().as_u128();
    let mut out = String::with_capacity(FRAGMENT_LEN);
    for _ in 0..FRAGMENT_LEN {
        out.push(BASE36_DIGITS[(bits % 36) as usize] as char);
        bits /= 36;
    }
    out
}

/// Assemble a stored name from its parts.
pub fn compose_name(epoch_millis: i64, fragment: &str, extension: &str) -> StoredReference {
    StoredReference(format!("{epoch_millis}-{fragment}.{extension}"))
}

/// Fresh stored name for `file`, using the current time and a new fragment.
pub fn generate_stored_name(file: &SelectedFile) -> StoredReference {
    compose_name(
        Utc::now().timestamp_millis(),
        &random_fragment(),
        file.extension(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_name_format() {
        let name = compose_name(1_700_000_000_123, "k3j9x0ab", "pdf");
        assert_eq!(name.as_str(), "1700000000123-k3j9x0ab.pdf");
    }

    #[test]
    fn fragment_is_base36() {
        for _ in 0..50 {
            let fragment = random_fragment();
            assert_eq!(fragment.len(), FRAGMENT_LEN);
            assert!(
                fragment
                    .chars()
                    .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
            );
        }
    }

    #[test]
    fn generated_name_keeps_extension() {
        let file = SelectedFile::new("Dean at the lake.JPG", vec![0; 4]);
        let name = generate_stored_name(&file);
        let (stem, ext) = name.as_str().rsplit_once('.').unwrap();
        assert_eq!(ext, "JPG");
        let (millis, fragment) = stem.split_once('-').unwrap();
        assert!(millis.parse::<i64>().unwrap() > 0);
        assert_eq!(fragment.len(), FRAGMENT_LEN);
    }

    #[test]
    fn consecutive_names_differ() {
        let file = SelectedFile::new("a.png", vec![]);
        assert_ne!(generate_stored_name(&file), generate_stored_name(&file));
    }
}
