//! Addresses excluded from a draw.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use crate::DrawError;

#[derive(Deserialize)]
#[serde(untagged)]
enum BlacklistJson {
    List(Vec<String>),
    Object { addresses: Vec<String> },
}

/// Load a blacklist file. No path means no exclusions.
pub fn load_blacklist(path: Option<&Path>) -> Result<HashSet<String>, DrawError> {
    let Some(path) = path else {
        return Ok(HashSet::new());
    };
    let content = std::fs::read_to_string(path)?;
    Ok(parse_blacklist(&content))
}

/// Parse blacklist contents into lowercase addresses.
///
/// Accepts a JSON array of strings or an object with an `addresses` array.
/// Anything else is read as one address per non-blank line.
pub fn parse_blacklist(content: &str) -> HashSet<String> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return HashSet::new();
    }

    let addresses = match serde_json::from_str::<BlacklistJson>(trimmed) {
        Ok(BlacklistJson::List(addresses)) | Ok(BlacklistJson::Object { addresses }) => addresses,
        Err(_) => trimmed
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect(),
    };

    addresses.into_iter().map(|a| a.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_content_is_empty_set() {
        assert!(parse_blacklist("").is_empty());
        assert!(parse_blacklist(" \n\t ").is_empty());
    }

    #[test]
    fn json_array_is_lowercased() {
        assert_eq!(parse_blacklist(r#"["0xABC", "0xdef"]"#), set(&["0xabc", "0xdef"]));
    }

    #[test]
    fn json_object_with_addresses() {
        assert_eq!(parse_blacklist(r#"{"addresses": ["0xAA"]}"#), set(&["0xaa"]));
    }

    #[test]
    fn line_format_skips_blank_lines() {
        let content = "0xAA\r\n\n  0xbb  \n";
        assert_eq!(parse_blacklist(content), set(&["0xaa", "0xbb"]));
    }

    #[test]
    fn unsupported_json_falls_back_to_lines() {
        assert_eq!(parse_blacklist(r#"{"other": 1}"#), set(&[r#"{"other": 1}"#]));
    }

    #[test]
    fn missing_path_means_no_exclusions() {
        assert!(load_blacklist(None).unwrap().is_empty());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0xAA\n0xBB").unwrap();
        assert_eq!(load_blacklist(Some(file.path())).unwrap(), set(&["0xaa", "0xbb"]));
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_blacklist(Some(&dir.path().join("missing.txt"))).unwrap_err();
        assert!(matches!(err, DrawError::Io(_)));
    }
}
