// src/util.rs

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Read a UTF-8 file into a String with a clear error message.
pub fn read_to_string(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Read and parse a JSON file.
///
/// Used for:
/// - `trigger --data-file`
/// - `batch <file>`
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = read_to_string(path)?;
    serde_json::from_str(&raw).with_context(|| format!("File is not valid JSON: {:?}", path))
}

/// Parse inline JSON passed on the command line.
pub fn parse_json_arg<T: DeserializeOwned>(raw: &str) -> Result<T> {
    serde_json::from_str(raw).with_context(|| format!("Argument is not valid JSON: {}", raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::io::Write;

    #[test]
    fn read_json_parses_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"workflowId":"a"}}]"#).unwrap();
        let v: Value = read_json(file.path()).unwrap();
        assert_eq!(v, json!([{ "workflowId": "a" }]));
    }

    #[test]
    fn read_json_reports_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ nope").unwrap();
        let err = read_json::<Value>(file.path()).unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn parse_json_arg_accepts_any_shape() {
        assert_eq!(parse_json_arg::<Value>("3").unwrap(), json!(3));
        assert!(parse_json_arg::<Value>("{").is_err());
    }
}
