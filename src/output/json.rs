//! JSON serialization for result tables and summaries.
//!
//! Non-finite cells are written as `null`.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;

/// Serialize a value to a compact JSON string.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Serialize a value to a pretty-printed JSON string.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Write a value as pretty-printed JSON to `path`.
pub fn write_json<T: Serialize>(value: &T, path: impl AsRef<Path>) -> Result<()> {
    fs::write(path, to_json_pretty(value)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ResultTable;
    use crate::statistics::Summary;
    use crate::trial::TrialResult;

    fn make_table() -> ResultTable {
        ResultTable::from_trials(
            &[1.0, 2.0],
            &[
                TrialResult {
                    correlated: vec![2.5, 2.0],
                    uncorrelated: vec![3.0, 2.75],
                },
                TrialResult {
                    correlated: vec![f64::NAN, 1.5],
                    uncorrelated: vec![3.5, 3.25],
                },
            ],
        )
    }

    #[test]
    fn test_table_to_json() {
        let json = to_json(&make_table()).unwrap();
        assert!(json.contains("\"columns\":[\"cor1\",\"cor2\",\"noc1\",\"noc2\"]"));
        assert!(json.contains("[2.5,2.0,3.0,2.75]"));
        assert!(json.contains("[null,1.5,3.5,3.25]"));
    }

    #[test]
    fn test_summary_to_json_pretty() {
        let summary = Summary::from_table(&make_table());
        let json = to_json_pretty(&summary).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("\"regime\": \"Uncorrelated\""));
        assert!(json.contains("\"median\""));
    }

    #[test]
    fn test_write_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.json");
        write_json(&make_table(), &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("noc2"));
    }
}
