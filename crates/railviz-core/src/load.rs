//! Rake JSON file loading

use std::path::Path;
use thiserror::Error;

use crate::types::Rake;

#[derive(Error, Debug)]
pub enum RakeFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse rake JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a rake record from JSON text
pub fn parse_rake(content: &str) -> Result<Rake, RakeFileError> {
    let rake: Rake = serde_json::from_str(content)?;
    tracing::info!(
        rake = %rake.id,
        wagons = rake.wagons.len(),
        "Parsed rake data"
    );
    Ok(rake)
}

/// Load a rake record from a JSON file on disk
pub fn load_rake_file(path: &Path) -> Result<Rake, RakeFileError> {
    let content = std::fs::read_to_string(path)?;
    parse_rake(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::sample_rake;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_rake_json() {
        let json = r#"{
            "rakeId": "R900",
            "wagons": [
                {
                    "wagonId": "W01",
                    "capacity": 60000,
                    "currentLoad": 42000,
                    "color": [0.2, 0.5, 1.0],
                    "orders": [
                        {
                            "id": "ORD-1",
                            "qty": 42000,
                            "dest": "Nagpur",
                            "priority": "LOW",
                            "dimensions": { "length": 6.0, "width": 3.0, "height": 2.0 },
                            "shape": "cylinder"
                        }
                    ]
                }
            ]
        }"#;
        let rake = parse_rake(json).unwrap();
        assert_eq!(rake.id, "R900");
        assert_eq!(rake.wagons.len(), 1);
        assert_eq!(rake.wagons[0].orders[0].destination, "Nagpur");
    }

    #[test]
    fn test_malformed_json_is_a_typed_error() {
        let err = parse_rake("{ not json").unwrap_err();
        assert!(matches!(err, RakeFileError::Json(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_rake_file(Path::new("/nonexistent/rake.json")).unwrap_err();
        assert!(matches!(err, RakeFileError::Io(_)));
    }

    #[test]
    fn test_round_trip_through_file() {
        let rake = sample_rake();
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&rake).unwrap().as_bytes())
            .unwrap();

        let loaded = load_rake_file(file.path()).unwrap();
        assert_eq!(loaded, rake);
    }
}
