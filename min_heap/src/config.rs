use super::HeapError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// How `remove` picks the child to swap with while sifting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiftPolicy {
    /// Swap with the smaller child (the left one on ties) whenever it is
    /// smaller than the sifted entry. Always restores the heap property.
    #[default]
    Strict,
    /// Swap only when exactly one child is strictly smaller than its
    /// sibling. When both children are smaller than the sifted entry but
    /// equal to each other, nothing moves and the heap property can break.
    /// Kept for callers that depend on the older extraction order.
    Legacy,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeapConfig {
    pub sift_policy: SiftPolicy,
    pub initial_capacity: usize,
}

impl HeapConfig {
    /// Reads a config from a JSON file. Missing fields fall back to their
    /// defaults and an empty file yields [HeapConfig::default].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, HeapError> {
        let path = path.as_ref();
        let io_error = |source| HeapError::ConfigIo {
            path: path.to_path_buf(),
            source,
        };
        let mut reader = File::open(path).map(BufReader::new).map_err(io_error)?;
        let is_blank = reader.fill_buf().map_err(io_error)?.is_empty();
        let config = if is_blank {
            Self::default()
        } else {
            serde_json::from_reader(reader).map_err(|source| HeapError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?
        };
        debug!(?path, ?config, "loaded heap config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "min_heap_config_{}_{}.json",
            name,
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn default_is_strict() {
        let config = HeapConfig::default();
        assert_eq!(config.sift_policy, SiftPolicy::Strict);
        assert_eq!(config.initial_capacity, 0);
    }

    #[test]
    fn load_full_config() {
        let path = temp_config(
            "full",
            r#"{ "sift_policy": "legacy", "initial_capacity": 32 }"#,
        );
        let config = HeapConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(
            config,
            HeapConfig {
                sift_policy: SiftPolicy::Legacy,
                initial_capacity: 32,
            }
        );
    }

    #[test]
    fn load_partial_config_uses_defaults() {
        let path = temp_config("partial", r#"{ "initial_capacity": 8 }"#);
        let config = HeapConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.sift_policy, SiftPolicy::Strict);
        assert_eq!(config.initial_capacity, 8);
    }

    #[test]
    fn load_empty_file_gives_default() {
        let path = temp_config("empty", "");
        let config = HeapConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config, HeapConfig::default());
    }

    #[test]
    fn load_missing_file_fails() {
        let path = std::env::temp_dir().join("min_heap_config_does_not_exist.json");
        assert!(matches!(
            HeapConfig::load(&path),
            Err(HeapError::ConfigIo { .. })
        ));
    }

    #[test]
    fn load_malformed_file_fails() {
        let path = temp_config("malformed", r#"{ "sift_policy": "sideways" }"#);
        let result = HeapConfig::load(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(HeapError::ConfigParse { .. })));
    }
}
