use crate::error::{CompassError, Result};
use crate::types::config::CompassConfig;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "compass.toml";

/// Load the optional policy file. An explicit `--config` path must exist;
/// the default file is simply skipped when absent.
pub fn load_config(explicit: Option<&Path>) -> Result<Option<CompassConfig>> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(CompassError::ConfigNotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                return Ok(None);
            }
            default.to_path_buf()
        }
    };

    let content = std::fs::read_to_string(&path)?;
    let cfg: CompassConfig = toml::from_str(&content)
        .map_err(|e| CompassError::ConfigParse(format!("{}: {}", path.display(), e)))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let missing = dir.path().join("nope.toml");
        let err = load_config(Some(&missing)).expect_err("load should fail");
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn explicit_path_loads_and_validates() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("compass.toml");
        fs::write(
            &path,
            r#"
[engagement]
quiz_threshold = 30.0
"#,
        )
        .expect("config should write");

        let cfg = load_config(Some(&path))
            .expect("load should succeed")
            .expect("config should exist");
        assert_eq!(cfg.policy().quiz_threshold, 30.0);
    }

    #[test]
    fn invalid_threshold_fails_validation() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("compass.toml");
        fs::write(
            &path,
            r#"
[engagement]
quiz_threshold = 500.0
"#,
        )
        .expect("config should write");

        let err = load_config(Some(&path)).expect_err("load should fail");
        assert!(err.to_string().contains("quiz_threshold"));
    }
}
