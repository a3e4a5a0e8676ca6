//! Common test utilities for devsetup integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated environment: an empty config file and a catalog directory
pub struct TestEnv {
    #[allow(dead_code)]
    pub temp: TempDir,
    pub config: PathBuf,
    pub catalogs: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let config = temp.path().join("config.yaml");
        let catalogs = temp.path().join("catalogs");
        std::fs::write(&config, "").expect("Failed to write config");
        std::fs::create_dir_all(&catalogs).expect("Failed to create catalog directory");
        Self {
            temp,
            config,
            catalogs,
        }
    }

    /// Replace the config file content
    #[allow(dead_code)]
    pub fn write_config(&self, content: &str) {
        std::fs::write(&self.config, content).expect("Failed to write config");
    }

    /// Write `<catalogs>/<id>.json`
    #[allow(dead_code)]
    pub fn write_catalog(&self, id: &str, json: &str) {
        std::fs::write(self.catalogs.join(format!("{}.json", id)), json)
            .expect("Failed to write catalog");
    }
}

/// Catalog entry that is present (`check` succeeds)
#[allow(dead_code)]
pub fn present(key: &str) -> String {
    format!(r#"{{"key": "{key}", "name": "{key}", "check": "true", "install": "false"}}"#)
}

/// Catalog entry that is missing and whose install would fail
#[allow(dead_code)]
pub fn missing(key: &str) -> String {
    format!(r#"{{"key": "{key}", "name": "{key}", "check": "false", "install": "false"}}"#)
}
