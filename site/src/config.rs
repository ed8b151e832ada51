//! Configuration file support.
//!
//! Loads an optional `qnom.toml`. A missing file yields the defaults; a file
//! that exists but cannot be read or parsed is an error.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "qnom.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// `[build]` table
    pub build: BuildConfig,
}

/// `[build]` table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Directory the rendered site is written to
    pub out_dir: PathBuf,
    /// Also write `site.json` next to `index.html`
    pub emit_manifest: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("dist"),
            emit_manifest: false,
        }
    }
}

/// Why `qnom.toml` could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML or has unknown keys
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },
}

impl SiteConfig {
    /// Load `qnom.toml` from the given directory.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        Self::load_from_path(&root.join(CONFIG_FILE))
    }

    /// Load config from a specific path. Returns the defaults if it doesn't exist.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.build.out_dir, PathBuf::from("dist"));
        assert!(!config.build.emit_manifest);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let config = SiteConfig::load(temp.path()).expect("defaults");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn loads_build_table() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(
            temp.path().join(CONFIG_FILE),
            r#"
[build]
out_dir = "public"
emit_manifest = true
"#,
        )
        .expect("write config");

        let config = SiteConfig::load(temp.path()).expect("valid config");
        assert_eq!(config.build.out_dir, PathBuf::from("public"));
        assert!(config.build.emit_manifest);
    }

    #[test]
    fn partial_table_keeps_other_defaults() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join(CONFIG_FILE), "[build]\nemit_manifest = true\n")
            .expect("write config");

        let config = SiteConfig::load(temp.path()).expect("valid config");
        assert_eq!(config.build.out_dir, PathBuf::from("dist"));
        assert!(config.build.emit_manifest);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "[build\nout_dir = 3").expect("write config");

        let err = SiteConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("qnom.toml"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "[build]\nout = \"x\"\n").expect("write config");

        assert!(matches!(
            SiteConfig::load_from_path(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
