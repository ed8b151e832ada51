//! Writes the rendered site to disk.
//!
//! [`build_site`] checks the content, renders the home page and writes
//! `index.html` (plus `site.json` when enabled) into the configured output
//! directory.

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::check::{ContentError, check_content};
use crate::config::SiteConfig;
use crate::content::{METADATA, SiteContent, SiteMetadata};

/// Name of the rendered page.
pub const INDEX_FILE: &str = "index.html";
/// Name of the optional JSON manifest.
pub const MANIFEST_FILE: &str = "site.json";

/// Why a build stopped.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The literal content failed the completeness check
    #[error("content check failed: {0}")]
    Content(#[from] ContentError),
    /// Creating the output directory or writing a file failed
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        /// Path being created or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// The manifest could not be serialized
    #[error("failed to serialize manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// JSON summary of the site: metadata and every linked route.
#[derive(Debug, Clone, Serialize)]
pub struct SiteManifest {
    /// Page metadata
    pub metadata: SiteMetadata,
    /// Sorted, de-duplicated link destinations
    pub routes: Vec<&'static str>,
    /// Every literal list on the page
    pub content: SiteContent,
}

impl SiteManifest {
    /// Summarize `content` together with the page metadata.
    pub fn new(content: SiteContent) -> Self {
        Self {
            metadata: METADATA,
            routes: content.destinations(),
            content,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A file written by [`build_site`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    /// Path of the file
    pub path: PathBuf,
    /// Size written
    pub bytes: usize,
}

/// Outcome of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Output directory
    pub out_dir: PathBuf,
    /// Files written, in order
    pub files: Vec<WrittenFile>,
}

impl BuildReport {
    /// Sum of all file sizes.
    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|f| f.bytes).sum()
    }
}

fn write_file(path: PathBuf, contents: &str) -> Result<WrittenFile, BuildError> {
    std::fs::write(&path, contents).map_err(|source| BuildError::Io {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(WrittenFile {
        path,
        bytes: contents.len(),
    })
}

fn ensure_dir(dir: &Path) -> Result<(), BuildError> {
    std::fs::create_dir_all(dir).map_err(|source| BuildError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

/// Check, render and write the site described by `config`.
pub fn build_site(config: &SiteConfig) -> Result<BuildReport, BuildError> {
    let content = SiteContent::QNOM;
    check_content(&content)?;

    let out_dir = config.build.out_dir.clone();
    ensure_dir(&out_dir)?;

    let mut files = Vec::new();
    files.push(write_file(out_dir.join(INDEX_FILE), &crate::render_home())?);

    if config.build.emit_manifest {
        let manifest = SiteManifest::new(content).to_json()?;
        files.push(write_file(out_dir.join(MANIFEST_FILE), &manifest)?);
    }

    let report = BuildReport { out_dir, files };
    info!(
        out_dir = %report.out_dir.display(),
        files = report.files.len(),
        bytes = report.total_bytes(),
        "site built"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildConfig;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn config_for(dir: &Path, emit_manifest: bool) -> SiteConfig {
        SiteConfig {
            build: BuildConfig {
                out_dir: dir.to_path_buf(),
                emit_manifest,
            },
        }
    }

    #[test]
    fn writes_index_html() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("dist");
        let report = build_site(&config_for(&out, false)).expect("build");

        assert_eq!(report.files.len(), 1);
        let html = std::fs::read_to_string(out.join(INDEX_FILE)).expect("index");
        assert_eq!(html, crate::render_home());
        assert_eq!(report.files[0].bytes, html.len());
        assert!(!out.join(MANIFEST_FILE).exists());
    }

    #[test]
    fn writes_manifest_when_enabled() {
        let temp = TempDir::new().expect("temp dir");
        let report = build_site(&config_for(temp.path(), true)).expect("build");
        assert_eq!(report.files.len(), 2);

        let raw = std::fs::read_to_string(temp.path().join(MANIFEST_FILE)).expect("manifest");
        let json: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
        assert_eq!(json["metadata"]["open_graph"]["locale"], "en_SG");
        assert_eq!(json["metadata"]["open_graph"]["type"], "website");
        assert_eq!(json["routes"].as_array().map(Vec::len), Some(11));
        assert_eq!(json["content"]["stats"][3]["value"], "$0");
    }

    #[test]
    fn rebuild_overwrites_with_identical_output() {
        let temp = TempDir::new().expect("temp dir");
        let first = build_site(&config_for(temp.path(), true)).expect("first build");
        let before = std::fs::read(temp.path().join(INDEX_FILE)).expect("index");
        let second = build_site(&config_for(temp.path(), true)).expect("second build");
        let after = std::fs::read(temp.path().join(INDEX_FILE)).expect("index");

        assert_eq!(first, second);
        assert_eq!(before, after);
    }

    #[test]
    fn unwritable_out_dir_is_reported() {
        let temp = TempDir::new().expect("temp dir");
        let blocker = temp.path().join("taken");
        std::fs::write(&blocker, "not a directory").expect("write blocker");

        let err = build_site(&config_for(&blocker, false)).unwrap_err();
        assert!(matches!(err, BuildError::Io { .. }));
        assert!(err.to_string().contains("taken"));
    }
}
