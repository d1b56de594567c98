// SPDX-License-Identifier: MPL-2.0
//! Results-directory boundary shared with the external analysis pipeline.
//!
//! Submission copies the validated image into the pipeline's results
//! directory (as `original_<name>`); the pipeline renders its processed
//! images next to it and may describe them in an `analysis.toml` manifest.
//! Scanning joins directory contents with the manifest into the card list
//! the gallery displays.

use crate::error::{Error, Result};
use crate::media::is_supported_image;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Manifest file name the pipeline writes next to its rendered images.
pub const MANIFEST_FILE: &str = "analysis.toml";

/// Prefix given to the operator's image when copied in for analysis.
pub const ORIGINAL_PREFIX: &str = "original_";

/// One gallery card: a rendered image plus the metadata the pipeline
/// attached to it.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRecord {
    pub title: String,
    pub image: PathBuf,
    pub description: Option<String>,
    /// Detection confidence in percent, when the pipeline reported one.
    pub confidence: Option<u8>,
}

/// The rendered results of one analysis run, in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    records: Vec<AnalysisRecord>,
}

#[derive(Debug, Deserialize)]
struct ManifestRecord {
    file: String,
    title: Option<String>,
    description: Option<String>,
    confidence: Option<u8>,
}

#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    records: Vec<ManifestRecord>,
}

impl ResultSet {
    /// Scans `dir` for rendered result images, joining the optional
    /// manifest for titles, descriptions and confidence values.
    ///
    /// Images are sorted by file name so repeated scans are stable. A
    /// malformed manifest is treated as absent; the images still show.
    pub fn scan(dir: &Path) -> Result<Self> {
        let mut images = Vec::new();

        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && is_supported_image(&path) {
                images.push(path);
            }
        }

        images.sort_by_key(|path| path.file_name().map(std::ffi::OsStr::to_os_string));

        let manifest = load_manifest(&dir.join(MANIFEST_FILE));

        let records = images
            .into_iter()
            .map(|image| {
                let file_name = image
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or_default()
                    .to_string();
                let entry = manifest.records.iter().find(|r| r.file == file_name);

                AnalysisRecord {
                    title: entry
                        .and_then(|r| r.title.clone())
                        .unwrap_or_else(|| default_title(&image)),
                    description: entry.and_then(|r| r.description.clone()),
                    confidence: entry.and_then(|r| r.confidence),
                    image,
                }
            })
            .collect();

        Ok(Self { records })
    }

    #[must_use]
    pub fn records(&self) -> &[AnalysisRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Hands a validated image over to the analysis pipeline and returns the
/// current state of the results directory.
///
/// The copy lands as `original_<name>`, mirroring how the pipeline keeps
/// the untouched source next to its processed renditions.
pub async fn submit_for_analysis(source: PathBuf, results_dir: PathBuf) -> Result<ResultSet> {
    let file_name = source
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| Error::Io("source file has no name".into()))?;

    tokio::fs::create_dir_all(&results_dir)
        .await
        .map_err(|e| Error::Io(e.to_string()))?;

    let destination = results_dir.join(format!("{ORIGINAL_PREFIX}{file_name}"));
    tokio::fs::copy(&source, &destination)
        .await
        .map_err(|e| Error::Io(e.to_string()))?;

    ResultSet::scan(&results_dir)
}

fn load_manifest(path: &Path) -> Manifest {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|content| toml::from_str(&content).ok())
        .unwrap_or_default()
}

fn default_title(image: &Path) -> String {
    image
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("?")
        .to_string()
}
