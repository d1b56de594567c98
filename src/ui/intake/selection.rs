// SPDX-License-Identifier: MPL-2.0
//! The active file selection and the acceptance policy applied to it.

use crate::error::SelectionError;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Maximum accepted file size: 10 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Image types the acceptance policy admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
}

impl ImageKind {
    /// Classifies a path by its extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageKind::Jpeg),
            "png" => Some(ImageKind::Png),
            _ => None,
        }
    }

    /// The MIME type shown in the file-info panel.
    #[must_use]
    pub fn mime(&self) -> &'static str {
        match self {
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::Png => "image/png",
        }
    }
}

/// The user's chosen image. Replaced wholesale on each new selection;
/// cleared on validation failure or explicit removal.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    pub kind: ImageKind,
    pub modified: Option<DateTime<Local>>,
}

impl SelectedFile {
    /// Applies the acceptance policy to a candidate path and builds the
    /// selection from its filesystem metadata.
    ///
    /// All-or-nothing: any failure leaves no selection behind at the caller.
    pub fn inspect(path: &Path) -> Result<Self, SelectionError> {
        let metadata = std::fs::metadata(path).map_err(|_| SelectionError::Unreadable)?;
        let kind = validate(path, metadata.len())?;

        Ok(Self {
            path: path.to_path_buf(),
            name: path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("?")
                .to_string(),
            size: metadata.len(),
            kind,
            modified: metadata.modified().ok().map(DateTime::<Local>::from),
        })
    }

    /// Human-readable size in binary megabytes, two decimals.
    #[must_use]
    pub fn size_label(&self) -> String {
        format_size_mb(self.size)
    }

    /// Last-modified date rendered with the locale's date format string.
    #[must_use]
    pub fn modified_label(&self, date_format: &str) -> String {
        self.modified
            .map(|dt| dt.format(date_format).to_string())
            .unwrap_or_default()
    }
}

/// Checks a candidate against the acceptance policy: JPEG/PNG only, at
/// most [`MAX_UPLOAD_BYTES`]. Returns the classified kind on success.
pub fn validate(path: &Path, size: u64) -> Result<ImageKind, SelectionError> {
    let kind = ImageKind::from_path(path).ok_or(SelectionError::UnsupportedType)?;
    if size > MAX_UPLOAD_BYTES {
        return Err(SelectionError::Oversized);
    }
    Ok(kind)
}

/// Formats a byte count as binary megabytes with two decimals ("3.00 MB").
#[must_use]
pub fn format_size_mb(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_every_unsupported_extension() {
        for name in ["leaf.gif", "leaf.webp", "leaf.bmp", "scan.pdf", "noext"] {
            assert_eq!(
                validate(Path::new(name), 1024),
                Err(SelectionError::UnsupportedType),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn accepts_supported_extensions_case_insensitively() {
        assert_eq!(validate(Path::new("a.jpg"), 1), Ok(ImageKind::Jpeg));
        assert_eq!(validate(Path::new("a.JPEG"), 1), Ok(ImageKind::Jpeg));
        assert_eq!(validate(Path::new("a.PNG"), 1), Ok(ImageKind::Png));
    }

    #[test]
    fn size_boundary_is_inclusive() {
        assert!(validate(Path::new("a.png"), MAX_UPLOAD_BYTES).is_ok());
        assert_eq!(
            validate(Path::new("a.png"), MAX_UPLOAD_BYTES + 1),
            Err(SelectionError::Oversized)
        );
    }

    #[test]
    fn twelve_megabyte_jpeg_is_oversized() {
        assert_eq!(
            validate(Path::new("big.jpeg"), 12 * 1024 * 1024),
            Err(SelectionError::Oversized)
        );
    }

    #[test]
    fn three_megabyte_png_formats_as_expected() {
        assert_eq!(format_size_mb(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn fractional_sizes_keep_two_decimals() {
        assert_eq!(format_size_mb(1024 * 1024 + 512 * 1024), "1.50 MB");
        assert_eq!(format_size_mb(0), "0.00 MB");
    }

    #[test]
    fn mime_labels_match_kind() {
        assert_eq!(ImageKind::Jpeg.mime(), "image/jpeg");
        assert_eq!(ImageKind::Png.mime(), "image/png");
    }

    #[test]
    fn inspect_reads_filesystem_metadata() {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("leaf.png");
        std::fs::write(&path, vec![0u8; 2048]).expect("write");

        let file = SelectedFile::inspect(&path).expect("inspect should accept");
        assert_eq!(file.name, "leaf.png");
        assert_eq!(file.size, 2048);
        assert_eq!(file.kind, ImageKind::Png);
        assert!(file.modified.is_some());
    }

    #[test]
    fn inspect_missing_file_is_unreadable() {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("ghost.png");
        assert_eq!(
            SelectedFile::inspect(&path),
            Err(SelectionError::Unreadable)
        );
    }

    #[test]
    fn inspect_oversized_file_is_rejected() {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("big.png");
        let file = std::fs::File::create(&path).expect("create");
        file.set_len(MAX_UPLOAD_BYTES + 1).expect("set_len");

        assert_eq!(
            SelectedFile::inspect(&path),
            Err(SelectionError::Oversized)
        );
    }
}
