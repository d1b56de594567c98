// SPDX-License-Identifier: MPL-2.0
//! Preview decoding for the accepted raster formats (JPEG, PNG).

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::{GenericImageView, ImageError};
use std::path::{Path, PathBuf};

/// A decoded preview ready to hand to an Iced image widget.
#[derive(Debug, Clone)]
pub struct PreviewData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl PreviewData {
    /// Decodes encoded bytes (JPEG or PNG) into a preview.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let img = image_rs::load_from_memory(&bytes).map_err(|e| Error::Image(e.to_string()))?;
        let (width, height) = img.dimensions();

        // Hand the encoded bytes to Iced directly; it decodes lazily and
        // keeps the preview memory footprint at one copy.
        Ok(Self {
            handle: image::Handle::from_bytes(bytes),
            width,
            height,
        })
    }
}

/// Reads and decodes the file at `path` into a preview.
///
/// This is the intake's single true suspension point: the read yields to
/// the runtime, and nothing in the component advances until the task
/// resolves with success or error.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read and
/// [`Error::Image`] when its contents do not decode as JPEG/PNG.
pub async fn load_preview(path: PathBuf) -> Result<PreviewData> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| Error::Io(e.to_string()))?;
    PreviewData::from_bytes(bytes)
}

/// Synchronous variant used by the lightbox and by tests.
pub fn load_preview_sync(path: &Path) -> Result<PreviewData> {
    let bytes = std::fs::read(path).map_err(|e| Error::Io(e.to_string()))?;
    PreviewData::from_bytes(bytes)
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        Error::Image(err.to_string())
    }
}
