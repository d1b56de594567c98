// SPDX-License-Identifier: MPL-2.0
//! Media handling: preview decoding and the results-directory boundary
//! shared with the external analysis pipeline.

pub mod image;
pub mod results;

pub use image::{load_preview, PreviewData};
pub use results::{AnalysisRecord, ResultSet};

/// Extensions the acceptance policy allows, lowercase.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Returns true when the path carries an accepted image extension
/// (case-insensitive).
pub fn is_supported_image(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
