// SPDX-License-Identifier: MPL-2.0
//! Expands command-line image arguments into an ordered image list.
//!
//! Directories are scanned (non-recursively) for supported image files and
//! sorted alphabetically by file name. Anything else is passed through as an
//! opaque image reference.

use crate::error::Result;
use crate::image_source::ImageSource;
use std::path::{Path, PathBuf};

/// File extensions recognised when scanning a directory.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff", "ico",
];

/// Returns the supported images inside `directory`, sorted by file name.
pub fn scan_directory(directory: &Path) -> Result<Vec<PathBuf>> {
    let mut image_files = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && is_supported_image(&path) {
            image_files.push(path);
        }
    }

    image_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(image_files)
}

/// Turns raw arguments into image sources, expanding directories in place.
///
/// Directories that cannot be read are skipped with a warning so one bad
/// argument does not prevent the rest from opening.
pub fn expand_arguments<S: AsRef<str>>(args: &[S]) -> Vec<ImageSource> {
    let mut images = Vec::new();

    for arg in args {
        let arg = arg.as_ref();
        let path = Path::new(arg);
        if !arg.starts_with("data:") && path.is_dir() {
            match scan_directory(path) {
                Ok(files) => {
                    tracing::debug!(dir = %path.display(), count = files.len(), "scanned directory");
                    images.extend(files.into_iter().map(ImageSource::Path));
                }
                Err(err) => {
                    tracing::warn!(dir = %path.display(), error = %err, "failed to scan directory");
                }
            }
        } else {
            images.push(ImageSource::parse(arg));
        }
    }

    images
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
