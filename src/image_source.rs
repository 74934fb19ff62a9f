// SPDX-License-Identifier: MPL-2.0
//! Opaque image references handed to the lightbox.
//!
//! A reference is either a filesystem path or an inline `data:` URI. The
//! lightbox never inspects pixels; it only needs a renderable handle and the
//! natural dimensions for aspect-preserving layout.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use iced::widget::image::Handle;
use iced::Size;
use std::fmt;
use std::io::Cursor;
use std::path::PathBuf;

const DATA_URI_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64";

/// A single image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Image file on disk.
    Path(PathBuf),
    /// Decoded payload of a base64 `data:` URI.
    Inline { mime: String, bytes: Vec<u8> },
    /// A reference that could not be understood; rendered as a load failure.
    Invalid(String),
}

impl ImageSource {
    /// Parses a reference string.
    ///
    /// `data:<mime>;base64,<payload>` decodes inline; other `data:` URIs are
    /// rejected as invalid; everything else is treated as a path.
    pub fn parse(reference: &str) -> Self {
        let Some(rest) = strip_prefix_ignore_case(reference, DATA_URI_PREFIX) else {
            return ImageSource::Path(PathBuf::from(reference));
        };

        let Some((header, payload)) = rest.split_once(',') else {
            return ImageSource::Invalid("data URI without payload".to_string());
        };

        let Some(mime) = header.strip_suffix(BASE64_MARKER) else {
            return ImageSource::Invalid("data URI is not base64 encoded".to_string());
        };

        let payload: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
        match STANDARD.decode(payload.as_bytes()) {
            Ok(bytes) => ImageSource::Inline {
                mime: mime.to_string(),
                bytes,
            },
            Err(err) => ImageSource::Invalid(format!("invalid base64 payload: {err}")),
        }
    }

    /// Builds the handle the image widget renders, if the reference is usable.
    pub fn handle(&self) -> Option<Handle> {
        match self {
            ImageSource::Path(path) => Some(Handle::from_path(path.clone())),
            ImageSource::Inline { bytes, .. } => Some(Handle::from_bytes(bytes.clone())),
            ImageSource::Invalid(_) => None,
        }
    }

    /// Reads the natural dimensions from the image header.
    ///
    /// Only the header is decoded, not the pixel data. The format is sniffed
    /// from the content, so missing or wrong file extensions do not matter.
    pub fn read_dimensions(&self) -> Result<Size<u32>> {
        let (width, height) = match self {
            ImageSource::Path(path) => image_rs::ImageReader::open(path)?
                .with_guessed_format()?
                .into_dimensions()?,
            ImageSource::Inline { bytes, .. } => image_rs::ImageReader::new(Cursor::new(bytes))
                .with_guessed_format()?
                .into_dimensions()?,
            ImageSource::Invalid(reason) => return Err(Error::Image(reason.clone())),
        };

        if width == 0 || height == 0 {
            return Err(Error::Image(format!("empty image ({width}x{height})")));
        }

        Ok(Size::new(width, height))
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Path(path) => write!(f, "{}", path.display()),
            ImageSource::Inline { mime, bytes } => {
                write!(f, "data:{} ({} bytes)", mime, bytes.len())
            }
            ImageSource::Invalid(reason) => write!(f, "invalid reference ({reason})"),
        }
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        ImageSource::Path(path)
    }
}

impl From<&str> for ImageSource {
    fn from(reference: &str) -> Self {
        ImageSource::parse(reference)
    }
}

fn strip_prefix_ignore_case<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    let head = value.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&value[prefix.len()..])
    } else {
        None
    }
}
