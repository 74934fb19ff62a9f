// SPDX-License-Identifier: MPL-2.0
//! Slide sizing.

use iced::Size;

/// Largest size with the image's aspect ratio that fits inside `available`.
///
/// Images smaller than the available area keep their natural size; they are
/// never upscaled. Degenerate inputs yield [`Size::ZERO`].
#[must_use]
pub fn fit_within(image: Size<u32>, available: Size) -> Size {
    if image.width == 0 || image.height == 0 {
        return Size::ZERO;
    }
    if !available.width.is_finite()
        || !available.height.is_finite()
        || available.width <= 0.0
        || available.height <= 0.0
    {
        return Size::ZERO;
    }

    let width = image.width as f32;
    let height = image.height as f32;
    let scale = (available.width / width)
        .min(available.height / height)
        .min(1.0);

    Size::new(width * scale, height * scale)
}

/// Square placeholder size used when the image dimensions are unknown.
#[must_use]
pub fn fallback_size(edge: f32, available: Size) -> Size {
    let edge = edge
        .min(available.width.max(0.0))
        .min(available.height.max(0.0));
    Size::new(edge, edge)
}
