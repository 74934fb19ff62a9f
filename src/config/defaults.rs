// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Overlay**: Backdrop colour and horizontal padding
//! - **Placeholder**: Checkerboard drawn beneath images

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Default backdrop colour of the overlay.
pub const DEFAULT_BACKGROUND_HEX: &str = "#000000";

/// Default horizontal padding of the overlay (in pixels).
pub const DEFAULT_OVERLAY_PADDING: f32 = 60.0;

/// Minimum horizontal padding.
pub const MIN_OVERLAY_PADDING: f32 = 0.0;

/// Maximum horizontal padding.
pub const MAX_OVERLAY_PADDING: f32 = 400.0;

// ==========================================================================
// Placeholder Defaults
// ==========================================================================

/// Whether the checkerboard placeholder is drawn beneath images.
pub const DEFAULT_PLACEHOLDER_ENABLED: bool = true;

/// Edge length of the placeholder shown when an image cannot be read.
pub const FALLBACK_PLACEHOLDER_SIZE: f32 = 320.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_OVERLAY_PADDING >= 0.0);
    assert!(MAX_OVERLAY_PADDING > MIN_OVERLAY_PADDING);
    assert!(DEFAULT_OVERLAY_PADDING >= MIN_OVERLAY_PADDING);
    assert!(DEFAULT_OVERLAY_PADDING <= MAX_OVERLAY_PADDING);
    assert!(FALLBACK_PLACEHOLDER_SIZE > 0.0);
};
