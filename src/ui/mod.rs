// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns its state, handles its messages and reports outcomes to its owner
//! through an `Effect`.
//!
//! - [`lightbox`] - full-window image carousel
//! - [`components`] - reusable pieces (checkerboard placeholder)
//! - [`styles`] - centralized styling (buttons, overlays)
//! - [`design_tokens`] - design system constants (colors, spacing, sizing)

pub mod components;
pub mod design_tokens;
pub mod lightbox;
pub mod styles;
