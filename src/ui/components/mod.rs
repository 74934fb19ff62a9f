// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.
//!
//! # Components
//!
//! - [`checkerboard`] - Placeholder pattern drawn beneath images so loading or
//!   broken images never leave a transparent gap

pub mod checkerboard;
