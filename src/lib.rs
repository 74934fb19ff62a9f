// SPDX-License-Identifier: MPL-2.0
//! `iced_lightbox` is a full-window image carousel built with the Iced GUI
//! framework.
//!
//! The [`ui::lightbox`] component shows one image at a time from a
//! caller-supplied list, wraps around at either end, and reports dismissal
//! (Escape, backdrop click, close button) to its owner. The [`app`] module
//! hosts it as a standalone application with Fluent localization and a
//! TOML configuration file.

#![doc(html_root_url = "https://docs.rs/iced_lightbox/0.1.0")]

pub mod app;
pub mod config;
pub mod directory_scanner;
pub mod error;
pub mod i18n;
pub mod image_navigation;
pub mod image_source;
pub mod ui;
