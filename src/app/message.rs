// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::lightbox;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Lightbox(lightbox::Message),
    /// Mount a fresh lightbox at the last viewed index.
    Reopen,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Initial image index; clamped by the lightbox.
    pub start: Option<usize>,
    /// Backdrop colour override; takes precedence over `settings.toml`.
    pub background: Option<String>,
    /// Image paths, directories or `data:` URIs, in display order.
    pub images: Vec<String>,
}
