// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the lightbox backdrop.

use crate::ui::design_tokens::palette::WHITE;
use iced::widget::container;
use iced::{Background, Color, Theme};

/// Style for the full-window backdrop behind the current image.
pub fn backdrop(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Parses a hex colour (`#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`).
///
/// Parsing is delegated to iced; non-ASCII input is rejected first because
/// iced slices the string by byte offset.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if !value.is_ascii() {
        return None;
    }
    value.parse::<Color>().ok()
}
