// SPDX-License-Identifier: MPL-2.0
//! Checkerboard placeholder drawn beneath images while they load.
//!
//! It stays visible if the image never decodes, so the overlay never shows
//! a transparent gap where the picture should be.

use crate::ui::design_tokens::palette;
use iced::widget::{canvas, Stack};
use iced::{mouse, Color, Element, Length, Rectangle, Size, Theme};

const TILE_SIZE: f32 = 6.0;
const LIGHT_TILE: Color = palette::WHITE;
const DARK_TILE: Color = palette::GRAY_100;

/// Checkerboard pattern widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct Checkerboard;

impl<Message> canvas::Program<Message> for Checkerboard {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        frame.fill_rectangle(iced::Point::ORIGIN, bounds.size(), LIGHT_TILE);

        let (cols, rows) = tile_grid(bounds.size());
        for row in 0..rows {
            for col in 0..cols {
                if (row + col) % 2 == 0 {
                    continue;
                }
                let x = col as f32 * TILE_SIZE;
                let y = row as f32 * TILE_SIZE;
                frame.fill_rectangle(
                    iced::Point::new(x, y),
                    Size::new(TILE_SIZE, TILE_SIZE),
                    DARK_TILE,
                );
            }
        }

        vec![frame.into_geometry()]
    }
}

/// Number of columns and rows needed to cover `size`.
fn tile_grid(size: Size) -> (u32, u32) {
    let cols = ((size.width / TILE_SIZE).ceil() as u32).max(1);
    let rows = ((size.height / TILE_SIZE).ceil() as u32).max(1);
    (cols, rows)
}

/// Layers `content` over a checkerboard of exactly `size`.
pub fn beneath<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    size: Size,
) -> Element<'a, Message> {
    Stack::new()
        .push(
            canvas::Canvas::new(Checkerboard)
                .width(Length::Fixed(size.width))
                .height(Length::Fixed(size.height)),
        )
        .push(content)
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height))
        .into()
}

const _: () = {
    assert!(TILE_SIZE > 0.0);
};
