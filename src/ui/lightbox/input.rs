// SPDX-License-Identifier: MPL-2.0
//! Input events the lightbox reacts to, and the table mapping them to actions.
//!
//! Raw iced events are narrowed down to the few fields the lightbox needs:
//! the key, the sign of the vertical scroll, and which element was pressed.

use crate::image_navigation::Direction;
use iced::keyboard::{self, key::Named};
use iced::{event, mouse};

/// Keys the lightbox distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Escape,
    ArrowLeft,
    ArrowRight,
    Character(char),
    Other,
}

/// Element that received a pointer press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressTarget {
    /// The overlay itself, outside any child element.
    Backdrop,
    /// The displayed image.
    Image,
    Close,
    Previous,
    Next,
}

/// A single input delivered to the lightbox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key(KeyInput),
    /// Vertical wheel delta; positive when scrolling up.
    Wheel { delta_y: f32 },
    Press(PressTarget),
}

/// What the lightbox does in response to an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Dismiss,
    Advance(Direction),
}

/// Maps an input to its action, if it has one.
#[must_use]
pub fn action_for(event: &InputEvent) -> Option<Action> {
    match *event {
        InputEvent::Key(KeyInput::Escape) => Some(Action::Dismiss),
        InputEvent::Key(KeyInput::ArrowLeft | KeyInput::Character('h')) => {
            Some(Action::Advance(Direction::Previous))
        }
        InputEvent::Key(KeyInput::ArrowRight | KeyInput::Character('l')) => {
            Some(Action::Advance(Direction::Next))
        }
        InputEvent::Key(_) => None,
        InputEvent::Wheel { delta_y } if delta_y > 0.0 => {
            Some(Action::Advance(Direction::Previous))
        }
        InputEvent::Wheel { .. } => Some(Action::Advance(Direction::Next)),
        InputEvent::Press(PressTarget::Backdrop | PressTarget::Close) => Some(Action::Dismiss),
        InputEvent::Press(PressTarget::Previous) => Some(Action::Advance(Direction::Previous)),
        InputEvent::Press(PressTarget::Next) => Some(Action::Advance(Direction::Next)),
        InputEvent::Press(PressTarget::Image) => None,
    }
}

impl InputEvent {
    /// Narrows a window-wide iced event.
    ///
    /// Key presses already captured by a widget are skipped; wheel events are
    /// always taken. Everything else is ignored.
    pub fn from_iced(event: &iced::Event, status: event::Status) -> Option<Self> {
        match event {
            iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
                event::Status::Ignored => Some(InputEvent::Key(KeyInput::from_key(key))),
                event::Status::Captured => None,
            },
            iced::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                let delta_y = match delta {
                    mouse::ScrollDelta::Lines { y, .. } | mouse::ScrollDelta::Pixels { y, .. } => {
                        *y
                    }
                };
                Some(InputEvent::Wheel { delta_y })
            }
            _ => None,
        }
    }
}

impl KeyInput {
    fn from_key(key: &keyboard::Key) -> Self {
        match key {
            keyboard::Key::Named(Named::Escape) => KeyInput::Escape,
            keyboard::Key::Named(Named::ArrowLeft) => KeyInput::ArrowLeft,
            keyboard::Key::Named(Named::ArrowRight) => KeyInput::ArrowRight,
            keyboard::Key::Character(c) => {
                let mut chars = c.as_str().chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => KeyInput::Character(ch),
                    _ => KeyInput::Other,
                }
            }
            _ => KeyInput::Other,
        }
    }
}
