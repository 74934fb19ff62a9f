// SPDX-License-Identifier: MPL-2.0
//! Full-window image lightbox.
//!
//! - [`component`] - state, update, subscription and view
//! - [`input`] - input events and the event-to-action table
//! - [`layout`] - slide sizing helpers

pub mod component;
pub mod input;
pub mod layout;

pub use component::{Effect, Message, OverlayStyle, State, ViewContext};
