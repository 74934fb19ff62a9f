// SPDX-License-Identifier: MPL-2.0
//! Image navigation module for managing the image list and the cursor into it.
//!
//! The navigator is free of UI types so the wrap-around rules can be checked
//! in isolation from the lightbox that drives them.

use crate::image_source::ImageSource;

/// Direction of a single navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Step to the previous image (-1).
    Previous,
    /// Step to the next image (+1).
    Next,
}

impl Direction {
    /// Signed step applied to the cursor.
    #[must_use]
    pub fn offset(self) -> isize {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// Ordered, caller-supplied list of images plus the current position.
///
/// The list is never mutated after construction; only the cursor moves.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageNavigator {
    images: Vec<ImageSource>,
    current_index: usize,
}

impl ImageNavigator {
    /// Creates a navigator positioned at `start_index`, clamped into range.
    ///
    /// An empty list always sits at index 0.
    pub fn new(images: Vec<ImageSource>, start_index: Option<usize>) -> Self {
        let requested = start_index.unwrap_or(0);
        let current_index = requested.min(images.len().saturating_sub(1));
        if current_index != requested {
            tracing::debug!(
                requested,
                clamped = current_index,
                len = images.len(),
                "start index out of range"
            );
        }

        Self {
            images,
            current_index,
        }
    }

    /// Moves the cursor one step, wrapping at either end.
    ///
    /// Past the last image goes to the first; before the first goes to the
    /// last. Does nothing on an empty list.
    pub fn advance(&mut self, direction: Direction) {
        let len = self.images.len();
        if len == 0 {
            return;
        }

        self.current_index = match direction {
            Direction::Next if self.current_index >= len - 1 => 0,
            Direction::Next => self.current_index + 1,
            Direction::Previous if self.current_index == 0 => len - 1,
            Direction::Previous => self.current_index - 1,
        };
    }

    /// Returns the image under the cursor, if any.
    pub fn current(&self) -> Option<&ImageSource> {
        self.images.get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns the total number of images in the list.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Whether stepping between images is meaningful (more than one image).
    pub fn can_navigate(&self) -> bool {
        self.images.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources(names: &[&str]) -> Vec<ImageSource> {
        names.iter().map(|name| ImageSource::parse(name)).collect()
    }

    #[test]
    fn start_index_defaults_to_zero() {
        let nav = ImageNavigator::new(sources(&["a.png", "b.png"]), None);
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn out_of_range_start_index_is_clamped() {
        let nav = ImageNavigator::new(sources(&["a.png", "b.png", "c.png"]), Some(7));
        assert_eq!(nav.current_index(), 2);
    }

    #[test]
    fn empty_list_sits_at_zero_and_ignores_advance() {
        let mut nav = ImageNavigator::new(Vec::new(), Some(3));
        assert_eq!(nav.current_index(), 0);
        assert!(nav.current().is_none());

        nav.advance(Direction::Next);
        nav.advance(Direction::Previous);
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn advance_next_moves_forward_then_wraps() {
        let mut nav = ImageNavigator::new(sources(&["a.png", "b.png", "c.png"]), Some(0));

        nav.advance(Direction::Next);
        assert_eq!(nav.current_index(), 1);
        nav.advance(Direction::Next);
        assert_eq!(nav.current_index(), 2);
        nav.advance(Direction::Next);
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn advance_previous_from_first_wraps_to_last() {
        let mut nav = ImageNavigator::new(sources(&["a.png", "b.png", "c.png"]), None);
        nav.advance(Direction::Previous);
        assert_eq!(nav.current_index(), 2);
    }

    #[test]
    fn single_image_wraps_onto_itself() {
        let mut nav = ImageNavigator::new(sources(&["a.png"]), None);
        nav.advance(Direction::Next);
        assert_eq!(nav.current_index(), 0);
        nav.advance(Direction::Previous);
        assert_eq!(nav.current_index(), 0);
        assert!(!nav.can_navigate());
    }

    #[test]
    fn advance_never_leaves_bounds() {
        for len in 1..6 {
            let names: Vec<String> = (0..len).map(|i| format!("{i}.png")).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            for start in 0..len {
                for direction in [Direction::Previous, Direction::Next] {
                    let mut nav = ImageNavigator::new(sources(&refs), Some(start));
                    nav.advance(direction);
                    assert!(nav.current_index() < len);
                }
            }
        }
    }

    #[test]
    fn current_follows_cursor() {
        let mut nav = ImageNavigator::new(sources(&["a.png", "b.png"]), None);
        nav.advance(Direction::Next);
        assert_eq!(nav.current(), Some(&ImageSource::parse("b.png")));
    }

    #[test]
    fn direction_offsets() {
        assert_eq!(Direction::Previous.offset(), -1);
        assert_eq!(Direction::Next.offset(), 1);
    }
}
