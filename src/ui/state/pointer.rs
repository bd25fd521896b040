// SPDX-License-Identifier: MPL-2.0
//! Pointer tracking for the magnifier loupe.
//!
//! Tracks the cursor position relative to the comparison surface and whether
//! the loupe is held open (a press-and-hold interaction). Position updates
//! are independent of the drag flag so the loupe can be pre-positioned
//! before it is opened.

use iced::Point;

/// Pointer position and loupe-drag state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    /// Cursor position in pixels, relative to the surface's top-left corner.
    position: Point,
    /// Whether the loupe is currently held open.
    dragging: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: Point::ORIGIN,
            dragging: false,
        }
    }
}

impl PointerState {
    /// Updates the tracked position. Always applies, dragging or not.
    pub fn move_to(&mut self, position: Point) {
        self.position = position;
    }

    /// Opens the loupe. Callers must only invoke this for presses that
    /// originated inside the surface bounds.
    pub fn press(&mut self) {
        self.dragging = true;
    }

    /// Closes the loupe.
    ///
    /// Wired to a window-level release listener, so it fires even when the
    /// button is released outside the surface. The loupe must never stay
    /// open past a release, wherever that release lands.
    pub fn release(&mut self) {
        self.dragging = false;
    }

    /// Returns the tracked cursor position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns whether the loupe is held open.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pointer_is_at_origin_and_idle() {
        let state = PointerState::default();
        assert_eq!(state.position(), Point::ORIGIN);
        assert!(!state.is_dragging());
    }

    #[test]
    fn move_updates_position_without_touching_drag() {
        let mut state = PointerState::default();
        state.move_to(Point::new(120.0, 80.0));
        assert_eq!(state.position(), Point::new(120.0, 80.0));
        assert!(!state.is_dragging());

        state.press();
        state.move_to(Point::new(10.0, 5.0));
        assert_eq!(state.position(), Point::new(10.0, 5.0));
        assert!(state.is_dragging());
    }

    #[test]
    fn press_then_release_closes_loupe() {
        let mut state = PointerState::default();
        state.press();
        assert!(state.is_dragging());
        state.release();
        assert!(!state.is_dragging());
    }

    #[test]
    fn release_clears_drag_even_after_leaving_surface() {
        let mut state = PointerState::default();
        state.move_to(Point::new(400.0, 250.0));
        state.press();

        // Drag past the surface edge: coordinates go negative / out of bounds.
        state.move_to(Point::new(-50.0, -10.0));
        assert!(state.is_dragging());

        // The window-level listener delivers the release regardless.
        state.release();
        assert!(!state.is_dragging());
    }

    #[test]
    fn release_is_idempotent() {
        let mut state = PointerState::default();
        state.release();
        assert!(!state.is_dragging());

        state.press();
        state.release();
        state.release();
        assert!(!state.is_dragging());
    }
}
