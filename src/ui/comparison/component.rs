// SPDX-License-Identifier: MPL-2.0
//! Comparison component: wires the interaction state to the widget tree.
//!
//! The component owns the four pieces of interaction state (reveal split,
//! magnifier zoom, pointer tracker, pair cursor) plus the loaded pair set,
//! and translates messages into exactly one state mutation each. Rendering
//! geometry is never stored; the pane derives it from this state on every
//! draw.

use crate::i18n::fluent::I18n;
use crate::manifest::ImagePair;
use crate::ui::comparison::geometry::LensDiameter;
use crate::ui::comparison::navigator::PairCursor;
use crate::ui::comparison::{controls, pane};
use crate::ui::design_tokens::spacing;
use crate::ui::empty_state;
use crate::ui::state::{MagnifierZoom, PointerState, RevealPercent};
use iced::widget::Column;
use iced::{Element, Length, Point};

/// Comparison surface state.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Loaded pair set, replaced wholesale when a manifest loads.
    pairs: Vec<ImagePair>,
    /// Cyclic cursor into `pairs`.
    cursor: PairCursor,
    /// Position of the reveal divider.
    reveal: RevealPercent,
    /// Magnifier zoom level.
    zoom: MagnifierZoom,
    /// Pointer position and loupe-drag flag.
    pointer: PointerState,
    /// Loupe size, adjustable from settings.
    lens_diameter: LensDiameter,
}

/// Messages for the comparison component. Each input event mutates exactly
/// one piece of state.
#[derive(Debug, Clone)]
pub enum Message {
    /// The reveal slider moved.
    RevealChanged(u8),
    /// Step to the next magnification level.
    ZoomIn,
    /// Step to the previous magnification level.
    ZoomOut,
    /// Advance to the next pair.
    NextPair,
    /// Step back to the previous pair.
    PreviousPair,
    /// The cursor moved over the surface (surface-relative coordinates).
    CursorMoved(Point),
    /// The primary button was pressed inside the surface.
    LensPressed,
    /// The primary button was released, anywhere in the window.
    LensReleased,
    /// The open-manifest affordance was activated (handled by the app).
    OpenManifestRequested,
}

/// Context required to render the comparison view.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

impl State {
    /// Replaces the pair set and re-anchors the cursor.
    pub fn set_pairs(&mut self, pairs: Vec<ImagePair>) {
        self.pairs = pairs;
        self.cursor.rebind(self.pairs.len());
    }

    /// Returns the pair under the cursor, if any.
    #[must_use]
    pub fn current_pair(&self) -> Option<&ImagePair> {
        self.cursor.current(&self.pairs)
    }

    /// Returns whether any pairs are loaded.
    #[must_use]
    pub fn has_pairs(&self) -> bool {
        !self.pairs.is_empty()
    }

    /// Returns the 1-based cursor position and total, for display.
    #[must_use]
    pub fn pair_position(&self) -> Option<(usize, usize)> {
        self.has_pairs()
            .then(|| (self.cursor.index() + 1, self.pairs.len()))
    }

    /// Returns whether navigation controls should be enabled.
    #[must_use]
    pub fn can_navigate(&self) -> bool {
        self.pairs.len() > 1
    }

    #[must_use]
    pub fn reveal(&self) -> RevealPercent {
        self.reveal
    }

    #[must_use]
    pub fn zoom(&self) -> MagnifierZoom {
        self.zoom
    }

    #[must_use]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    #[must_use]
    pub fn lens_diameter(&self) -> LensDiameter {
        self.lens_diameter
    }

    pub fn set_lens_diameter(&mut self, diameter: LensDiameter) {
        self.lens_diameter = diameter;
    }

    /// Handles a comparison message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::RevealChanged(percent) => {
                self.reveal = RevealPercent::new(i32::from(percent));
            }
            Message::ZoomIn => self.zoom.zoom_in(),
            Message::ZoomOut => self.zoom.zoom_out(),
            Message::NextPair => self.cursor.advance(self.pairs.len()),
            Message::PreviousPair => self.cursor.retreat(self.pairs.len()),
            Message::CursorMoved(position) => self.pointer.move_to(position),
            Message::LensPressed => self.pointer.press(),
            Message::LensReleased => self.pointer.release(),
            // Routed by the application; no component state changes.
            Message::OpenManifestRequested => {}
        }
    }

    /// Renders the comparison view, or the open-manifest affordance when no
    /// pairs are loaded.
    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let Some(pair) = self.current_pair() else {
            return empty_state::view(env.i18n);
        };

        let surface = pane::view(pane::Surface {
            pair,
            reveal: self.reveal,
            zoom: self.zoom,
            pointer: self.pointer,
            lens_diameter: self.lens_diameter,
        });

        let controls = controls::view(
            controls::ViewContext { i18n: env.i18n },
            self,
        );

        Column::new()
            .spacing(spacing::SM)
            .padding(spacing::MD)
            .push(surface)
            .push(controls)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::image;
    use std::path::PathBuf;

    fn sample_pairs(count: usize) -> Vec<ImagePair> {
        (0..count)
            .map(|i| ImagePair {
                name: format!("pair-{i}"),
                original: image::Handle::from_path(format!("/tmp/original-{i}.png")),
                upscaled: image::Handle::from_path(format!("/tmp/upscaled-{i}.png")),
                original_path: PathBuf::from(format!("/tmp/original-{i}.png")),
                upscaled_path: PathBuf::from(format!("/tmp/upscaled-{i}.png")),
                analysis: None,
            })
            .collect()
    }

    #[test]
    fn default_state_matches_mount_defaults() {
        let state = State::default();
        assert_eq!(state.reveal().value(), 50);
        assert_eq!(state.zoom().index(), 0);
        assert_eq!(state.pointer().position(), Point::ORIGIN);
        assert!(!state.pointer().is_dragging());
        assert!(state.current_pair().is_none());
        assert!(state.pair_position().is_none());
    }

    #[test]
    fn reveal_message_clamps_and_stores() {
        let mut state = State::default();
        state.update(Message::RevealChanged(73));
        assert_eq!(state.reveal().value(), 73);
        state.update(Message::RevealChanged(200));
        assert_eq!(state.reveal().value(), 100);
    }

    #[test]
    fn navigation_cycles_through_pairs() {
        let mut state = State::default();
        state.set_pairs(sample_pairs(3));

        state.update(Message::NextPair);
        state.update(Message::NextPair);
        state.update(Message::NextPair);
        assert_eq!(state.pair_position(), Some((1, 3)));

        state.update(Message::PreviousPair);
        assert_eq!(state.pair_position(), Some((3, 3)));
    }

    #[test]
    fn navigation_disabled_for_small_sets() {
        let mut state = State::default();
        assert!(!state.can_navigate());

        state.set_pairs(sample_pairs(1));
        assert!(!state.can_navigate());
        state.update(Message::NextPair);
        assert_eq!(state.pair_position(), Some((1, 1)));
    }

    #[test]
    fn replacing_pairs_keeps_cursor_in_range() {
        let mut state = State::default();
        state.set_pairs(sample_pairs(5));
        for _ in 0..4 {
            state.update(Message::NextPair);
        }
        assert_eq!(state.pair_position(), Some((5, 5)));

        state.set_pairs(sample_pairs(2));
        assert_eq!(state.pair_position(), Some((2, 2)));
    }

    #[test]
    fn lens_press_and_release_toggle_drag() {
        let mut state = State::default();
        state.set_pairs(sample_pairs(1));

        state.update(Message::CursorMoved(Point::new(100.0, 60.0)));
        state.update(Message::LensPressed);
        assert!(state.pointer().is_dragging());

        // Release arrives from the window-level listener even if the cursor
        // left the surface first.
        state.update(Message::CursorMoved(Point::new(-30.0, 900.0)));
        state.update(Message::LensReleased);
        assert!(!state.pointer().is_dragging());
    }

    #[test]
    fn zoom_messages_respect_saturation() {
        let mut state = State::default();
        for _ in 0..10 {
            state.update(Message::ZoomIn);
        }
        assert_eq!(state.zoom().level(), 32);
        for _ in 0..10 {
            state.update(Message::ZoomOut);
        }
        assert_eq!(state.zoom().level(), 2);
    }

    #[test]
    fn magnifier_state_is_untouched_by_empty_set() {
        let mut state = State::default();
        state.update(Message::RevealChanged(80));
        state.update(Message::ZoomIn);
        state.update(Message::NextPair);

        assert_eq!(state.reveal().value(), 80);
        assert_eq!(state.zoom().level(), 4);
        assert!(state.current_pair().is_none());
    }
}
