// SPDX-License-Identifier: MPL-2.0
//! Pure scene geometry for the comparison surface.
//!
//! `compose` maps the interaction state (reveal split, zoom level, pointer)
//! plus the measured viewport size to a render description. It is free of
//! side effects so every clip region and offset can be tested directly.
//! The viewport size is always the one measured at draw time, never a
//! hardcoded source size, so the loupe stays aligned under window resizes.

// Re-export loupe size constants from centralized config.
pub use crate::config::{DEFAULT_LENS_DIAMETER, MAX_LENS_DIAMETER, MIN_LENS_DIAMETER};

use crate::ui::state::{PointerState, RevealPercent, MagnifierZoom};
use iced::{Point, Rectangle, Size};

/// Loupe diameter in logical pixels, guaranteed to be within valid range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensDiameter(f32);

impl LensDiameter {
    /// Creates a new loupe diameter, clamping the value to the valid range.
    #[must_use]
    pub fn new(diameter: f32) -> Self {
        Self(diameter.clamp(MIN_LENS_DIAMETER, MAX_LENS_DIAMETER))
    }

    /// Returns the diameter in logical pixels.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the loupe radius.
    #[must_use]
    pub fn radius(self) -> f32 {
        self.0 / 2.0
    }
}

impl Default for LensDiameter {
    fn default() -> Self {
        Self(DEFAULT_LENS_DIAMETER)
    }
}

/// Everything the comparison surface draws, in viewport coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Full viewport rectangle at the origin; both images stretch to it.
    pub viewport: Rectangle,
    /// Region of the viewport where the upscaled overlay is visible:
    /// the right-hand `(100 - reveal)%`.
    pub overlay_clip: Rectangle,
    /// Horizontal position of the reveal divider.
    pub divider_x: f32,
    /// The magnifier loupe, present only while the pointer is held down.
    pub lens: Option<LensScene>,
}

/// The loupe portion of a scene.
///
/// The magnified layers are positioned so that the source point under the
/// cursor lands exactly at the loupe center, for any magnification factor.
#[derive(Debug, Clone, PartialEq)]
pub struct LensScene {
    /// Loupe viewport, centered on the pointer. Not clamped at the edges;
    /// near a border the magnified layer may expose empty space.
    pub bounds: Rectangle,
    /// Where the magnified image layer sits: scaled by the zoom factor with
    /// its origin at `bounds.position() + (-px·m + r, -py·m + r)`.
    pub layer_bounds: Rectangle,
    /// Portion of the loupe showing the upscaled overlay, clipped by the
    /// same reveal fraction as the main view. `None` when the overlay part
    /// of the magnified layer lies entirely outside the loupe.
    pub overlay_clip: Option<Rectangle>,
}

/// Derives the full scene from the current interaction state.
#[must_use]
pub fn compose(
    viewport: Size,
    reveal: RevealPercent,
    zoom: MagnifierZoom,
    pointer: &PointerState,
    lens_diameter: LensDiameter,
) -> Scene {
    let viewport_rect = Rectangle::with_size(viewport);
    let divider_x = viewport.width * reveal.fraction();

    let overlay_clip = Rectangle {
        x: divider_x,
        y: 0.0,
        width: viewport.width - divider_x,
        height: viewport.height,
    };

    let lens = pointer
        .is_dragging()
        .then(|| compose_lens(viewport, reveal, zoom, pointer.position(), lens_diameter));

    Scene {
        viewport: viewport_rect,
        overlay_clip,
        divider_x,
        lens,
    }
}

fn compose_lens(
    viewport: Size,
    reveal: RevealPercent,
    zoom: MagnifierZoom,
    pointer: Point,
    lens_diameter: LensDiameter,
) -> LensScene {
    let m = zoom.factor();
    let r = lens_diameter.radius();
    let d = lens_diameter.value();

    let bounds = Rectangle::new(
        Point::new(pointer.x - r, pointer.y - r),
        Size::new(d, d),
    );

    // Scale from the layer's own top-left and translate so the source pixel
    // under the cursor maps to the loupe center.
    let layer_bounds = Rectangle::new(
        Point::new(
            bounds.x - pointer.x * m + r,
            bounds.y - pointer.y * m + r,
        ),
        Size::new(viewport.width * m, viewport.height * m),
    );

    // Same reveal split as the main view, expressed on the magnified layer.
    let magnified_overlay = Rectangle {
        x: layer_bounds.x + layer_bounds.width * reveal.fraction(),
        y: layer_bounds.y,
        width: layer_bounds.width * (1.0 - reveal.fraction()),
        height: layer_bounds.height,
    };

    LensScene {
        bounds,
        layer_bounds,
        overlay_clip: bounds.intersection(&magnified_overlay),
    }
}
