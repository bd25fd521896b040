// SPDX-License-Identifier: MPL-2.0
//! Canvas surface that rasterizes the comparison scene.
//!
//! All layout decisions come from `geometry::compose`; this module only
//! translates the resulting scene description into frame operations and
//! reports pointer events back in surface-relative coordinates.

use crate::manifest::ImagePair;
use crate::ui::comparison::component::Message;
use crate::ui::comparison::geometry::{self, LensDiameter, LensScene, Scene};
use crate::ui::design_tokens::palette;
use crate::ui::state::{MagnifierZoom, PointerState, RevealPercent};
use iced::widget::canvas::{self, Canvas, Frame, Path, Stroke};
use iced::{mouse, Element, Length, Point, Rectangle, Renderer, Size, Theme};

const DIVIDER_WIDTH: f32 = 3.0;
const DIVIDER_GRIP_RADIUS: f32 = 7.0;
const LENS_BORDER_WIDTH: f32 = 2.0;

/// One frame's worth of inputs to the surface.
pub struct Surface<'a> {
    pub pair: &'a ImagePair,
    pub reveal: RevealPercent,
    pub zoom: MagnifierZoom,
    pub pointer: PointerState,
    pub lens_diameter: LensDiameter,
}

/// Builds the canvas widget for the comparison surface.
pub fn view(surface: Surface<'_>) -> Element<'_, Message> {
    Canvas::new(surface)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

impl canvas::Program<Message> for Surface<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        match event {
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                // Position updates are surface-relative and independent of
                // the drag flag, so the loupe can be pre-positioned.
                if let Some(position) = cursor.position_in(bounds) {
                    return (
                        canvas::event::Status::Ignored,
                        Some(Message::CursorMoved(position)),
                    );
                }
            }
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                // Presses only open the loupe when they originate inside the
                // surface. The matching release is captured window-wide by
                // the application subscription.
                if cursor.position_in(bounds).is_some() {
                    return (
                        canvas::event::Status::Captured,
                        Some(Message::LensPressed),
                    );
                }
            }
            _ => {}
        }

        (canvas::event::Status::Ignored, None)
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let scene = geometry::compose(
            bounds.size(),
            self.reveal,
            self.zoom,
            &self.pointer,
            self.lens_diameter,
        );

        let mut frame = Frame::new(renderer, bounds.size());
        self.draw_scene(&mut frame, &scene);
        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}

impl Surface<'_> {
    fn draw_scene(&self, frame: &mut Frame, scene: &Scene) {
        frame.fill_rectangle(Point::ORIGIN, scene.viewport.size(), palette::GRAY_900);

        // Base (original) image, full width.
        frame.draw_image(scene.viewport, &self.pair.original.clone());

        // Upscaled overlay, clipped to the right-hand reveal region.
        if scene.overlay_clip.width > 0.0 {
            let viewport_size = scene.viewport.size();
            let origin = Point::new(-scene.overlay_clip.x, -scene.overlay_clip.y);
            let upscaled = self.pair.upscaled.clone();
            frame.with_clip(scene.overlay_clip, move |frame| {
                frame.draw_image(Rectangle::new(origin, viewport_size), &upscaled);
            });
        }

        self.draw_divider(frame, scene);

        if let Some(lens) = &scene.lens {
            self.draw_lens(frame, lens);
        }
    }

    fn draw_divider(&self, frame: &mut Frame, scene: &Scene) {
        let height = scene.viewport.height;
        frame.fill_rectangle(
            Point::new(scene.divider_x - DIVIDER_WIDTH / 2.0, 0.0),
            Size::new(DIVIDER_WIDTH, height),
            palette::WHITE,
        );

        let grip = Path::circle(
            Point::new(scene.divider_x, height / 2.0),
            DIVIDER_GRIP_RADIUS,
        );
        frame.fill(&grip, palette::WHITE);
    }

    fn draw_lens(&self, frame: &mut Frame, lens: &LensScene) {
        let bounds = lens.bounds;
        let layer = Rectangle::new(
            Point::new(
                lens.layer_bounds.x - bounds.x,
                lens.layer_bounds.y - bounds.y,
            ),
            lens.layer_bounds.size(),
        );
        let overlay_clip = lens.overlay_clip;
        let layer_bounds = lens.layer_bounds;
        let original = self.pair.original.clone();
        let upscaled = self.pair.upscaled.clone();

        frame.with_clip(bounds, move |frame| {
            // Near the viewport edges the magnified layer may not cover the
            // loupe; the backdrop shows through as empty space.
            frame.fill_rectangle(Point::ORIGIN, bounds.size(), palette::GRAY_900);
            frame.draw_image(layer, &original);

            if let Some(clip) = overlay_clip {
                let clip_local = Rectangle::new(
                    Point::new(clip.x - bounds.x, clip.y - bounds.y),
                    clip.size(),
                );
                let layer_in_clip = Rectangle::new(
                    Point::new(layer_bounds.x - clip.x, layer_bounds.y - clip.y),
                    layer_bounds.size(),
                );
                frame.with_clip(clip_local, move |frame| {
                    frame.draw_image(layer_in_clip, &upscaled);
                });
            }
        });

        frame.stroke(
            &Path::rectangle(bounds.position(), bounds.size()),
            Stroke::default()
                .with_color(palette::WHITE)
                .with_width(LENS_BORDER_WIDTH),
        );
    }
}
