// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The comparison screen subscribes to window-level mouse releases: a loupe
//! drag must end on release even when the cursor left the surface (or the
//! window) first, so the release is captured here rather than on the canvas.
//! The subscription exists exactly while the comparison screen is active;
//! the runtime tears it down when this function stops returning it.

use super::{App, Message, Screen};
use crate::ui::comparison::component;
use iced::event::{self, Event};
use iced::{mouse, window, Subscription};

/// Creates the appropriate event subscription based on the current screen.
pub fn subscription(app: &App) -> Subscription<Message> {
    match app.screen() {
        Screen::Comparison => event::listen_with(|event, _status, _window| match event {
            // Manifest files can be dropped anywhere on the window.
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            // Window-wide release capture for the loupe. Deliberately not
            // gated on event status: a release must close the loupe even if
            // some widget claimed it.
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => Some(
                Message::Comparison(component::Message::LensReleased),
            ),
            _ => None,
        }),
        Screen::Analysis | Screen::Settings => {
            event::listen_with(|event, _status, _window| match event {
                Event::Window(window::Event::FileDropped(path)) => {
                    Some(Message::FileDropped(path))
                }
                _ => None,
            })
        }
    }
}
