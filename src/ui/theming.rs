// SPDX-License-Identifier: MPL-2.0
//! Theme selection following the OS appearance.

use iced::Theme;

/// Resolves the Iced theme from the OS light/dark preference.
///
/// Detection failures fall back to dark, which suits an image-comparison
/// surface better than a bright chrome.
#[must_use]
pub fn system_theme() -> Theme {
    if let Ok(dark_light::Mode::Light) = dark_light::detect() {
        Theme::Light
    } else {
        Theme::Dark
    }
}
