// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the comparison component, localization,
//! and persisted preferences, and translates messages into side effects like
//! config persistence or manifest loading. Policy decisions (window sizing,
//! persistence format, localization switching) stay close to the main update
//! loop so user-facing behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::manifest;
use crate::ui::comparison::component;
use crate::ui::comparison::geometry::LensDiameter;
use crate::ui::theming;
use iced::{Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 720.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Status line shown under the navbar after a failed manifest load.
/// Localized at render time so language switches apply retroactively.
#[derive(Debug, Clone)]
pub struct StatusLine {
    pub key: &'static str,
    pub args: Vec<(&'static str, String)>,
}

/// Root Iced application state bridging UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    comparison: component::State,
    config: Config,
    status: Option<StatusLine>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("has_pairs", &self.comparison.has_pairs())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(None, Config::default())
    }
}

impl App {
    /// Builds the application state and the startup task (preloading a
    /// manifest passed on the command line).
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let app = Self::with_config(flags.lang, config);

        let task = match flags.manifest_path {
            Some(path) => Task::perform(
                manifest::load(PathBuf::from(path)),
                Message::ManifestLoaded,
            ),
            None => Task::none(),
        };

        (app, task)
    }

    fn with_config(cli_lang: Option<String>, config: Config) -> Self {
        let i18n = I18n::new(cli_lang, &config);
        let mut comparison = component::State::default();
        if let Some(diameter) = config.lens_diameter {
            comparison.set_lens_diameter(LensDiameter::new(diameter));
        }

        Self {
            i18n,
            screen: Screen::default(),
            comparison,
            config,
            status: None,
        }
    }

    pub fn title(&self) -> String {
        match self.comparison.current_pair() {
            Some(pair) => format!("{} - {}", self.i18n.tr("app-title"), pair.name),
            None => self.i18n.tr("app-title"),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    pub fn theme(&self) -> Theme {
        theming::system_theme()
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn comparison(&self) -> &component::State {
        &self.comparison
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ManifestError};
    use crate::manifest::ImagePair;
    use crate::ui::navbar;
    use iced::widget::image;

    fn sample_pairs(count: usize) -> Vec<ImagePair> {
        (0..count)
            .map(|i| ImagePair {
                name: format!("pair-{i}"),
                original: image::Handle::from_path(format!("/tmp/o-{i}.png")),
                upscaled: image::Handle::from_path(format!("/tmp/u-{i}.png")),
                original_path: format!("/tmp/o-{i}.png").into(),
                upscaled_path: format!("/tmp/u-{i}.png").into(),
                analysis: None,
            })
            .collect()
    }

    #[test]
    fn default_app_starts_on_comparison_screen() {
        let app = App::default();
        assert_eq!(app.screen(), Screen::Comparison);
        assert!(!app.comparison().has_pairs());
    }

    #[test]
    fn manifest_loaded_installs_pairs_and_clears_status() {
        let mut app = App::default();
        let _ = app.update(Message::ManifestLoaded(Err(Error::Manifest(
            ManifestError::Empty,
        ))));
        assert!(app.status.is_some());

        let _ = app.update(Message::ManifestLoaded(Ok(sample_pairs(2))));
        assert!(app.status.is_none());
        assert!(app.comparison().has_pairs());
        assert_eq!(app.screen(), Screen::Comparison);
    }

    #[test]
    fn manifest_error_sets_localized_status_key() {
        let mut app = App::default();
        let _ = app.update(Message::ManifestLoaded(Err(Error::Manifest(
            ManifestError::MissingImage("pairs/cat.png".into()),
        ))));
        let status = app.status.as_ref().expect("status should be set");
        assert_eq!(status.key, "error-manifest-missing-image");
        assert_eq!(status.args[0].1, "cat.png");
    }

    #[test]
    fn navbar_switches_screens() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::ShowAnalysis));
        assert_eq!(app.screen(), Screen::Analysis);
        let _ = app.update(Message::Navbar(navbar::Message::ShowComparison));
        assert_eq!(app.screen(), Screen::Comparison);
    }

    #[test]
    fn leaving_comparison_screen_closes_loupe() {
        let mut app = App::default();
        let _ = app.update(Message::ManifestLoaded(Ok(sample_pairs(1))));
        let _ = app.update(Message::Comparison(component::Message::LensPressed));
        assert!(app.comparison().pointer().is_dragging());

        let _ = app.update(Message::Navbar(navbar::Message::ShowSettings));
        assert!(!app.comparison().pointer().is_dragging());
    }

    #[test]
    fn analysis_navigation_drives_shared_cursor() {
        let mut app = App::default();
        let _ = app.update(Message::ManifestLoaded(Ok(sample_pairs(3))));

        let _ = app.update(Message::Analysis(crate::ui::analysis::Message::NextPair));
        assert_eq!(app.comparison().pair_position(), Some((2, 3)));

        // The comparison screen sees the same position.
        let _ = app.update(Message::Comparison(component::Message::NextPair));
        assert_eq!(app.comparison().pair_position(), Some((3, 3)));
    }

    #[test]
    fn title_includes_current_pair_name() {
        let mut app = App::default();
        assert!(!app.title().is_empty());

        let _ = app.update(Message::ManifestLoaded(Ok(sample_pairs(1))));
        assert!(app.title().contains("pair-0"));
    }
}
