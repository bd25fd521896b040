// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message, Screen, StatusLine};
use crate::config;
use crate::error::Error;
use crate::manifest;
use crate::ui::analysis;
use crate::ui::comparison::component;
use crate::ui::comparison::geometry::LensDiameter;
use crate::ui::navbar;
use crate::ui::settings;
use iced::Task;
use std::path::PathBuf;

/// Handles a top-level message and returns the follow-up task, if any.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Comparison(component::Message::OpenManifestRequested) => open_manifest_dialog(),
        Message::Comparison(msg) => {
            app.comparison.update(msg);
            Task::none()
        }
        Message::Navbar(msg) => {
            let next = match msg {
                navbar::Message::ShowComparison => Screen::Comparison,
                navbar::Message::ShowAnalysis => Screen::Analysis,
                navbar::Message::ShowSettings => Screen::Settings,
            };
            switch_screen(app, next);
            Task::none()
        }
        Message::Analysis(analysis::Message::NextPair) => {
            app.comparison.update(component::Message::NextPair);
            Task::none()
        }
        Message::Analysis(analysis::Message::PreviousPair) => {
            app.comparison.update(component::Message::PreviousPair);
            Task::none()
        }
        Message::Settings(settings::Message::LanguageSelected(locale)) => {
            app.i18n.set_locale(locale.clone());
            app.config.language = Some(locale.to_string());
            persist_config(app);
            Task::none()
        }
        Message::Settings(settings::Message::LensDiameterChanged(value)) => {
            let diameter = LensDiameter::new(value);
            app.comparison.set_lens_diameter(diameter);
            app.config.lens_diameter = Some(diameter.value());
            persist_config(app);
            Task::none()
        }
        Message::OpenManifestDialogResult(Some(path)) => load_manifest(path),
        Message::OpenManifestDialogResult(None) => Task::none(),
        Message::FileDropped(path) => load_manifest(path),
        Message::ManifestLoaded(Ok(pairs)) => {
            app.comparison.set_pairs(pairs);
            app.status = None;
            app.screen = Screen::Comparison;
            Task::none()
        }
        Message::ManifestLoaded(Err(error)) => {
            eprintln!("Failed to load manifest: {}", error);
            app.status = Some(status_line_for(&error));
            Task::none()
        }
    }
}

/// Switches the active screen. Leaving the comparison screen closes the
/// loupe, since its release listener goes away with the screen.
fn switch_screen(app: &mut App, next: Screen) {
    if app.screen == Screen::Comparison && next != Screen::Comparison {
        app.comparison.update(component::Message::LensReleased);
    }
    app.screen = next;
}

fn open_manifest_dialog() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .add_filter("Comparison manifest", &["toml"])
                .pick_file()
                .await
                .map(|file| file.path().to_path_buf())
        },
        Message::OpenManifestDialogResult,
    )
}

fn load_manifest(path: PathBuf) -> Task<Message> {
    Task::perform(manifest::load(path), Message::ManifestLoaded)
}

fn status_line_for(error: &Error) -> StatusLine {
    match error {
        Error::Manifest(manifest_error) => {
            let args = match manifest_error {
                crate::error::ManifestError::MissingImage(path) => {
                    let filename = path
                        .file_name()
                        .map(|name| name.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    vec![("filename", filename)]
                }
                _ => Vec::new(),
            };
            StatusLine {
                key: manifest_error.i18n_key(),
                args,
            }
        }
        _ => StatusLine {
            key: "error-manifest-unreadable",
            args: Vec::new(),
        },
    }
}

fn persist_config(app: &App) {
    if let Err(err) = config::save(&app.config) {
        eprintln!("Failed to save config: {:?}", err);
    }
}
