// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::manifest::ImagePair;
use crate::ui::analysis;
use crate::ui::comparison::component;
use crate::ui::navbar;
use crate::ui::settings;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Comparison(component::Message),
    Navbar(navbar::Message),
    Analysis(analysis::Message),
    Settings(settings::Message),
    /// Result from the open-manifest file dialog.
    OpenManifestDialogResult(Option<PathBuf>),
    /// Result from loading and resolving a comparison manifest.
    ManifestLoaded(Result<Vec<ImagePair>, Error>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional comparison manifest to preload on startup.
    pub manifest_path: Option<String>,
}
