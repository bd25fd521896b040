// SPDX-License-Identifier: MPL-2.0
//! Top-level screens of the application.

/// The screen currently shown below the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Split-reveal comparison surface with the magnifier loupe.
    #[default]
    Comparison,
    /// Quality analysis display for the current pair.
    Analysis,
    /// Language and loupe preferences.
    Settings,
}
