// SPDX-License-Identifier: MPL-2.0
//! `iced_reveal` is a split-reveal comparison viewer for original and
//! AI-upscaled image pairs, built with the Iced GUI framework.
//!
//! Co-registered image pairs are rendered behind a draggable reveal divider,
//! with a press-and-hold magnifier loupe at discrete zoom levels and a
//! display of externally produced quality analysis. It demonstrates
//! internationalization with Fluent, user preference management, and modular
//! UI design.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod manifest;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
