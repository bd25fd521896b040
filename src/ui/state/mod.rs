// SPDX-License-Identifier: MPL-2.0
//! Interaction state for the comparison surface.
//!
//! Each sub-module owns one piece of user-driven state: the reveal split,
//! the magnifier zoom level, and the pointer/drag tracker. All inputs are
//! sanitized on write, so downstream rendering code never re-validates.

pub mod pointer;
pub mod reveal;
pub mod zoom;

pub use pointer::PointerState;
pub use reveal::RevealPercent;
pub use zoom::MagnifierZoom;
