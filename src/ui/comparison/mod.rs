// SPDX-License-Identifier: MPL-2.0
//! Comparison surface: the split-reveal viewport with magnifier loupe.
//!
//! `component` orchestrates the interaction state and widget tree;
//! `geometry` derives the rendered scene purely from that state; `pane`
//! rasterizes the scene on a canvas; `controls` provides the reveal slider,
//! zoom buttons, and pair navigation; `navigator` owns the cyclic cursor
//! over the loaded pair set.

pub mod component;
pub mod controls;
pub mod geometry;
pub mod navigator;
pub mod pane;

pub use component::{Message, State};
pub use navigator::PairCursor;
