//! Precomputed SGR escape sequences for the 256-color terminal palette.
//!
//! This crate is the wire-format layer: every foreground and background
//! color sequence exists as a `'static` string, looked up by palette index,
//! alongside the fixed reset and text-attribute sequences. The semantic
//! layer (named color families, nearest-color matching) lives in
//! `citron-palette`.
//!
//! The crate assumes a terminal that already interprets SGR 256-color
//! sequences; it performs no capability detection and no I/O of its own.

mod color;
mod table;

pub mod sgr;

pub use color::{Color, Rgb};
pub use table::{BACKGROUND, FOREGROUND};
