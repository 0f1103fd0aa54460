//! Named color families and nearest-color matching for the 256-color
//! terminal palette.
//!
//! The palette's 256 entries are organized into fourteen families (Red,
//! Green, Blue, Cyan, Yellow, Purple, Orange, Brown, Violet, Pink, Black,
//! Gray, White and the Shades ramp), each an ordered dark-to-light range
//! addressed by 1-based position and decorated with human-friendly shade
//! names. [`nearest_palette_index`] maps arbitrary RGB triples onto the
//! palette.
//!
//! ```
//! use citron_palette::{RED, nearest_palette_index};
//! use citron_escape::Rgb;
//!
//! let pure_red = RED.foreground(6)?;
//! assert_eq!(pure_red.index(), 196);
//! assert_eq!(nearest_palette_index(Rgb { r: 215, g: 0, b: 0 }), 160);
//! # Ok::<(), citron_palette::Error>(())
//! ```

mod convert;
mod error;
mod family;
mod named;

pub(crate) use citron_escape as escape;

pub use convert::nearest_palette_index;
pub use error::Error;
pub use family::{
    BLACK, BLUE, BROWN, CYAN, Family, GRAY, GRAYSCALE, GREEN, GROUPS, Group,
    ORANGE, PINK, PRIMARY, PURPLE, RED, SECONDARY, SHADES, TERTIARY, VIOLET,
    WHITE, YELLOW, family,
};
