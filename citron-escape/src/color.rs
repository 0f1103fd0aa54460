use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::table;

/// One entry of the 256-color palette, bound to a display mode.
///
/// A `Color` is a palette index plus a flag selecting whether its sequence
/// paints the foreground or the background. Since the index is a `u8`, any
/// value a caller can construct refers to a real palette entry; there is no
/// fallible path here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    index: u8,
    background: bool,
}

impl Color {
    /// Foreground color for the given palette index.
    pub const fn foreground(index: u8) -> Self {
        Self { index, background: false }
    }

    /// Background color for the given palette index.
    pub const fn background(index: u8) -> Self {
        Self { index, background: true }
    }

    /// The precomputed SGR sequence selecting this color.
    pub const fn sequence(self) -> &'static str {
        if self.background {
            table::BACKGROUND[self.index as usize]
        } else {
            table::FOREGROUND[self.index as usize]
        }
    }

    /// The raw palette index.
    pub const fn index(self) -> u8 {
        self.index
    }

    /// Whether the sequence paints the background rather than the text.
    pub const fn is_background(self) -> bool {
        self.background
    }

    /// The same palette entry in foreground mode.
    pub const fn to_foreground(self) -> Self {
        Self { index: self.index, background: false }
    }

    /// The same palette entry in background mode.
    pub const fn to_background(self) -> Self {
        Self { index: self.index, background: true }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.sequence())
    }
}

/// A 24-bit RGB triple.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, ()> {
        let chars = if s.starts_with("0x") && s.len() == 8 {
            &s[2..]
        } else if s.starts_with('#') && s.len() == 7 {
            &s[1..]
        } else {
            return Err(());
        };

        let r = u8::from_str_radix(&chars[0..=1], 16).map_err(|_| ())?;
        let g = u8::from_str_radix(&chars[2..=3], 16).map_err(|_| ())?;
        let b = u8::from_str_radix(&chars[4..=5], 16).map_err(|_| ())?;

        Ok(Self { r, g, b })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequences_come_from_the_tables() {
        assert_eq!(Color::foreground(196).sequence(), "\x1b[38;5;196m");
        assert_eq!(Color::background(196).sequence(), "\x1b[48;5;196m");
        assert_eq!(Color::foreground(0).sequence(), "\x1b[38;5;0m");
        assert_eq!(Color::background(255).sequence(), "\x1b[48;5;255m");
    }

    #[test]
    fn display_writes_the_sequence() {
        assert_eq!(Color::foreground(21).to_string(), "\x1b[38;5;21m");
    }

    #[test]
    fn mode_flips_keep_the_index() {
        let fg = Color::foreground(33);
        let bg = fg.to_background();
        assert_eq!(bg.index(), 33);
        assert!(bg.is_background());
        assert_eq!(bg.to_foreground(), fg);
    }

    #[test]
    fn equality_requires_index_and_mode() {
        assert_ne!(Color::foreground(7), Color::background(7));
        assert_ne!(Color::foreground(7), Color::foreground(8));
        assert_eq!(Color::foreground(7), Color::foreground(7));
    }

    #[test]
    fn color_survives_a_serde_round_trip() {
        let color = Color::background(142);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(serde_json::from_str::<Color>(&json).unwrap(), color);
    }

    #[test]
    fn parse_valid_rgb_strings() {
        assert_eq!("#11aaff".parse(), Ok(Rgb { r: 0x11, g: 0xAA, b: 0xFF }));
        assert_eq!("0x11aaff".parse(), Ok(Rgb { r: 0x11, g: 0xAA, b: 0xFF }));
    }

    #[test]
    fn parse_invalid_rgb_strings() {
        assert_eq!(Rgb::from_str("11aaff"), Err(()));
        assert_eq!(Rgb::from_str("#11aaf"), Err(()));
        assert_eq!(Rgb::from_str("#11aagf"), Err(()));
    }

    #[test]
    fn rgb_displays_as_hex() {
        assert_eq!(Rgb { r: 255, g: 0, b: 95 }.to_string(), "#ff005f");
    }
}
