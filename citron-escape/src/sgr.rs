//! Fixed SGR attribute and reset sequences.
//!
//! Everything here is a string constant from the SGR parameter table; the
//! only computation is [`AttrFlags`] concatenating constants for a set of
//! attributes.

use bitflags::bitflags;

/// Sequences enabling a text attribute.
///
/// `ESC[6m` (rapid blink) is deliberately absent; terminals that honor it
/// at all treat it as [`BLINK`](style::BLINK).
pub mod style {
    pub const BOLD: &str = "\x1b[1m";
    pub const FAINT: &str = "\x1b[2m";
    pub const ITALIC: &str = "\x1b[3m";
    pub const UNDERLINE: &str = "\x1b[4m";
    pub const BLINK: &str = "\x1b[5m";
    pub const INVERSE: &str = "\x1b[7m";
    pub const HIDDEN: &str = "\x1b[8m";
    pub const STRIKETHROUGH: &str = "\x1b[9m";
}

/// Sequences restoring default rendition.
pub mod reset {
    /// Resets every color and attribute at once.
    pub const ALL: &str = "\x1b[0m";

    /// Resets the foreground color only.
    pub const FOREGROUND: &str = "\x1b[39m";
    /// Resets the background color only.
    pub const BACKGROUND: &str = "\x1b[49m";

    /// Bold and faint share one "normal intensity" parameter.
    pub const BOLD: &str = "\x1b[22m";
    pub const FAINT: &str = "\x1b[22m";
    pub const ITALIC: &str = "\x1b[23m";
    pub const UNDERLINE: &str = "\x1b[24m";
    pub const BLINK: &str = "\x1b[25m";
    pub const INVERSE: &str = "\x1b[27m";
    pub const HIDDEN: &str = "\x1b[28m";
    pub const STRIKETHROUGH: &str = "\x1b[29m";
}

bitflags! {
    /// A set of text attributes.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AttrFlags: u8 {
        const BOLD          = 1 << 0;
        const FAINT         = 1 << 1;
        const ITALIC        = 1 << 2;
        const UNDERLINE     = 1 << 3;
        const BLINK         = 1 << 4;
        const INVERSE       = 1 << 5;
        const HIDDEN        = 1 << 6;
        const STRIKETHROUGH = 1 << 7;
    }
}

/// Flag → (on, off) sequence pairs, in flag declaration order.
const SEQUENCES: [(AttrFlags, &str, &str); 8] = [
    (AttrFlags::BOLD, style::BOLD, reset::BOLD),
    (AttrFlags::FAINT, style::FAINT, reset::FAINT),
    (AttrFlags::ITALIC, style::ITALIC, reset::ITALIC),
    (AttrFlags::UNDERLINE, style::UNDERLINE, reset::UNDERLINE),
    (AttrFlags::BLINK, style::BLINK, reset::BLINK),
    (AttrFlags::INVERSE, style::INVERSE, reset::INVERSE),
    (AttrFlags::HIDDEN, style::HIDDEN, reset::HIDDEN),
    (AttrFlags::STRIKETHROUGH, style::STRIKETHROUGH, reset::STRIKETHROUGH),
];

impl AttrFlags {
    /// Concatenated "on" sequences for every attribute in the set.
    pub fn enable(self) -> String {
        let mut out = String::new();
        for (flag, on, _) in SEQUENCES {
            if self.contains(flag) {
                out.push_str(on);
            }
        }
        out
    }

    /// Concatenated "off" sequences for every attribute in the set.
    pub fn disable(self) -> String {
        let mut out = String::new();
        for (flag, _, off) in SEQUENCES {
            if self.contains(flag) {
                out.push_str(off);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enable_concatenates_in_declaration_order() {
        let attrs = AttrFlags::UNDERLINE | AttrFlags::BOLD;
        assert_eq!(attrs.enable(), "\x1b[1m\x1b[4m");
    }

    #[test]
    fn disable_mirrors_enable() {
        let attrs = AttrFlags::ITALIC | AttrFlags::STRIKETHROUGH;
        assert_eq!(attrs.disable(), "\x1b[23m\x1b[29m");
    }

    #[test]
    fn bold_and_faint_share_the_off_sequence() {
        assert_eq!(AttrFlags::BOLD.disable(), AttrFlags::FAINT.disable());
    }

    #[test]
    fn empty_set_produces_nothing() {
        assert_eq!(AttrFlags::empty().enable(), "");
        assert_eq!(AttrFlags::empty().disable(), "");
    }
}
