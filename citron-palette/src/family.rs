//! Named color families and their grouping.
//!
//! A family is an ordered selection of palette indices, darkest shade
//! first, addressed by 1-based position. Each family also carries a table
//! of human-friendly shade names. Families are plain static data; nothing
//! here is computed at run time except the bounds check.

use log::debug;

use crate::{Error, escape::Color, named};

/// An ordered selection of palette indices with named shades.
#[derive(Debug)]
pub struct Family {
    name: &'static str,
    range: &'static [u8],
    shades: &'static [(&'static str, u8)],
}

impl Family {
    /// Display name of the family.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Number of positions in the family.
    pub const fn len(&self) -> usize {
        self.range.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// The full position table, darkest shade first.
    pub const fn indices(&self) -> &'static [u8] {
        self.range
    }

    /// Palette index at the given 1-based position.
    ///
    /// Positions run from 1 (the darkest shade) through [`len`](Self::len);
    /// position 0 and positions past the end fail with
    /// [`Error::IndexOutOfRange`].
    pub fn index(&self, position: usize) -> Result<u8, Error> {
        if position == 0 || position > self.range.len() {
            debug!(
                "rejecting position {position} for the {} family (len {})",
                self.name,
                self.range.len()
            );
            return Err(Error::IndexOutOfRange {
                family: self.name,
                position,
                len: self.range.len(),
            });
        }
        Ok(self.range[position - 1])
    }

    /// Foreground color at the given 1-based position.
    pub fn foreground(&self, position: usize) -> Result<Color, Error> {
        Ok(Color::foreground(self.index(position)?))
    }

    /// Background color at the given 1-based position.
    pub fn background(&self, position: usize) -> Result<Color, Error> {
        Ok(Color::background(self.index(position)?))
    }

    /// Iterates the palette indices in position order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + 'static {
        self.range.iter().copied()
    }

    /// Iterates the family as foreground colors, darkest first.
    pub fn foregrounds(&self) -> impl Iterator<Item = Color> + 'static {
        self.range.iter().map(|&index| Color::foreground(index))
    }

    /// Iterates the family as background colors, darkest first.
    pub fn backgrounds(&self) -> impl Iterator<Item = Color> + 'static {
        self.range.iter().map(|&index| Color::background(index))
    }

    /// The `(name, palette index)` shade table.
    pub const fn shades(&self) -> &'static [(&'static str, u8)] {
        self.shades
    }

    /// Palette index of a shade by its exact name.
    pub fn shade(&self, name: &str) -> Option<u8> {
        self.shades
            .iter()
            .find(|(shade, _)| *shade == name)
            .map(|&(_, index)| index)
    }
}

/// A named set of families.
#[derive(Debug)]
pub struct Group {
    name: &'static str,
    families: &'static [&'static Family],
}

impl Group {
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn families(&self) -> &'static [&'static Family] {
        self.families
    }
}

pub static RED: Family = Family {
    name: "Red",
    range: &[52, 88, 124, 1, 160, 196, 9, 167, 203, 210, 217],
    shades: named::RED,
};

pub static GREEN: Family = Family {
    name: "Green",
    range: &[
        22, 58, 28, 29, 64, 65, 2, 34, 35, 101, 70, 71, 10, 40, 106, 72, 41,
        107, 42, 108, 76, 77, 46, 112, 78, 47, 113, 148, 48, 114, 49, 149,
        150, 82, 151, 83, 118, 84, 85, 119, 154, 120, 121, 155, 156, 157,
        193, 194,
    ],
    shades: named::GREEN,
};

pub static BLUE: Family = Family {
    name: "Blue",
    range: &[
        17, 18, 19, 20, 4, 21, 25, 26, 27, 60, 61, 62, 63, 32, 12, 33, 67,
        68, 69, 103, 38, 104, 39, 105, 74, 75, 110, 45, 111, 146, 147, 81,
        153, 189,
    ],
    shades: named::BLUE,
};

pub static CYAN: Family = Family {
    name: "Cyan",
    range: &[
        23, 24, 6, 30, 31, 66, 36, 37, 73, 43, 109, 44, 79, 14, 80, 115, 50,
        116, 51, 117, 152, 86, 87, 122, 123, 158, 159, 195,
    ],
    shades: named::CYAN,
};

pub static YELLOW: Family = Family {
    name: "Yellow",
    range: &[
        100, 3, 142, 143, 178, 144, 184, 185, 220, 186, 187, 221, 222, 190,
        191, 11, 226, 192, 227, 228, 229, 230,
    ],
    shades: named::YELLOW,
};

pub static PURPLE: Family = Family {
    name: "Purple",
    range: &[
        53, 90, 5, 91, 126, 127, 128, 129, 164, 165, 201, 96, 133, 134, 170,
        171, 207, 139, 176, 213, 219, 225,
    ],
    shades: named::PURPLE,
};

pub static ORANGE: Family = Family {
    name: "Orange",
    range: &[130, 166, 202, 172, 208, 209, 214, 215, 216],
    shades: named::ORANGE,
};

pub static BROWN: Family = Family {
    name: "Brown",
    range: &[94, 95, 131, 136, 137, 138, 173, 179, 180, 181, 223],
    shades: named::BROWN,
};

pub static VIOLET: Family = Family {
    name: "Violet",
    range: &[54, 55, 56, 57, 92, 93, 97, 98, 99, 135, 140, 141, 177, 182, 183],
    shades: named::VIOLET,
};

pub static PINK: Family = Family {
    name: "Pink",
    range: &[
        89, 125, 13, 161, 162, 163, 197, 198, 199, 200, 132, 168, 169, 204,
        205, 206, 174, 175, 211, 212, 218, 224,
    ],
    shades: named::PINK,
};

pub static BLACK: Family = Family {
    name: "Black",
    range: &[16, 232, 0, 233],
    shades: named::BLACK,
};

pub static GRAY: Family = Family {
    name: "Gray",
    range: &[
        234, 235, 236, 237, 238, 239, 240, 59, 241, 242, 243, 8, 244, 102,
        245, 246, 247, 248, 145, 249, 250, 251, 252, 188, 253, 254,
    ],
    shades: named::GRAY,
};

pub static WHITE: Family = Family {
    name: "White",
    range: &[7, 255, 15, 231],
    shades: named::WHITE,
};

pub static SHADES: Family = Family {
    name: "Shades",
    range: &[
        232, 233, 234, 235, 236, 237, 238, 239, 240, 241, 242, 243, 244,
        245, 246, 247, 248, 249, 250, 251, 252, 253, 254, 255,
    ],
    shades: named::SHADES,
};

/// Red, Green and Blue.
pub static PRIMARY: Group = Group {
    name: "primary",
    families: &[&RED, &GREEN, &BLUE],
};

/// Cyan, Yellow and Purple.
pub static SECONDARY: Group = Group {
    name: "secondary",
    families: &[&CYAN, &YELLOW, &PURPLE],
};

/// Orange, Brown, Violet and Pink.
pub static TERTIARY: Group = Group {
    name: "tertiary",
    families: &[&ORANGE, &BROWN, &VIOLET, &PINK],
};

/// Black, Gray, White and the 24-step shade ramp.
pub static GRAYSCALE: Group = Group {
    name: "grayscale",
    families: &[&BLACK, &GRAY, &WHITE, &SHADES],
};

/// Every group, in primary/secondary/tertiary/grayscale order.
pub static GROUPS: [&Group; 4] = [&PRIMARY, &SECONDARY, &TERTIARY, &GRAYSCALE];

/// Finds a family by case-insensitive name across all groups.
pub fn family(name: &str) -> Option<&'static Family> {
    GROUPS
        .iter()
        .flat_map(|group| group.families().iter())
        .find(|family| family.name.eq_ignore_ascii_case(name))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_one_based() {
        assert_eq!(RED.index(1), Ok(52));
        assert_eq!(RED.index(3), Ok(124));
        assert_eq!(RED.index(4), Ok(1));
        assert_eq!(RED.index(11), Ok(217));
    }

    #[test]
    fn position_zero_is_rejected() {
        assert_eq!(
            RED.index(0),
            Err(Error::IndexOutOfRange { family: "Red", position: 0, len: 11 })
        );
    }

    #[test]
    fn position_past_the_end_is_rejected() {
        assert_eq!(
            GREEN.foreground(49),
            Err(Error::IndexOutOfRange {
                family: "Green",
                position: 49,
                len: 48
            })
        );
    }

    #[test]
    fn error_display_names_the_valid_range() {
        let err = WHITE.background(9).unwrap_err();
        assert_eq!(
            err.to_string(),
            "position 9 is out of range for the White family \
             (valid positions 1..=4)"
        );
    }

    #[test]
    fn accessors_carry_the_display_mode() {
        let fg = BLUE.foreground(9).unwrap();
        let bg = BLUE.background(9).unwrap();
        assert_eq!(fg.index(), 27);
        assert_eq!(bg.index(), 27);
        assert!(!fg.is_background());
        assert!(bg.is_background());
    }

    #[test]
    fn first_and_last_positions_match_the_tables() {
        assert_eq!(GREEN.index(1), Ok(22));
        assert_eq!(GREEN.index(48), Ok(194));
        assert_eq!(BLACK.index(1), Ok(16));
        assert_eq!(BLACK.index(4), Ok(233));
        assert_eq!(WHITE.index(2), Ok(255));
        assert_eq!(SHADES.index(24), Ok(255));
    }

    #[test]
    fn iteration_follows_position_order() {
        let indices: Vec<u8> = ORANGE.iter().collect();
        assert_eq!(indices, [130, 166, 202, 172, 208, 209, 214, 215, 216]);

        let first = ORANGE.backgrounds().next().unwrap();
        assert_eq!(first.index(), 130);
        assert!(first.is_background());
    }

    #[test]
    fn shades_resolve_by_exact_name() {
        assert_eq!(RED.shade("Pure_Red"), Some(196));
        assert_eq!(GRAY.shade("std_Gray"), Some(8));
        assert_eq!(SHADES.shade("Shade24"), Some(255));
        assert_eq!(RED.shade("pure_red"), None);
        assert_eq!(RED.shade("Pure_Green"), None);
    }

    #[test]
    fn every_shade_maps_into_its_family_range() {
        // Ranges and shade tables come from the same palette selection;
        // shade entries missing from the range (and vice versa) would mean
        // the tables drifted apart. The Orange range carries one unnamed
        // shade (216) and Purple one (225), so compare shade -> range only.
        for group in GROUPS {
            for family in group.families() {
                for &(name, index) in family.shades() {
                    assert!(
                        family.indices().contains(&index),
                        "{name} ({index}) missing from the {} range",
                        family.name()
                    );
                }
            }
        }
    }

    #[test]
    fn groups_partition_the_families() {
        assert_eq!(PRIMARY.families().len(), 3);
        assert_eq!(SECONDARY.families().len(), 3);
        assert_eq!(TERTIARY.families().len(), 4);
        assert_eq!(GRAYSCALE.families().len(), 4);

        let total: usize =
            GROUPS.iter().map(|group| group.families().len()).sum();
        assert_eq!(total, 14);
    }

    #[test]
    fn family_lookup_ignores_case() {
        assert_eq!(family("violet").unwrap().name(), "Violet");
        assert_eq!(family("SHADES").unwrap().name(), "Shades");
        assert!(family("mauve").is_none());
    }
}
