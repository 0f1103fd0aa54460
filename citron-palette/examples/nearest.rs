//! Resolve hex colors given on the command line to their nearest palette
//! entry.
//!
//! ```text
//! cargo run --example nearest -- '#d75f00' '#808080'
//! ```
use citron_escape::{Color, Rgb, sgr};
use citron_palette::nearest_palette_index;

fn main() {
    for arg in std::env::args().skip(1) {
        match arg.parse::<Rgb>() {
            Ok(rgb) => {
                let index = nearest_palette_index(rgb);
                let swatch = Color::background(index);
                println!(
                    "{rgb} -> {index:3} {swatch}    {}",
                    sgr::reset::BACKGROUND
                );
            },
            Err(()) => eprintln!("{arg}: expected #rrggbb or 0xrrggbb"),
        }
    }
}
