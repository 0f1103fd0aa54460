//! Render every text attribute on a sample line, then switch it back off.
use citron_escape::sgr::{self, AttrFlags};

fn main() {
    let attrs = [
        ("bold", AttrFlags::BOLD),
        ("faint", AttrFlags::FAINT),
        ("italic", AttrFlags::ITALIC),
        ("underline", AttrFlags::UNDERLINE),
        ("blink", AttrFlags::BLINK),
        ("inverse", AttrFlags::INVERSE),
        ("hidden", AttrFlags::HIDDEN),
        ("strikethrough", AttrFlags::STRIKETHROUGH),
    ];

    for (name, attr) in attrs {
        println!("{}{name:>14}{} <- off again", attr.enable(), attr.disable());
    }

    let shouting = AttrFlags::BOLD | AttrFlags::UNDERLINE | AttrFlags::ITALIC;
    println!("{}combined{}", shouting.enable(), sgr::reset::ALL);
}
