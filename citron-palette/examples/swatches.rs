//! Print every family as a row of background swatches, darkest first.
use citron_escape::sgr;
use citron_palette::GROUPS;

fn main() {
    for group in GROUPS {
        println!("== {} ==", group.name());
        for family in group.families() {
            print!("{:>8} ", family.name());
            for color in family.backgrounds() {
                print!("{color}  {}", sgr::reset::BACKGROUND);
            }
            println!();
        }
        println!();
    }
}
