//! RGB to nearest-palette-index conversion.
//!
//! Candidates are generated from the three palette partitions (the 16
//! standard colors, the 6x6x6 cube, the grayscale ramp) and compared by
//! squared Euclidean distance. Ties resolve in the fixed order standard,
//! cube, grayscale, so the result is deterministic but not always the
//! globally closest entry: a later partition never displaces an earlier
//! one that it merely ties.

use crate::escape::Rgb;

/// Reference RGB values of palette entries 0-15 (the VGA palette).
const STANDARD_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (128, 0, 0),
    (0, 128, 0),
    (128, 128, 0),
    (0, 0, 128),
    (128, 0, 128),
    (0, 128, 128),
    (192, 192, 192),
    (128, 128, 128),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (0, 0, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

/// Channel values of the six cube levels.
const CUBE_LEVELS: [i32; 6] = [0, 95, 135, 175, 215, 255];

const fn dist2(r1: i32, g1: i32, b1: i32, r2: i32, g2: i32, b2: i32) -> i32 {
    let dr = r1 - r2;
    let dg = g1 - g2;
    let db = b1 - b2;
    dr * dr + dg * dg + db * db
}

/// Quantizes one channel onto the cube levels.
const fn channel_level(value: i32) -> usize {
    if value == 255 { 5 } else { (value / 51) as usize }
}

/// Maps a channel mean onto the 24-step grayscale ramp.
///
/// Means of 248 and above clamp to the top step; the unclamped
/// `(mean - 8) / 10` would step one past the ramp at exactly 248.
const fn gray_step(mean: i32) -> i32 {
    if mean < 8 {
        0
    } else if mean >= 248 {
        23
    } else {
        (mean - 8) / 10
    }
}

/// Closest standard-16 entry by linear scan, first minimum wins.
const fn nearest_standard(r: i32, g: i32, b: i32) -> (u8, i32) {
    let mut best = 0u8;
    let mut best_dist = i32::MAX;
    let mut i = 0;
    while i < STANDARD_RGB.len() {
        let (sr, sg, sb) = STANDARD_RGB[i];
        let d = dist2(r, g, b, sr as i32, sg as i32, sb as i32);
        if d < best_dist {
            best_dist = d;
            best = i as u8;
        }
        i += 1;
    }
    (best, best_dist)
}

/// The palette index closest to an RGB triple.
///
/// Accepts the full `u8` domain on every channel and always returns a
/// valid index. Pure and allocation-free; the cost is a fixed 18 distance
/// comparisons.
pub const fn nearest_palette_index(rgb: Rgb) -> u8 {
    let (r, g, b) = (rgb.r as i32, rgb.g as i32, rgb.b as i32);

    let (standard, standard_dist) = nearest_standard(r, g, b);

    let (lr, lg, lb) =
        (channel_level(r), channel_level(g), channel_level(b));
    let cube = 16 + 36 * lr as i32 + 6 * lg as i32 + lb as i32;
    let cube_dist =
        dist2(r, g, b, CUBE_LEVELS[lr], CUBE_LEVELS[lg], CUBE_LEVELS[lb]);

    let step = gray_step((r + g + b) / 3);
    let gray = 8 + step * 10;
    let gray_dist = dist2(r, g, b, gray, gray, gray);

    if standard_dist <= cube_dist && standard_dist <= gray_dist {
        standard
    } else if cube_dist <= gray_dist {
        cube as u8
    } else {
        (232 + step) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn rgb(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }

    #[test]
    fn black_and_white_resolve_to_standard_entries() {
        // Both tie the cube corners exactly; the standard partition wins.
        assert_eq!(nearest_palette_index(rgb(0, 0, 0)), 0);
        assert_eq!(nearest_palette_index(rgb(255, 255, 255)), 15);
    }

    #[test]
    fn standard_beats_a_tied_cube_entry() {
        // (0,0,255) is both standard entry 12 and cube corner 21.
        assert_eq!(nearest_palette_index(rgb(0, 0, 255)), 12);
    }

    #[test]
    fn exact_cube_colors_map_into_the_cube() {
        assert_eq!(nearest_palette_index(rgb(95, 135, 175)), 67);
        assert_eq!(nearest_palette_index(rgb(0, 0, 95)), 17);
        assert_eq!(nearest_palette_index(rgb(215, 0, 0)), 160);
        assert_eq!(nearest_palette_index(rgb(255, 135, 0)), 208);
    }

    #[test]
    fn off_grid_colors_land_on_the_nearest_partition() {
        assert_eq!(nearest_palette_index(rgb(220, 30, 30)), 160);
        assert_eq!(nearest_palette_index(rgb(100, 160, 220)), 74);
    }

    #[test]
    fn grayscale_step_boundaries() {
        assert_eq!(gray_step(0), 0);
        assert_eq!(gray_step(7), 0);
        assert_eq!(gray_step(8), 0);
        assert_eq!(gray_step(17), 0);
        assert_eq!(gray_step(18), 1);
        assert_eq!(gray_step(247), 23);
        assert_eq!(gray_step(249), 23);
    }

    #[test]
    fn grayscale_step_clamps_at_the_top() {
        // (248 - 8) / 10 would be 24, one past the ramp.
        assert_eq!(gray_step(248), 23);
    }

    #[test]
    fn near_white_prefers_standard_white() {
        // With the mean-248 clamp the reconstructed gray is 238, farther
        // from (248,248,248) than standard white is.
        assert_eq!(nearest_palette_index(rgb(248, 248, 248)), 15);
    }

    #[test]
    fn dim_grays_fall_onto_the_ramp() {
        assert_eq!(nearest_palette_index(rgb(7, 7, 7)), 232);
        assert_eq!(nearest_palette_index(rgb(8, 8, 8)), 232);
        assert_eq!(nearest_palette_index(rgb(200, 200, 200)), 251);
        assert_eq!(nearest_palette_index(rgb(238, 238, 238)), 255);
    }

    #[test]
    fn ramp_values_round_trip_except_the_standard_gray() {
        for step in 0..24u8 {
            let value = 8 + 10 * step;
            let expected = if step == 12 {
                // Gray 128 is also standard entry 8, which wins the tie.
                8
            } else {
                232 + step
            };
            assert_eq!(
                nearest_palette_index(rgb(value, value, value)),
                expected,
                "step {step}"
            );
        }
    }

    #[test]
    fn standard_scan_keeps_the_first_minimum() {
        // (64,64,0) is equidistant from black and olive; the scan keeps
        // the earlier entry.
        let (index, dist) = nearest_standard(64, 64, 0);
        assert_eq!(index, 0);
        assert_eq!(dist, 64 * 64 * 2);
    }

    #[test]
    fn gray_inputs_stay_on_the_gray_axis() {
        // Standard grays, the cube diagonal, or the ramp; never a
        // chromatic entry.
        let gray_axis = |index: u8| {
            matches!(index, 0 | 7 | 8 | 15)
                || matches!(index, 16 | 59 | 102 | 145 | 188 | 231)
                || index >= 232
        };
        for value in 0..=255u8 {
            let index = nearest_palette_index(rgb(value, value, value));
            assert!(
                gray_axis(index),
                "gray input {value} landed on chromatic index {index}"
            );
        }
    }
}
