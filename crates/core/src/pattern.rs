//! Pattern library - glyph strings for each pattern mode
//!
//! Every generator is a pure function of the frame counter and its fixed
//! parameters. The only exception is [`PatternKind::Random`], which draws from
//! the caller-supplied RNG so tests can seed it.

use rand::Rng;

use crate::types::{
    PatternKind, ALTERNATE_WIDTH, BOX_REPEAT, FIBONACCI_LENGTH, FRACTAL_MAX_LEN, PULSE_MAX_WIDTH,
    PULSE_MIN_WIDTH, RANDOM_WIDTH, SIMPLE_WIDTH, WAVE_WIDTH,
};

pub const SIMPLE_GLYPH: char = '*';
pub const WAVE_SOLID: char = '#';
pub const WAVE_FAINT: char = '.';
pub const SOLID_BLOCK: char = '█';
pub const SHADED_BLOCK: char = '▒';
pub const ALTERNATE_DARK: char = '▓';
pub const ALTERNATE_LIGHT: char = '░';
pub const RANDOM_ALPHABET: [char; 9] = ['@', '#', '$', '%', '&', '*', '+', '=', '~'];
pub const BOX_GLYPHS: [char; 4] = ['▖', '▘', '▝', '▗'];
pub const ARROW_RIGHT: &str = "====>";
pub const ARROW_LEFT: &str = "<====";

/// Render the glyph string for `kind` at `frame`.
///
/// This is the single dispatch point over the closed set of modes.
pub fn render<R: Rng>(kind: PatternKind, frame: u64, rng: &mut R) -> String {
    match kind {
        PatternKind::Simple => simple(SIMPLE_WIDTH),
        PatternKind::Wave => wave(frame, WAVE_WIDTH),
        PatternKind::Pulse => pulse(frame, PULSE_MIN_WIDTH, PULSE_MAX_WIDTH),
        PatternKind::Random => random_chars(rng, RANDOM_WIDTH),
        PatternKind::Alternate => alternating(frame, ALTERNATE_WIDTH),
        PatternKind::ArrowRight => arrow(true),
        PatternKind::ArrowLeft => arrow(false),
        PatternKind::BoxRotate => box_rotate(frame, BOX_REPEAT),
        PatternKind::Fibonacci => fibonacci(FIBONACCI_LENGTH),
        PatternKind::Fractal => fractal(frame, FRACTAL_MAX_LEN),
    }
}

pub fn simple(width: usize) -> String {
    std::iter::repeat(SIMPLE_GLYPH).take(width).collect()
}

/// Sine wave sampled across `width` columns, drifting with the frame.
pub fn wave(frame: u64, width: usize) -> String {
    (0..width)
        .map(|i| {
            let height = (3.0 * (i as f64 * 0.5 + frame as f64 * 0.2).sin() + 3.0).round();
            if height > 2.0 {
                WAVE_SOLID
            } else {
                WAVE_FAINT
            }
        })
        .collect()
}

/// Solid bar whose width oscillates between `min_width` and `max_width`.
///
/// The bounds may be given in either order.
pub fn pulse(frame: u64, min_width: usize, max_width: usize) -> String {
    let (min_width, max_width) = (min_width.min(max_width), min_width.max(max_width));
    let amplitude = (max_width - min_width) as f64 / 2.0;
    let mid = (max_width + min_width) as f64 / 2.0;
    let width = (amplitude * (frame as f64 * 0.1).sin() + mid).round() as usize;
    let width = width.clamp(min_width, max_width);
    std::iter::repeat(SOLID_BLOCK).take(width).collect()
}

pub fn random_chars<R: Rng>(rng: &mut R, width: usize) -> String {
    (0..width)
        .map(|_| RANDOM_ALPHABET[rng.gen_range(0..RANDOM_ALPHABET.len())])
        .collect()
}

/// Checkerboard of two shades that shifts by one column every two frames.
pub fn alternating(frame: u64, width: usize) -> String {
    let shift = (frame / 2) as usize;
    (0..width)
        .map(|i| {
            if (i + shift) % 2 == 0 {
                ALTERNATE_DARK
            } else {
                ALTERNATE_LIGHT
            }
        })
        .collect()
}

pub fn arrow(pointing_right: bool) -> String {
    if pointing_right {
        ARROW_RIGHT.to_string()
    } else {
        ARROW_LEFT.to_string()
    }
}

pub fn box_rotate(frame: u64, repeat: usize) -> String {
    let glyph = BOX_GLYPHS[(frame % BOX_GLYPHS.len() as u64) as usize];
    std::iter::repeat(glyph).take(repeat).collect()
}

/// Parity of the first `length` Fibonacci numbers: even is solid, odd is shaded.
pub fn fibonacci(length: usize) -> String {
    let (mut a, mut b) = (0u64, 1u64);
    let mut out = String::with_capacity(length * SOLID_BLOCK.len_utf8());
    for _ in 0..length {
        out.push(if a % 2 == 0 { SOLID_BLOCK } else { SHADED_BLOCK });
        let next = a.wrapping_add(b);
        a = b;
        b = next;
    }
    out
}

/// Cantor-like doubling: `iteration % 4` rounds of `p + shade + p`, then
/// truncated to `max_len` glyphs.
pub fn fractal(iteration: u64, max_len: usize) -> String {
    let mut pattern = SOLID_BLOCK.to_string();
    for _ in 0..iteration % 4 {
        let mut next = String::with_capacity(pattern.len() * 2 + SHADED_BLOCK.len_utf8());
        next.push_str(&pattern);
        next.push(SHADED_BLOCK);
        next.push_str(&pattern);
        pattern = next;
    }
    pattern.chars().take(max_len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn glyphs(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn simple_is_eight_stars() {
        assert_eq!(simple(SIMPLE_WIDTH), "********");
    }

    #[test]
    fn fibonacci_encodes_parity_of_first_ten() {
        let expected: String = [
            SOLID_BLOCK,
            SHADED_BLOCK,
            SHADED_BLOCK,
            SOLID_BLOCK,
            SHADED_BLOCK,
            SHADED_BLOCK,
            SOLID_BLOCK,
            SHADED_BLOCK,
            SHADED_BLOCK,
            SOLID_BLOCK,
        ]
        .iter()
        .collect();
        assert_eq!(fibonacci(FIBONACCI_LENGTH), expected);

        let g = glyphs(&expected);
        assert_eq!(g.iter().filter(|&&c| c == SOLID_BLOCK).count(), 4);
        assert_eq!(g.iter().filter(|&&c| c == SHADED_BLOCK).count(), 6);
    }

    #[test]
    fn box_rotate_uses_frame_mod_four() {
        assert_eq!(box_rotate(5, BOX_REPEAT), "▘▘▘▘▘");
        assert_eq!(box_rotate(0, BOX_REPEAT), "▖▖▖▖▖");
        assert_eq!(box_rotate(3, BOX_REPEAT), box_rotate(7, BOX_REPEAT));
    }

    #[test]
    fn wave_samples_sine_per_column() {
        let w = glyphs(&wave(0, WAVE_WIDTH));
        assert_eq!(w.len(), WAVE_WIDTH);
        // sin(0) = 0 -> height 3
        assert_eq!(w[0], WAVE_SOLID);
        // sin(3.5) ~ -0.35 -> height 2
        assert_eq!(w[7], WAVE_FAINT);
        assert!(w.iter().all(|&c| c == WAVE_SOLID || c == WAVE_FAINT));
    }

    #[test]
    fn pulse_stays_between_min_and_max() {
        assert_eq!(glyphs(&pulse(0, 3, 15)).len(), 9);
        assert_eq!(glyphs(&pulse(16, 3, 15)).len(), 15);
        assert_eq!(glyphs(&pulse(47, 3, 15)).len(), 3);
        for frame in 0..200 {
            let n = glyphs(&pulse(frame, 3, 15)).len();
            assert!((3..=15).contains(&n), "frame {frame}: width {n}");
        }
    }

    #[test]
    fn pulse_accepts_swapped_bounds() {
        for frame in [0, 16, 47] {
            assert_eq!(pulse(frame, 15, 3), pulse(frame, 3, 15));
        }
        assert_eq!(glyphs(&pulse(5, 4, 4)).len(), 4);
    }

    #[test]
    fn alternating_shifts_every_two_frames() {
        assert_eq!(alternating(0, 4), "▓░▓░");
        assert_eq!(alternating(1, 4), "▓░▓░");
        assert_eq!(alternating(2, 4), "░▓░▓");
        assert_eq!(glyphs(&alternating(9, ALTERNATE_WIDTH)).len(), ALTERNATE_WIDTH);
    }

    #[test]
    fn fractal_grows_then_wraps() {
        assert_eq!(fractal(0, FRACTAL_MAX_LEN), "█");
        assert_eq!(fractal(1, FRACTAL_MAX_LEN), "█▒█");
        assert_eq!(fractal(2, FRACTAL_MAX_LEN), "█▒█▒█▒█");
        assert_eq!(glyphs(&fractal(3, FRACTAL_MAX_LEN)).len(), 15);
        assert_eq!(fractal(4, FRACTAL_MAX_LEN), "█");
        assert_eq!(glyphs(&fractal(3, 5)).len(), 5);
    }

    #[test]
    fn random_draws_from_alphabet_and_follows_seed() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let first = random_chars(&mut a, RANDOM_WIDTH);
        assert_eq!(first, random_chars(&mut b, RANDOM_WIDTH));
        assert_eq!(glyphs(&first).len(), RANDOM_WIDTH);
        assert!(first.chars().all(|c| RANDOM_ALPHABET.contains(&c)));
    }

    #[test]
    fn every_mode_renders_non_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        for kind in PatternKind::ALL {
            for frame in [0, 1, 2, 5, 63, 1_000_000] {
                assert!(!render(kind, frame, &mut rng).is_empty(), "{kind:?} at {frame}");
            }
        }
    }

    #[test]
    fn arrow_modes_are_static() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(render(PatternKind::ArrowRight, 0, &mut rng), "====>");
        assert_eq!(render(PatternKind::ArrowRight, 99, &mut rng), "====>");
        assert_eq!(render(PatternKind::ArrowLeft, 3, &mut rng), "<====");
    }
}
