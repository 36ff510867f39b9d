//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the animator.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (pattern generation, state updates, input, rendering).
//!
//! # Tuning Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_SPEED_SECS` | 0.1 | Delay between frames at startup |
//! | `MIN_SPEED_SECS` | 0.01 | Fastest allowed frame delay |
//! | `MAX_SPEED_SECS` | 1.0 | Slowest allowed frame delay |
//! | `DEFAULT_TRAVEL_RANGE` | 40 | Columns travelled before bouncing |
//! | `MIN_TRAVEL_RANGE` | 10 | Narrowest travel range |
//! | `MAX_TRAVEL_RANGE` | 80 | Widest travel range |
//! | `RANGE_STEP` | 5 | Columns added/removed per range key |
//! | `FASTER_FACTOR` | 0.8 | Speed multiplier for "faster" |
//! | `SLOWER_FACTOR` | 1.25 | Speed multiplier for "slower" |
//! | `INPUT_POLL_MS` | 10 | Key listener poll interval |
//!
//! # Examples
//!
//! ```
//! use pattern_animator_types::{Command, PatternKind, PATTERN_COUNT};
//!
//! let kind = PatternKind::from_index(7).unwrap();
//! assert_eq!(kind, PatternKind::BoxRotate);
//! assert_eq!(kind.name(), "Box Rotate");
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(PatternKind::from_str("wave"), Some(PatternKind::Wave));
//!
//! assert_eq!(Command::Quit.as_str(), "quit");
//! assert_eq!(PATTERN_COUNT, 10);
//! ```

/// Frame delay at startup, in seconds.
pub const DEFAULT_SPEED_SECS: f64 = 0.1;

/// Lower clamp for the frame delay, in seconds.
pub const MIN_SPEED_SECS: f64 = 0.01;

/// Upper clamp for the frame delay, in seconds.
pub const MAX_SPEED_SECS: f64 = 1.0;

/// Travel range at startup, in columns.
pub const DEFAULT_TRAVEL_RANGE: u16 = 40;

/// Lower clamp for the travel range.
pub const MIN_TRAVEL_RANGE: u16 = 10;

/// Upper clamp for the travel range.
pub const MAX_TRAVEL_RANGE: u16 = 80;

/// Travel range change per widen/narrow command.
pub const RANGE_STEP: i32 = 5;

/// Speed factor applied by [`Command::Faster`].
pub const FASTER_FACTOR: f64 = 0.8;

/// Speed factor applied by [`Command::Slower`].
pub const SLOWER_FACTOR: f64 = 1.25;

/// Key listener poll interval in milliseconds.
pub const INPUT_POLL_MS: u64 = 10;

/// Number of built-in pattern modes.
pub const PATTERN_COUNT: usize = 10;

/// Pattern widths (in glyphs).
pub const SIMPLE_WIDTH: usize = 8;
pub const WAVE_WIDTH: usize = 20;
pub const PULSE_MIN_WIDTH: usize = 3;
pub const PULSE_MAX_WIDTH: usize = 15;
pub const RANDOM_WIDTH: usize = 10;
pub const ALTERNATE_WIDTH: usize = 12;
pub const BOX_REPEAT: usize = 5;
pub const FIBONACCI_LENGTH: usize = 10;
pub const FRACTAL_MAX_LEN: usize = 15;


/// The ten built-in pattern modes, in selection order.
///
/// The mode list is closed: it is fixed at compile time and cycling through it
/// with [`PatternKind::offset`] wraps in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Simple,
    Wave,
    Pulse,
    Random,
    Alternate,
    ArrowRight,
    ArrowLeft,
    BoxRotate,
    Fibonacci,
    Fractal,
}

impl PatternKind {
    /// All modes in index order.
    pub const ALL: [PatternKind; PATTERN_COUNT] = [
        PatternKind::Simple,
        PatternKind::Wave,
        PatternKind::Pulse,
        PatternKind::Random,
        PatternKind::Alternate,
        PatternKind::ArrowRight,
        PatternKind::ArrowLeft,
        PatternKind::BoxRotate,
        PatternKind::Fibonacci,
        PatternKind::Fractal,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Step `delta` modes forward (or backward when negative), wrapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use pattern_animator_types::PatternKind;
    ///
    /// assert_eq!(PatternKind::Fractal.offset(1), PatternKind::Simple);
    /// assert_eq!(PatternKind::Simple.offset(-1), PatternKind::Fractal);
    /// ```
    pub fn offset(&self, delta: i32) -> Self {
        let n = PATTERN_COUNT as i32;
        let next = (self.index() as i32 + delta).rem_euclid(n);
        Self::ALL[next as usize]
    }

    /// Display name shown in notices and statistics.
    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::Simple => "Simple",
            PatternKind::Wave => "Wave",
            PatternKind::Pulse => "Pulse",
            PatternKind::Random => "Random",
            PatternKind::Alternate => "Alternate",
            PatternKind::ArrowRight => "Arrow Right",
            PatternKind::ArrowLeft => "Arrow Left",
            PatternKind::BoxRotate => "Box Rotate",
            PatternKind::Fibonacci => "Fibonacci",
            PatternKind::Fractal => "Fractal",
        }
    }

    /// Parse a mode from its display name (case-insensitive, spaces, `-` and
    /// `_` ignored) or from its 1-based number.
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(n) = s.parse::<usize>() {
            return n.checked_sub(1).and_then(Self::from_index);
        }

        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().replace(' ', "").to_lowercase() == key)
    }
}

/// Horizontal travel direction of the pattern.
///
/// - **Outbound**: moving right, position increases
/// - **Inbound**: moving left, position decreases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Outbound,
    Inbound,
}

impl Heading {
    pub fn reversed(&self) -> Self {
        match self {
            Heading::Outbound => Heading::Inbound,
            Heading::Inbound => Heading::Outbound,
        }
    }
}

/// Logical commands decoded from key presses.
///
/// The input listener produces these and the render loop applies them to the
/// animation state, one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Shorten the frame delay (`w` / Up)
    Faster,
    /// Lengthen the frame delay (`s` / Down)
    Slower,
    /// Select the next pattern mode (`d` / Right)
    NextPattern,
    /// Select the previous pattern mode (`a` / Left)
    PrevPattern,
    /// Select a uniformly random pattern mode (`r`)
    RandomPattern,
    /// Widen the travel range (`+` / `=`)
    WidenRange,
    /// Narrow the travel range (`-` / `_`)
    NarrowRange,
    /// Pause or resume movement (space)
    TogglePause,
    /// Show or hide the statistics suffix (`i`)
    ToggleStats,
    /// Print the controls help (`h` / `?`)
    Help,
    /// Stop the animation (`q`)
    Quit,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Faster => "faster",
            Command::Slower => "slower",
            Command::NextPattern => "nextPattern",
            Command::PrevPattern => "prevPattern",
            Command::RandomPattern => "randomPattern",
            Command::WidenRange => "widenRange",
            Command::NarrowRange => "narrowRange",
            Command::TogglePause => "togglePause",
            Command::ToggleStats => "toggleStats",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }
}
