//! Animation state module - position, tuning knobs and the bounce state machine
//!
//! [`AnimationState`] is owned by the render loop. Every parameter edit goes
//! through one of the clamping operations below, so the state can never leave
//! its valid ranges:
//!
//! - `0 <= position <= travel_range`
//! - `MIN_SPEED_SECS <= speed <= MAX_SPEED_SECS`
//! - `MIN_TRAVEL_RANGE <= travel_range <= MAX_TRAVEL_RANGE`

use std::fmt;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::pattern;
use crate::types::*;

/// Observable result of a parameter edit, shown to the user as a one-line notice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Notice {
    PatternChanged(PatternKind),
    RandomPattern(PatternKind),
    Speed(f64),
    Range(u16),
    Paused,
    Resumed,
    /// The user asked for the controls reference.
    Help,
}

/// Read-only statistics view derived from [`AnimationState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub elapsed: Duration,
    pub bounces: u64,
    pub speed: f64,
    pub travel_range: u16,
    pub pattern: PatternKind,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Time: {}s | Bounces: {} | Speed: {:.2}s | Range: {} | Pattern: {}",
            self.elapsed.as_secs(),
            self.bounces,
            self.speed,
            self.travel_range,
            self.pattern.name()
        )
    }
}

/// Complete animation state
#[derive(Debug, Clone)]
pub struct AnimationState {
    position: u16,
    heading: Heading,
    /// Seconds between frames.
    speed: f64,
    travel_range: u16,
    pattern: PatternKind,
    paused: bool,
    running: bool,
    show_stats: bool,
    /// Completed (unpaused) ticks.
    frame: u64,
    bounces: u64,
    started_at: Instant,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationState {
    /// Create the startup state: at column 0, heading outbound, default tuning.
    pub fn new() -> Self {
        Self {
            position: 0,
            heading: Heading::Outbound,
            speed: DEFAULT_SPEED_SECS,
            travel_range: DEFAULT_TRAVEL_RANGE,
            pattern: PatternKind::Simple,
            paused: false,
            running: true,
            show_stats: false,
            frame: 0,
            bounces: 0,
            started_at: Instant::now(),
        }
    }

    /// Create a startup state with custom tuning. Out-of-range values are clamped.
    pub fn with_settings(
        speed: f64,
        travel_range: u16,
        pattern: PatternKind,
        show_stats: bool,
    ) -> Self {
        let mut state = Self::new();
        state.speed = clamp_speed(speed);
        state.travel_range = travel_range.clamp(MIN_TRAVEL_RANGE, MAX_TRAVEL_RANGE);
        state.pattern = pattern;
        state.show_stats = show_stats;
        state
    }

    pub fn position(&self) -> u16 {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_secs_f64(self.speed)
    }

    pub fn travel_range(&self) -> u16 {
        self.travel_range
    }

    pub fn pattern(&self) -> PatternKind {
        self.pattern
    }

    pub fn pattern_index(&self) -> usize {
        self.pattern.index()
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn show_stats(&self) -> bool {
        self.show_stats
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn bounces(&self) -> u64 {
        self.bounces
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Glyphs of the active pattern for the current frame.
    pub fn current_pattern<R: Rng>(&self, rng: &mut R) -> String {
        pattern::render(self.pattern, self.frame, rng)
    }

    /// Cycle the pattern mode by `delta` steps, wrapping in both directions.
    pub fn change_pattern(&mut self, delta: i32) -> Notice {
        self.pattern = self.pattern.offset(delta);
        Notice::PatternChanged(self.pattern)
    }

    /// Jump to a uniformly random pattern mode (may pick the current one).
    pub fn random_pattern<R: Rng>(&mut self, rng: &mut R) -> Notice {
        let index = rng.gen_range(0..PATTERN_COUNT);
        self.pattern = PatternKind::ALL[index];
        Notice::RandomPattern(self.pattern)
    }

    /// Scale the frame delay by `factor`, clamped to the speed bounds.
    pub fn adjust_speed(&mut self, factor: f64) -> Notice {
        self.speed = clamp_speed(self.speed * factor);
        Notice::Speed(self.speed)
    }

    /// Grow or shrink the travel range by `delta`, clamped to the range bounds.
    ///
    /// The position is pulled back inside a narrowed range.
    pub fn adjust_range(&mut self, delta: i32) -> Notice {
        let next = (self.travel_range as i32 + delta)
            .clamp(MIN_TRAVEL_RANGE as i32, MAX_TRAVEL_RANGE as i32);
        self.travel_range = next as u16;
        self.position = self.position.min(self.travel_range);
        Notice::Range(self.travel_range)
    }

    pub fn toggle_pause(&mut self) -> Notice {
        self.paused = !self.paused;
        if self.paused {
            Notice::Paused
        } else {
            Notice::Resumed
        }
    }

    pub fn toggle_stats(&mut self) {
        self.show_stats = !self.show_stats;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advance one tick of the bounce state machine.
    ///
    /// Does nothing while paused. Otherwise moves one column along the
    /// heading, reverses (counting a bounce) when a boundary is reached and
    /// advances the frame counter.
    pub fn update_position(&mut self) {
        if self.paused {
            return;
        }

        match self.heading {
            Heading::Outbound => {
                self.position = (self.position + 1).min(self.travel_range);
                if self.position >= self.travel_range {
                    self.heading = self.heading.reversed();
                    self.bounces += 1;
                }
            }
            Heading::Inbound => {
                self.position = self.position.saturating_sub(1);
                if self.position == 0 {
                    self.heading = self.heading.reversed();
                    self.bounces += 1;
                }
            }
        }

        self.frame += 1;
    }

    /// Apply a decoded key command.
    ///
    /// Returns the notice to show, if the command produces one.
    pub fn apply_command<R: Rng>(&mut self, command: Command, rng: &mut R) -> Option<Notice> {
        match command {
            Command::Faster => Some(self.adjust_speed(FASTER_FACTOR)),
            Command::Slower => Some(self.adjust_speed(SLOWER_FACTOR)),
            Command::NextPattern => Some(self.change_pattern(1)),
            Command::PrevPattern => Some(self.change_pattern(-1)),
            Command::RandomPattern => Some(self.random_pattern(rng)),
            Command::WidenRange => Some(self.adjust_range(RANGE_STEP)),
            Command::NarrowRange => Some(self.adjust_range(-RANGE_STEP)),
            Command::TogglePause => Some(self.toggle_pause()),
            Command::ToggleStats => {
                self.toggle_stats();
                None
            }
            Command::Help => Some(Notice::Help),
            Command::Quit => {
                self.stop();
                None
            }
        }
    }

    pub fn stats(&self) -> Stats {
        self.stats_at(Instant::now())
    }

    /// Statistics as of `now`.
    pub fn stats_at(&self, now: Instant) -> Stats {
        Stats {
            elapsed: now.saturating_duration_since(self.started_at),
            bounces: self.bounces,
            speed: self.speed,
            travel_range: self.travel_range,
            pattern: self.pattern,
        }
    }
}

fn clamp_speed(speed: f64) -> f64 {
    if speed.is_nan() {
        return DEFAULT_SPEED_SECS;
    }
    speed.clamp(MIN_SPEED_SECS, MAX_SPEED_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_animation_state() {
        let state = AnimationState::new();

        assert_eq!(state.position(), 0);
        assert_eq!(state.heading(), Heading::Outbound);
        assert_eq!(state.speed(), 0.1);
        assert_eq!(state.travel_range(), 40);
        assert_eq!(state.pattern_index(), 0);
        assert!(!state.paused());
        assert!(state.running());
        assert!(!state.show_stats());
        assert_eq!(state.frame(), 0);
        assert_eq!(state.bounces(), 0);
    }

    #[test]
    fn forty_updates_reach_the_far_wall() {
        let mut state = AnimationState::new();
        for _ in 0..40 {
            state.update_position();
        }

        assert_eq!(state.position(), 40);
        assert_eq!(state.heading(), Heading::Inbound);
        assert_eq!(state.bounces(), 1);
        assert_eq!(state.frame(), 40);
    }

    #[test]
    fn bounce_only_counts_at_boundaries() {
        for range in [10u16, 11, 37, 80] {
            let mut state = AnimationState::with_settings(0.1, range, PatternKind::Simple, false);
            let mut expected_bounces = 0;
            for _ in 0..(range as u32 * 5) {
                let before = state.bounces();
                state.update_position();
                assert!(state.position() <= range);

                let at_wall = state.position() == 0 || state.position() == range;
                if at_wall {
                    expected_bounces += 1;
                    assert_eq!(state.bounces(), before + 1);
                } else {
                    assert_eq!(state.bounces(), before);
                }
            }
            assert_eq!(state.bounces(), expected_bounces);
            assert_eq!(state.bounces(), 5);
        }
    }

    #[test]
    fn paused_state_does_not_move_or_count_frames() {
        let mut state = AnimationState::new();
        state.update_position();
        assert_eq!(state.toggle_pause(), Notice::Paused);

        for _ in 0..10 {
            state.update_position();
        }
        assert_eq!(state.position(), 1);
        assert_eq!(state.frame(), 1);

        assert_eq!(state.toggle_pause(), Notice::Resumed);
        state.update_position();
        assert_eq!(state.position(), 2);
        assert_eq!(state.frame(), 2);
    }

    #[test]
    fn speed_stays_clamped() {
        let mut state = AnimationState::new();
        for _ in 0..20 {
            state.adjust_speed(FASTER_FACTOR);
        }
        assert_eq!(state.speed(), MIN_SPEED_SECS);

        for factor in [3.0, 0.5, 10.0, 10.0, 0.01, 1.25] {
            state.adjust_speed(factor);
            assert!(state.speed() >= MIN_SPEED_SECS && state.speed() <= MAX_SPEED_SECS);
        }

        for _ in 0..40 {
            state.adjust_speed(SLOWER_FACTOR);
        }
        assert_eq!(state.speed(), MAX_SPEED_SECS);
        assert_eq!(state.adjust_speed(f64::NAN), Notice::Speed(DEFAULT_SPEED_SECS));
    }

    #[test]
    fn range_stays_clamped() {
        let mut state = AnimationState::new();
        for _ in 0..20 {
            state.adjust_range(RANGE_STEP);
        }
        assert_eq!(state.travel_range(), MAX_TRAVEL_RANGE);

        for _ in 0..20 {
            state.adjust_range(-RANGE_STEP);
        }
        assert_eq!(state.travel_range(), MIN_TRAVEL_RANGE);
        assert_eq!(state.adjust_range(5), Notice::Range(15));
    }

    #[test]
    fn narrowing_range_keeps_position_inside() {
        let mut state = AnimationState::new();
        for _ in 0..30 {
            state.update_position();
        }
        assert_eq!(state.position(), 30);

        state.adjust_range(-30);
        assert_eq!(state.travel_range(), 10);
        assert_eq!(state.position(), 10);

        state.update_position();
        assert!(state.position() <= state.travel_range());
        assert_eq!(state.heading(), Heading::Inbound);
    }

    #[test]
    fn pattern_cycle_returns_home() {
        let mut state = AnimationState::new();
        state.change_pattern(3);
        let start = state.pattern_index();

        for _ in 0..PATTERN_COUNT {
            state.change_pattern(1);
        }
        assert_eq!(state.pattern_index(), start);

        for _ in 0..PATTERN_COUNT {
            state.change_pattern(-1);
        }
        assert_eq!(state.pattern_index(), start);

        state.change_pattern(-4);
        assert_eq!(state.pattern(), PatternKind::Fractal);
    }

    #[test]
    fn commands_map_to_operations() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = AnimationState::new();

        assert_eq!(
            state.apply_command(Command::NextPattern, &mut rng),
            Some(Notice::PatternChanged(PatternKind::Wave))
        );
        assert_eq!(
            state.apply_command(Command::PrevPattern, &mut rng),
            Some(Notice::PatternChanged(PatternKind::Simple))
        );
        assert_eq!(
            state.apply_command(Command::WidenRange, &mut rng),
            Some(Notice::Range(45))
        );
        assert_eq!(
            state.apply_command(Command::NarrowRange, &mut rng),
            Some(Notice::Range(40))
        );
        assert_eq!(state.apply_command(Command::Help, &mut rng), Some(Notice::Help));

        assert_eq!(state.apply_command(Command::ToggleStats, &mut rng), None);
        assert!(state.show_stats());

        match state.apply_command(Command::RandomPattern, &mut rng) {
            Some(Notice::RandomPattern(kind)) => assert_eq!(kind, state.pattern()),
            other => panic!("unexpected notice: {other:?}"),
        }

        assert_eq!(state.apply_command(Command::Quit, &mut rng), None);
        assert!(!state.running());
    }

    #[test]
    fn twenty_faster_commands_hit_the_floor() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut state = AnimationState::new();
        for _ in 0..20 {
            state.apply_command(Command::Faster, &mut rng);
        }
        assert_eq!(state.speed(), 0.01);
    }

    #[test]
    fn stats_reflect_state() {
        let mut state = AnimationState::new();
        for _ in 0..40 {
            state.update_position();
        }
        state.change_pattern(1);

        let now = state.started_at() + Duration::from_millis(12_400);
        let stats = state.stats_at(now);
        assert_eq!(stats.elapsed.as_secs(), 12);
        assert_eq!(stats.bounces, 1);
        assert_eq!(
            stats.to_string(),
            "Time: 12s | Bounces: 1 | Speed: 0.10s | Range: 40 | Pattern: Wave"
        );
    }

    #[test]
    fn with_settings_clamps_inputs() {
        let state = AnimationState::with_settings(5.0, 3, PatternKind::Pulse, true);
        assert_eq!(state.speed(), MAX_SPEED_SECS);
        assert_eq!(state.travel_range(), MIN_TRAVEL_RANGE);
        assert_eq!(state.pattern(), PatternKind::Pulse);
        assert!(state.show_stats());
    }
}
