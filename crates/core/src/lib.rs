//! Core animation logic module - pure and testable
//!
//! This module contains the pattern generators and the animation state with
//! its bounce state machine. It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: every pattern except `Random` is a pure function of the frame
//! - **Testable**: unit tests cover every clamp and boundary transition
//! - **Portable**: usable from the terminal loop, benches or headless tests
//!
//! # Module Structure
//!
//! - [`pattern`]: the ten glyph generators and the single `render` dispatch
//! - [`animation`]: position, heading, tuning knobs, notices and statistics
//!
//! # Example
//!
//! ```
//! use pattern_animator_core::AnimationState;
//! use pattern_animator_types::{Command, Heading};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let mut state = AnimationState::new();
//!
//! state.apply_command(Command::NarrowRange, &mut rng);
//! for _ in 0..35 {
//!     state.update_position();
//! }
//!
//! assert_eq!(state.position(), 35);
//! assert_eq!(state.heading(), Heading::Inbound);
//! assert_eq!(state.bounces(), 1);
//! ```

pub mod animation;
pub mod pattern;

pub use pattern_animator_types as types;

pub use animation::{AnimationState, Notice, Stats};
pub use pattern::render;
