//! Animation engine: configuration, the render loop and process wiring.
//!
//! The render loop owns the animation state. The input listener runs on its
//! own thread and only sends [`crate::types::Command`]s, so no state is shared
//! between the two beyond the channel.

pub mod config;
pub mod render_loop;
pub mod runner;

pub use pattern_animator_core as core;
pub use pattern_animator_input as input;
pub use pattern_animator_term as term;
pub use pattern_animator_types as types;

pub use config::AnimatorConfig;
pub use render_loop::{RenderLoop, StopReason};
pub use runner::{interrupt_signal, run_animation, Outcome};
