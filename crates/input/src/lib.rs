//! Terminal input module (animation-facing).
//!
//! This module turns raw key presses into [`crate::types::Command`]s. It keeps
//! the terminal behind the three-operation [`RawInput`] contract (enable, poll,
//! restore) and runs an [`InputListener`] thread that forwards decoded
//! commands to the render loop over a channel.

pub mod error;
pub mod listener;
pub mod map;
pub mod raw;

pub use pattern_animator_types as types;

pub use error::InputError;
pub use listener::InputListener;
pub use map::{command_for_char, handle_key_event};
pub use raw::{restore_terminal_best_effort, CrosstermInput, NullInput, RawInput, ScriptedInput};
