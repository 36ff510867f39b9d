//! Terminal line renderer module.
//!
//! This is a small, line-oriented output layer: every frame is exactly one line
//! of text, so there is no framebuffer or cursor addressing.
//!
//! - [`view`] is pure: it composes frame lines, notices and banners as strings
//! - [`renderer`] writes those strings to any `io::Write` sink

pub mod renderer;
pub mod view;

pub use pattern_animator_core as core;
pub use pattern_animator_types as types;

pub use renderer::{LineEnding, LineRenderer};
pub use view::{compose_frame, final_banner, format_notice, HELP_TEXT};
