//! Pattern Animator (workspace facade crate).
//!
//! This package exposes `pattern_animator::{core,engine,input,term,types}` while
//! the implementation lives in dedicated crates under `crates/`.

pub use pattern_animator_core as core;
pub use pattern_animator_engine as engine;
pub use pattern_animator_input as input;
pub use pattern_animator_term as term;
pub use pattern_animator_types as types;
