//! Pattern Animator runner (default binary).
//!
//! Renders a bouncing glyph pattern, one line per frame, while a background
//! listener applies single-key commands. Configuration comes from
//! `ANIMATOR_*` environment variables.

use std::fs::File;
use std::io;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pattern_animator::engine::{interrupt_signal, run_animation, AnimatorConfig};
use pattern_animator::input::{restore_terminal_best_effort, CrosstermInput};

fn main() -> Result<()> {
    let config = AnimatorConfig::from_env();
    init_logging(config.log_path.as_deref())?;
    install_panic_hook();

    let rt = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
    let result = rt.block_on(async {
        run_animation(&config, CrosstermInput::new(), io::stdout(), interrupt_signal()).await
    });

    // Always try to restore terminal state.
    restore_terminal_best_effort();
    let (outcome, _) = result?;
    info!(
        frames = outcome.state.frame(),
        bounces = outcome.state.bounces(),
        "exit"
    );
    Ok(())
}

/// Log to `path` when given. Stdout carries the animation, so there is no
/// console logging.
fn init_logging(path: Option<&str>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("failed to open log file {path}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal_best_effort();
        default_hook(info);
    }));
}
