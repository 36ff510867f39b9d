//! Process wiring: listener thread + render loop + shutdown.

use std::future::Future;
use std::io::Write;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::config::AnimatorConfig;
use crate::core::AnimationState;
use crate::input::{InputListener, RawInput};
use crate::render_loop::{RenderLoop, StopReason};
use crate::term::{LineEnding, LineRenderer};

/// Final result of a run.
#[derive(Debug)]
pub struct Outcome {
    pub state: AnimationState,
    pub reason: StopReason,
    /// Raw capture failed and the run was render-only.
    pub degraded: bool,
}

/// Run the animation to completion.
///
/// Raw mode is acquired on `input` when the listener starts and released
/// before this returns, on every path out of the render loop.
pub async fn run_animation<I, W, F>(
    config: &AnimatorConfig,
    input: I,
    out: W,
    shutdown: F,
) -> Result<(Outcome, W)>
where
    I: RawInput + 'static,
    W: Write,
    F: Future<Output = ()>,
{
    let (tx, rx) = mpsc::unbounded_channel();
    let listener = InputListener::start(input, tx);
    let degraded = listener.degraded();

    let ending = if degraded {
        LineEnding::Lf
    } else {
        LineEnding::CrLf
    };
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut render_loop = RenderLoop::new(
        config.initial_state(),
        LineRenderer::new(out, ending),
        rx,
        rng,
    );
    let result = render_loop.run(shutdown).await;

    // Joining waits at most one poll interval; keep it off the async workers.
    if tokio::task::spawn_blocking(move || listener.shutdown())
        .await
        .is_err()
    {
        warn!("input listener shutdown task failed");
    }

    let reason = result?;
    let (state, renderer) = render_loop.into_parts();
    info!(reason = ?reason, degraded, "animation finished");
    Ok((
        Outcome {
            state,
            reason,
            degraded,
        },
        renderer.into_inner(),
    ))
}

/// Completes on Ctrl+C (or SIGTERM on unix).
///
/// If no handler can be installed it never completes, so a missing signal
/// facility cannot end the animation.
pub async fn interrupt_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    res = tokio::signal::ctrl_c() => {
                        if let Err(e) = res {
                            warn!(error = %e, "ctrl-c handler unavailable");
                            std::future::pending::<()>().await;
                        }
                    }
                    _ = term.recv() => {}
                }
                return;
            }
            Err(e) => warn!(error = %e, "SIGTERM handler unavailable"),
        }
    }

    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "ctrl-c handler unavailable");
        std::future::pending::<()>().await;
    }
}
