//! Render loop: the single owner of [`AnimationState`].
//!
//! Each tick renders one line, waits out the frame delay and advances the
//! bounce state machine. Commands from the input listener are applied as they
//! arrive during the wait; the deadline of the in-flight frame does not move.

use std::future::Future;
use std::io::Write;

use anyhow::Result;
use rand::rngs::StdRng;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info};

use crate::core::AnimationState;
use crate::term::{compose_frame, final_banner, format_notice, LineRenderer};
use crate::types::Command;

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The quit command was applied.
    Quit,
    /// The shutdown future (process interrupt) completed.
    Interrupted,
}

enum Wake {
    Deadline,
    Command(Option<Command>),
    Interrupt,
}

pub struct RenderLoop<W: Write> {
    state: AnimationState,
    renderer: LineRenderer<W>,
    commands: UnboundedReceiver<Command>,
    input_open: bool,
    rng: StdRng,
}

impl<W: Write> RenderLoop<W> {
    pub fn new(
        state: AnimationState,
        renderer: LineRenderer<W>,
        commands: UnboundedReceiver<Command>,
        rng: StdRng,
    ) -> Self {
        Self {
            state,
            renderer,
            commands,
            input_open: true,
            rng,
        }
    }

    pub fn into_parts(self) -> (AnimationState, LineRenderer<W>) {
        (self.state, self.renderer)
    }

    /// Run until quit or until `shutdown` completes, then print the final
    /// statistics banner.
    pub async fn run<F>(&mut self, shutdown: F) -> Result<StopReason>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut reason = StopReason::Quit;

        info!(
            speed = self.state.speed(),
            range = self.state.travel_range(),
            pattern = self.state.pattern().name(),
            "render loop started"
        );

        'frames: while self.state.running() {
            self.drain_pending()?;
            if !self.state.running() {
                break;
            }

            self.render_frame()?;

            let deadline = Instant::now() + self.state.frame_delay();
            loop {
                let wake = tokio::select! {
                    _ = sleep_until(deadline) => Wake::Deadline,
                    cmd = self.commands.recv(), if self.input_open => Wake::Command(cmd),
                    _ = &mut shutdown => Wake::Interrupt,
                };

                match wake {
                    Wake::Deadline => break,
                    Wake::Command(Some(command)) => {
                        self.apply(command)?;
                        if !self.state.running() {
                            break 'frames;
                        }
                    }
                    Wake::Command(None) => {
                        debug!("command channel closed, continuing render-only");
                        self.input_open = false;
                    }
                    Wake::Interrupt => {
                        info!("interrupt received");
                        self.state.stop();
                        reason = StopReason::Interrupted;
                        break 'frames;
                    }
                }
            }

            self.state.update_position();
        }

        let stats = self.state.stats();
        info!(
            frames = self.state.frame(),
            bounces = stats.bounces,
            reason = ?reason,
            "render loop stopped"
        );
        self.renderer.write_line("")?;
        self.renderer.write_line(&final_banner(&stats))?;
        Ok(reason)
    }

    fn render_frame(&mut self) -> Result<()> {
        let glyphs = self.state.current_pattern(&mut self.rng);
        let line = compose_frame(&self.state, &glyphs, std::time::Instant::now());
        self.renderer.write_line(&line)
    }

    /// Apply commands that arrived while the loop was not waiting.
    fn drain_pending(&mut self) -> Result<()> {
        while self.input_open && self.state.running() {
            match self.commands.try_recv() {
                Ok(command) => self.apply(command)?,
                Err(tokio::sync::mpsc::error::TryRecvError::Empty) => break,
                Err(tokio::sync::mpsc::error::TryRecvError::Disconnected) => {
                    self.input_open = false;
                }
            }
        }
        Ok(())
    }

    fn apply(&mut self, command: Command) -> Result<()> {
        debug!(command = command.as_str(), "apply command");
        if let Some(notice) = self.state.apply_command(command, &mut self.rng) {
            self.renderer.write_notice(&format_notice(&notice))?;
        }
        Ok(())
    }
}
