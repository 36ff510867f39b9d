//! Background key listener.
//!
//! The listener owns the raw source for its whole life: raw mode is acquired in
//! [`InputListener::start`] and restored when the thread exits, whether it was
//! stopped, the command channel closed, or polling failed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

use crate::map::handle_key_event;
use crate::raw::{NullInput, RawInput};
use crate::types::{Command, INPUT_POLL_MS};

pub struct InputListener {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
    degraded: bool,
}

impl InputListener {
    /// Acquire raw mode on `input` and start forwarding commands to `commands`.
    ///
    /// If raw mode is unavailable the listener falls back to [`NullInput`] and
    /// [`InputListener::degraded`] reports `true`.
    pub fn start<I>(input: I, commands: UnboundedSender<Command>) -> Self
    where
        I: RawInput + 'static,
    {
        Self::start_with_poll(input, commands, Duration::from_millis(INPUT_POLL_MS))
    }

    pub fn start_with_poll<I>(mut input: I, commands: UnboundedSender<Command>, poll: Duration) -> Self
    where
        I: RawInput + 'static,
    {
        let (source, degraded): (Box<dyn RawInput>, bool) = match input.enable() {
            Ok(()) => (Box::new(input) as Box<dyn RawInput>, false),
            Err(e) => {
                warn!(error = %e, "keyboard capture unavailable, running render-only");
                (Box::new(NullInput) as Box<dyn RawInput>, true)
            }
        };

        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);
        let handle = thread::Builder::new()
            .name("input-listener".to_string())
            .spawn(move || listen(source, commands, stop_flag, poll))
            .ok();
        if handle.is_none() {
            warn!("failed to spawn input listener thread");
        }

        Self {
            stop,
            handle,
            degraded,
        }
    }

    pub fn degraded(&self) -> bool {
        self.degraded
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }

    /// Stop polling and wait for the thread to restore the terminal.
    ///
    /// Returns within roughly one poll interval.
    pub fn shutdown(mut self) {
        self.stop_and_join();
    }

    fn stop_and_join(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("input listener thread panicked");
            }
        }
    }
}

impl Drop for InputListener {
    fn drop(&mut self) {
        self.stop_and_join();
    }
}

/// Restores the source when the listener loop unwinds or returns.
struct RestoreGuard(Box<dyn RawInput>);

impl Drop for RestoreGuard {
    fn drop(&mut self) {
        if let Err(e) = self.0.restore() {
            warn!(error = %e, "failed to restore terminal mode");
        }
    }
}

fn listen(
    source: Box<dyn RawInput>,
    commands: UnboundedSender<Command>,
    stop: Arc<AtomicBool>,
    poll: Duration,
) {
    let mut guard = RestoreGuard(source);
    info!(poll_ms = poll.as_millis() as u64, "input listener started");

    while !stop.load(Ordering::Relaxed) {
        if commands.is_closed() {
            break;
        }

        let key = match guard.0.poll_key(poll) {
            Ok(Some(key)) => key,
            Ok(None) => continue,
            Err(e) => {
                warn!(error = %e, "keyboard poll failed, stopping input listener");
                break;
            }
        };

        let Some(command) = handle_key_event(key) else {
            continue;
        };
        debug!(command = command.as_str(), "key command");
        if commands.send(command).is_err() {
            break;
        }
        if command == Command::Quit {
            break;
        }
    }

    info!("input listener stopped");
}
