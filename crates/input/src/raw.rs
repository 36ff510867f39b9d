//! Raw keyboard sources.
//!
//! A source must support exactly three operations: switch the device into raw
//! (unbuffered, unechoed) mode, poll for one pending key without blocking past
//! a timeout, and restore the previous mode.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use crossterm::terminal;

use crate::error::InputError;

pub trait RawInput: Send {
    fn enable(&mut self) -> Result<(), InputError>;

    /// Wait at most `timeout` for a key press.
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>, InputError>;

    fn restore(&mut self) -> Result<(), InputError>;
}

/// Terminal keyboard through crossterm raw mode.
#[derive(Debug, Default)]
pub struct CrosstermInput {
    enabled: bool,
}

impl CrosstermInput {
    pub fn new() -> Self {
        Self { enabled: false }
    }
}

impl RawInput for CrosstermInput {
    fn enable(&mut self) -> Result<(), InputError> {
        if self.enabled {
            return Ok(());
        }
        terminal::enable_raw_mode().map_err(InputError::CaptureUnavailable)?;
        self.enabled = true;
        Ok(())
    }

    fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>, InputError> {
        if !event::poll(timeout).map_err(InputError::Poll)? {
            return Ok(None);
        }
        match event::read().map_err(InputError::Poll)? {
            Event::Key(key) => Ok(Some(key)),
            _ => Ok(None),
        }
    }

    fn restore(&mut self) -> Result<(), InputError> {
        if !self.enabled {
            return Ok(());
        }
        self.enabled = false;
        terminal::disable_raw_mode().map_err(InputError::Restore)
    }
}

impl Drop for CrosstermInput {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Source that never has a key available.
///
/// Used when raw capture cannot be acquired, so the animation keeps rendering.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullInput;

impl RawInput for NullInput {
    fn enable(&mut self) -> Result<(), InputError> {
        Ok(())
    }

    fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>, InputError> {
        std::thread::sleep(timeout);
        Ok(None)
    }

    fn restore(&mut self) -> Result<(), InputError> {
        Ok(())
    }
}

/// Source replaying a fixed list of key presses, one per poll.
///
/// Once drained it behaves like [`NullInput`], or fails the next poll when
/// built with [`ScriptedInput::failing_when_drained`]. Clones share one
/// restore counter, so a test can keep a clone and inspect it after the
/// original has been moved into a listener.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    keys: VecDeque<KeyEvent>,
    fail_enable: bool,
    fail_when_drained: bool,
    restores: Arc<AtomicUsize>,
}

impl ScriptedInput {
    pub fn new(keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Make `enable` fail as if no terminal were attached.
    pub fn unavailable(mut self) -> Self {
        self.fail_enable = true;
        self
    }

    /// Make the first poll after the script runs out return an error.
    pub fn failing_when_drained(mut self) -> Self {
        self.fail_when_drained = true;
        self
    }

    /// Number of `restore` calls seen by this source and its clones.
    pub fn restore_count(&self) -> usize {
        self.restores.load(Ordering::SeqCst)
    }
}

impl RawInput for ScriptedInput {
    fn enable(&mut self) -> Result<(), InputError> {
        if self.fail_enable {
            return Err(InputError::CaptureUnavailable(std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                "no terminal attached",
            )));
        }
        Ok(())
    }

    fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>, InputError> {
        match self.keys.pop_front() {
            Some(key) => Ok(Some(key)),
            None if self.fail_when_drained => Err(InputError::Poll(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "input device went away",
            ))),
            None => {
                std::thread::sleep(timeout);
                Ok(None)
            }
        }
    }

    fn restore(&mut self) -> Result<(), InputError> {
        self.restores.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Leave raw mode without going through a source, for panic and signal paths.
pub fn restore_terminal_best_effort() {
    if terminal::is_raw_mode_enabled().unwrap_or(false) {
        let _ = terminal::disable_raw_mode();
    }
}
