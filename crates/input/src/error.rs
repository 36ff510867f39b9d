use std::io;

/// Errors from the raw keyboard source.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Raw mode could not be acquired; the animation runs render-only.
    #[error("raw keyboard capture unavailable: {0}")]
    CaptureUnavailable(#[source] io::Error),

    #[error("keyboard poll failed: {0}")]
    Poll(#[source] io::Error),

    #[error("failed to restore terminal mode: {0}")]
    Restore(#[source] io::Error),
}
