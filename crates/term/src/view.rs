//! Pure text composition for frames, notices and banners.

use std::time::Instant;

use crate::core::{AnimationState, Notice, Stats};

/// Controls reference printed by the help command.
pub const HELP_TEXT: &str = "\
+----------------------------------------------+
|               KEYBOARD CONTROLS              |
+----------------------------------------------+
|  Up / W     faster        Down / S  slower   |
|  Right / D  next pattern  Left / A  previous |
|  R          random pattern                   |
|  + / =      wider range   - / _     narrower |
|  SPACE      pause/resume  I         stats    |
|  H / ?      this help     Q         quit     |
+----------------------------------------------+";

/// Compose one frame: `position` blank columns, the glyphs, then the stats
/// suffix (as of `now`) when enabled.
pub fn compose_frame(state: &AnimationState, glyphs: &str, now: Instant) -> String {
    let indent = state.position() as usize;
    let mut line = String::with_capacity(indent + glyphs.len() + 96);
    line.extend(std::iter::repeat(' ').take(indent));
    line.push_str(glyphs);
    if state.show_stats() {
        line.push_str("  [");
        line.push_str(&state.stats_at(now).to_string());
        line.push(']');
    }
    line
}

/// Render a notice as its bracketed one-line form.
///
/// [`Notice::Help`] expands to [`HELP_TEXT`].
pub fn format_notice(notice: &Notice) -> String {
    match notice {
        Notice::PatternChanged(kind) => format!("[Pattern Changed: {}]", kind.name()),
        Notice::RandomPattern(kind) => format!("[Random Pattern: {}]", kind.name()),
        Notice::Speed(speed) => format!("[Speed: {speed:.2}s]"),
        Notice::Range(range) => format!("[Range: {range}]"),
        Notice::Paused => "[PAUSED]".to_string(),
        Notice::Resumed => "[RESUMED]".to_string(),
        Notice::Help => HELP_TEXT.to_string(),
    }
}

/// Closing banner printed once the loop has stopped.
pub fn final_banner(stats: &Stats) -> String {
    let body = format!("  Final Statistics: {stats}  ");
    let width = body.chars().count();
    let rule: String = std::iter::repeat('═').take(width).collect();
    format!("╔{rule}╗\n║{body}║\n╚{rule}╝\nThank you for using Pattern Animator!")
}
