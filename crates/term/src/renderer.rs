//! LineRenderer: writes composed lines to an output sink.
//!
//! In raw terminal mode the driver no longer translates `\n`, so lines are
//! terminated with `\r\n` there. Multi-line text (help, banners) is split and
//! re-terminated the same way.

use std::io::Write;

use anyhow::Result;
use crossterm::{style::Print, QueueableCommand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

pub struct LineRenderer<W: Write> {
    out: W,
    ending: LineEnding,
    buf: Vec<u8>,
}

impl<W: Write> LineRenderer<W> {
    pub fn new(out: W, ending: LineEnding) -> Self {
        Self {
            out,
            ending,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    /// Write `text` followed by a line ending, then flush.
    pub fn write_line(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        encode_lines_into(text, self.ending, &mut self.buf)?;
        self.flush_buf()
    }

    /// Write an empty line then `text`, so notices stand apart from frames.
    pub fn write_notice(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print(self.ending.as_str()))?;
        encode_lines_into(text, self.ending, &mut self.buf)?;
        self.flush_buf()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode `text` line by line, each terminated with `ending`.
pub fn encode_lines_into(text: &str, ending: LineEnding, out: &mut Vec<u8>) -> Result<()> {
    for line in text.split('\n') {
        out.queue(Print(line.trim_end_matches('\r')))?;
        out.queue(Print(ending.as_str()))?;
    }
    Ok(())
}
