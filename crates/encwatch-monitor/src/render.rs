//! Terminal rendering of the job table.
//!
//! In-place mode erases exactly the lines drawn by the previous frame before
//! drawing the next one, so jobs that disappear leave no stale rows behind.
//! Plain mode appends every frame and never emits control sequences.

use std::io::{IsTerminal, Write};

use encwatch_models::StatusRecord;

/// Move the cursor up one line.
pub const CURSOR_UP: &str = "\x1b[1A";

/// Erase the entire current line.
pub const ERASE_LINE: &str = "\x1b[2K";

/// Column width of the job label.
pub const LABEL_WIDTH: usize = 30;

/// How frames are written to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Redraw over the previous frame with cursor control
    InPlace,
    /// Append each frame as new lines
    Plain,
}

impl DisplayMode {
    /// Pick the mode for stdout: plain when forced or when stdout is not a terminal.
    pub fn detect(force_plain: bool) -> Self {
        if force_plain || !std::io::stdout().is_terminal() {
            Self::Plain
        } else {
            Self::InPlace
        }
    }
}

/// Format one table row.
pub fn format_line(record: &StatusRecord) -> String {
    let label: String = record.label().chars().take(LABEL_WIDTH).collect();
    format!(
        "{:<width$} {:>6.2}%  {}s",
        label,
        record.status.percent,
        record.status.current_seconds,
        width = LABEL_WIDTH
    )
}

/// Renderer state carried between frames.
#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    mode: DisplayMode,
    previous_lines: usize,
}

impl TerminalRenderer {
    /// Create a renderer that has drawn nothing yet.
    pub fn new(mode: DisplayMode) -> Self {
        Self {
            mode,
            previous_lines: 0,
        }
    }

    /// Rendering mode.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Number of lines drawn by the last frame.
    pub fn previous_lines(&self) -> usize {
        self.previous_lines
    }

    /// Draw `frame`, replacing the previous one in in-place mode.
    ///
    /// The whole frame is assembled first and written in one call.
    pub fn render<W: Write + ?Sized>(
        &mut self,
        out: &mut W,
        frame: &[StatusRecord],
    ) -> std::io::Result<()> {
        let mut buf = String::new();

        if self.mode == DisplayMode::InPlace {
            for _ in 0..self.previous_lines {
                buf.push_str(CURSOR_UP);
                buf.push_str(ERASE_LINE);
            }
        }

        for record in frame {
            buf.push_str(&format_line(record));
            buf.push('\n');
        }

        out.write_all(buf.as_bytes())?;
        out.flush()?;

        self.previous_lines = frame.len();
        Ok(())
    }
}
