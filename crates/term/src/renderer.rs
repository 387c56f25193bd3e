//! Writes screens to the terminal.
//!
//! Rows equal to the previous frame's are skipped; a changed row is cleared
//! and printed again as a whole.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, PrintStyledContent, ResetColor, SetAttribute},
    terminal::{self, Clear, ClearType},
    QueueableCommand,
};

use crate::screen::{Line, Screen};

/// Owns the alternate screen while the game runs
pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Rows on the terminal now; `None` forces a full redraw
    shown: Option<Vec<Line>>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Undo [`enter`](Self::enter)
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Redraw everything on the next frame
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    pub fn draw(&mut self, screen: Screen) -> Result<()> {
        self.buf.clear();
        let next = screen.into_lines();
        encode_rows(self.shown.as_deref(), &next, &mut self.buf)?;
        self.flush_buf()?;
        self.shown = Some(next);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Queue the rows of `next` that differ from `prev`; returns how many
fn encode_rows(prev: Option<&[Line]>, next: &[Line], out: &mut Vec<u8>) -> Result<usize> {
    if prev.is_none() {
        out.queue(Clear(ClearType::All))?;
    }
    let rows = next.len().max(prev.map_or(0, <[Line]>::len));
    let mut redrawn = 0;
    for y in 0..rows {
        let line = next.get(y);
        if let Some(prev) = prev {
            if prev.get(y) == line {
                continue;
            }
        }
        let row = u16::try_from(y).unwrap_or(u16::MAX);
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Clear(ClearType::UntilNewLine))?;
        for span in line.map(Line::spans).unwrap_or_default() {
            out.queue(PrintStyledContent(span.content()))?;
        }
        redrawn += 1;
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(redrawn)
}
