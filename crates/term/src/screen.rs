//! Screens as rows of styled text.
//!
//! A word grid changes a handful of rows per keystroke, so frames are kept
//! as lines of [`Span`]s rather than individual cells. Styles are crossterm's
//! own [`ContentStyle`].

use crossterm::style::{ContentStyle, StyledContent};

/// Text drawn in one style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: ContentStyle,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, ContentStyle::new())
    }

    pub fn styled(text: impl Into<String>, style: ContentStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Terminal columns taken, one per char
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }

    pub fn content(&self) -> StyledContent<&str> {
        self.style.apply(self.text.as_str())
    }
}

/// One terminal row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new().with(Span::plain(text))
    }

    pub fn with(mut self, span: Span) -> Self {
        self.push(span);
        self
    }

    pub fn push(&mut self, span: Span) {
        if !span.text.is_empty() {
            self.spans.push(span);
        }
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// Pad with blanks up to `width` columns
    pub fn pad_to(&mut self, width: usize) {
        let missing = width.saturating_sub(self.width());
        if missing > 0 {
            self.push(Span::plain(" ".repeat(missing)));
        }
    }

    pub fn append(&mut self, other: Line) {
        self.spans.extend(other.spans);
    }

    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Span covering column `col`
    pub fn span_at(&self, col: usize) -> Option<&Span> {
        let mut start = 0;
        for span in &self.spans {
            let end = start + span.width();
            if col < end {
                return Some(span);
            }
            start = end;
        }
        None
    }
}

/// A full frame, top row first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    lines: Vec<Line>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<Line> {
        self.lines
    }

    /// Row `y` as plain text, trailing blanks trimmed
    pub fn row_text(&self, y: usize) -> String {
        self.lines
            .get(y)
            .map(|l| l.text().trim_end().to_string())
            .unwrap_or_default()
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.text().contains(needle))
    }

    /// Drop rows past `height`
    pub fn truncate(&mut self, height: usize) {
        self.lines.truncate(height);
    }
}
