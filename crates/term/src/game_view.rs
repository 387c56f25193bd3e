//! GameView: lays a `GameSession` out as screen rows.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crossterm::style::{Color, ContentStyle, Stylize};

use lexplosion_core::GameSession;
use lexplosion_engine::{format_time, GameEvent};
use lexplosion_leaderboard::render::EMPTY_HINT;
use lexplosion_leaderboard::{format_date, LeaderboardEntry, EMPTY_MESSAGE};

use crate::screen::{Line, Screen, Span};
use crate::types::Coord;

const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };
const LETTER: Color = Color::Rgb { r: 235, g: 235, b: 235 };
const EMPTY: Color = Color::Rgb { r: 90, g: 90, b: 100 };
const TILE_BG: Color = Color::Rgb { r: 40, g: 40, b: 55 };
const SELECTED_BG: Color = Color::Rgb { r: 230, g: 140, b: 40 };
const CURSOR_FG: Color = Color::Rgb { r: 120, g: 200, b: 255 };
const WARN: Color = Color::Rgb { r: 230, g: 70, b: 70 };
const GOLD: Color = Color::Rgb { r: 240, g: 200, b: 60 };
const SILVER: Color = Color::Rgb { r: 200, g: 200, b: 210 };
const BRONZE: Color = Color::Rgb { r: 205, g: 127, b: 50 };

/// Key help shown under the board
pub const HELP: &str = "arrows move  space pick  enter submit  esc clear  n new  p name  q quit";

/// Columns between the board and the high-score panel
const PANEL_GAP: usize = 3;

/// Narrowest panel worth drawing
const PANEL_MIN_WIDTH: usize = 24;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Everything one frame shows
#[derive(Debug, Clone, Copy)]
pub struct ViewState<'a> {
    pub session: &'a GameSession,
    pub cursor: Coord,
    pub message: Option<&'a str>,
    pub leaderboard: &'a [LeaderboardEntry],
    pub share_url: Option<&'a str>,
    /// Name being typed, when the name prompt is open
    pub name_input: Option<&'a str>,
}

fn fg(color: Color) -> ContentStyle {
    ContentStyle::new().with(color)
}

/// Terminal layout for the letter grid, status line, and leaderboard.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Rows for one frame, clipped to `viewport`
    pub fn render(&self, state: &ViewState<'_>, viewport: Viewport) -> Screen {
        let session = state.session;
        let mut left = vec![
            Line::new().with(Span::styled(" LEXPLOSION", fg(GOLD).bold())),
            status_line(session),
            Line::new(),
        ];
        let board_top = left.len();
        left.extend(board_lines(state));
        left.push(Line::new());

        if let Some(reason) = session.game_over_reason() {
            left.push(
                Line::new()
                    .with(Span::styled(" GAME OVER", fg(WARN).bold()))
                    .with(Span::plain(format!(
                        " ({}) final score {}",
                        reason.as_str(),
                        session.score()
                    ))),
            );
            if let Some(url) = state.share_url {
                left.push(Line::new().with(Span::styled(
                    format!(" share: {}", url),
                    ContentStyle::new().dim(),
                )));
            }
        }
        if let Some(name) = state.name_input {
            left.push(
                Line::new()
                    .with(Span::styled(" Enter your name: ", ContentStyle::new().bold()))
                    .with(Span::styled(format!("{}_", name), fg(CURSOR_FG))),
            );
        } else if let Some(message) = state.message {
            for text in message.lines() {
                left.push(Line::plain(format!(" {}", text)));
            }
        }
        left.push(Line::new());
        left.push(Line::new().with(Span::styled(format!(" {}", HELP), ContentStyle::new().dim())));

        let board_width = left
            .iter()
            .skip(board_top)
            .take(session.grid().rows() + 2)
            .map(Line::width)
            .max()
            .unwrap_or(0);
        let panel_x = board_width + PANEL_GAP;
        if usize::from(viewport.width) >= panel_x + PANEL_MIN_WIDTH {
            let name = session.player_name().trim();
            let player = (!name.is_empty()).then_some(name);
            let panel = leaderboard_lines(state.leaderboard, player);
            for (i, line) in panel.into_iter().enumerate() {
                let row = board_top + i;
                if row >= left.len() {
                    left.resize(row + 1, Line::new());
                }
                left[row].pad_to(panel_x);
                left[row].append(line);
            }
        }

        let mut screen = Screen::new();
        for line in left {
            screen.push(line);
        }
        screen.truncate(usize::from(viewport.height));
        screen
    }
}

fn status_line(session: &GameSession) -> Line {
    let label = ContentStyle::new().bold();
    let time_style = if session.is_low_time() {
        fg(WARN).bold()
    } else {
        ContentStyle::new()
    };
    let word = session.selection().word();
    let shown = if word.is_empty() { "-" } else { word };
    Line::new()
        .with(Span::styled(" SCORE ", label))
        .with(Span::plain(session.score().to_string()))
        .with(Span::styled("   TIME ", label))
        .with(Span::styled(format_time(session.time_left()), time_style))
        .with(Span::styled("   WORD ", label))
        .with(Span::styled(shown, fg(SELECTED_BG).bold()))
}

/// Bordered grid; each tile is three columns, bracketed under the cursor
fn board_lines(state: &ViewState<'_>) -> Vec<Line> {
    let session = state.session;
    let grid = session.grid();
    let border = fg(SILVER);
    let bar = "─".repeat(grid.cols() * 3);

    let mut lines = vec![Line::plain(" ").with(Span::styled(format!("┌{}┐", bar), border))];
    for row in 0..grid.rows() {
        let mut line = Line::plain(" ").with(Span::styled("│", border));
        for col in 0..grid.cols() {
            let coord = Coord::new(row, col);
            let letter = grid.letter(coord);
            let style = match (letter, session.selection().contains(coord)) {
                (None, _) => fg(EMPTY).on(TILE_BG).dim(),
                (Some(_), true) => fg(BLACK).on(SELECTED_BG).bold(),
                (Some(_), false) => fg(LETTER).on(TILE_BG).bold(),
            };
            let (open, close) = if coord == state.cursor && !session.game_over() {
                ("[", "]")
            } else {
                (" ", " ")
            };
            let bracket = ContentStyle {
                foreground_color: Some(CURSOR_FG),
                ..style
            };
            line.push(Span::styled(open, bracket));
            line.push(Span::styled(letter.unwrap_or('·').to_string(), style));
            line.push(Span::styled(close, bracket));
        }
        line.push(Span::styled("│", border));
        lines.push(line);
    }
    lines.push(Line::plain(" ").with(Span::styled(format!("└{}┘", bar), border)));
    lines
}

fn rank_style(position: usize) -> ContentStyle {
    match position {
        0 => fg(GOLD).bold(),
        1 => fg(SILVER).bold(),
        2 => fg(BRONZE).bold(),
        _ => ContentStyle::new(),
    }
}

/// Ranking panel; `player` rows are marked when a name is set
fn leaderboard_lines(entries: &[LeaderboardEntry], player: Option<&str>) -> Vec<Line> {
    let mut lines = vec![
        Line::new().with(Span::styled("HIGH SCORES", ContentStyle::new().bold())),
        Line::new(),
    ];
    if entries.is_empty() {
        lines.push(Line::plain(EMPTY_MESSAGE));
        lines.push(Line::new().with(Span::styled(EMPTY_HINT, ContentStyle::new().dim())));
        return lines;
    }
    for (i, entry) in entries.iter().enumerate() {
        let mut line = Line::new()
            .with(Span::styled(format!("{:>2}. ", i + 1), rank_style(i)))
            .with(Span::plain(format!(
                "{:<12} {:>5}  {}",
                entry.name,
                entry.score,
                format_date(entry.seed)
            )));
        if player == Some(entry.name.as_str()) {
            line.push(Span::styled(" (you)", fg(CURSOR_FG)));
        }
        lines.push(line);
    }
    lines
}

/// One-line description of an event for the message area
pub fn describe(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::NewGame { seed, .. } => Some(format!("New board (seed {})", seed)),
        GameEvent::Tick { .. } => None,
        GameEvent::WordAccepted {
            word,
            points,
            clear_bonus,
            ..
        } if *clear_bonus > 0 => Some(format!(
            "{} +{} and +{} for clearing the board!",
            word, points, clear_bonus
        )),
        GameEvent::WordAccepted { word, points, .. } => Some(format!("{} +{}", word, points)),
        GameEvent::WordRejected { word } => Some(format!("{} is not a word", word)),
        GameEvent::SubmissionIgnored { .. } => None,
        GameEvent::GameOver { score, .. } => Some(format!("Final score: {}", score)),
    }
}
