//! Terminal Lexplosion runner (default binary).
//!
//! Usage:
//!
//! ```text
//! lexplosion [?seed=<n>]   play (a fresh board, or the shared one)
//! lexplosion scores        print the leaderboard and exit
//! ```
//!
//! Logs go to `<tmp>/lexplosion.log` so they do not tear the screen.

use std::fs::File;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use tokio::sync::mpsc;
use tokio::time::Instant;

use lexplosion::core::{GameSession, SelectError, SubmitError};
use lexplosion::engine::{
    build_dictionary, build_leaderboard, build_local_scores, build_validator, now_millis,
    open_storage, seed_or_now, share_message, share_url, AnyDictionary, GameConfig,
    GameController, GameEvent,
};
use lexplosion::input::{handle_key_event, Command, Cursor, NameEntry, NameInput};
use lexplosion::leaderboard::{render_lines, FileLeaderboard, LeaderboardEntry};
use lexplosion::term::{describe, GameView, TerminalRenderer, ViewState, Viewport};

type Controller = GameController<AnyDictionary, FileLeaderboard>;

const FRAME: Duration = Duration::from_millis(100);
const SCORE_REFRESH_DELAY: Duration = Duration::from_millis(500);

fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    let mut builder = env_logger::Builder::from_env(env);
    match File::create(std::env::temp_dir().join("lexplosion.log")) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    builder.init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let config = GameConfig::from_env();
    let arg = std::env::args().nth(1).unwrap_or_default();

    if arg == "scores" {
        return print_scores(&config).await;
    }

    let storage = open_storage(&config)?;
    let dictionary = build_dictionary(&config).await?;
    let validator = build_validator(&config, dictionary, Arc::clone(&storage));
    let (tx, rx) = mpsc::unbounded_channel();
    let controller = Arc::new(GameController::new(
        GameSession::new(seed_or_now(&arg), config.rules),
        validator,
        build_leaderboard(&config),
        Some(build_local_scores(storage)),
        tx,
    ));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, controller, rx, &config).await;

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

async fn print_scores(config: &GameConfig) -> Result<()> {
    let storage = open_storage(config)?;
    let local = build_local_scores(storage);
    let entries = build_leaderboard(config).list().await;
    for line in render_lines(&entries, local.player_name().as_deref()) {
        println!("{}", line);
    }
    Ok(())
}

/// Forward terminal events from a plain thread; it ends when the game does.
fn spawn_input_reader() -> mpsc::UnboundedReceiver<Event> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break;
                }
            }
            Err(e) => {
                log::error!("[Input] terminal read failed: {}", e);
                break;
            }
        }
    });
    rx
}

fn select_message(err: SelectError) -> String {
    match err {
        SelectError::NotAdjacent => "Pick a letter next to the last one".to_string(),
        other => other.to_string(),
    }
}

async fn run(
    term: &mut TerminalRenderer,
    controller: Arc<Controller>,
    mut events: mpsc::UnboundedReceiver<GameEvent>,
    config: &GameConfig,
) -> Result<()> {
    let view = GameView;
    let mut keys = spawn_input_reader();
    let mut frame = tokio::time::interval(FRAME);

    let mut cursor = Cursor::new(config.rules.rows, config.rules.cols);
    let mut message: Option<String> = None;
    let mut name_input: Option<NameInput> = None;
    let mut scores: Vec<LeaderboardEntry> = controller.high_scores().await;
    let mut refresh_at: Option<Instant> = None;

    controller.start().await;

    loop {
        tokio::select! {
            Some(ev) = keys.recv() => {
                let key = match ev {
                    Event::Key(key) => key,
                    Event::Resize(..) => {
                        term.invalidate();
                        continue;
                    }
                    _ => continue,
                };
                if let Some(input) = name_input.as_mut() {
                    match input.handle_key(key) {
                        NameEntry::Editing => {}
                        NameEntry::Done(name) => {
                            controller.set_player_name(&name).await;
                            let shown = controller.snapshot().await.display_name().to_string();
                            message = Some(format!("Playing as {}", shown));
                            name_input = None;
                        }
                        NameEntry::Cancelled => name_input = None,
                    }
                } else if let Some(command) = handle_key_event(key) {
                    match command {
                        Command::Quit => return Ok(()),
                        Command::Move(dir) => cursor.step(dir),
                        Command::Pick => {
                            if let Err(e) = controller.select(cursor.position()).await {
                                message = Some(select_message(e));
                            }
                        }
                        Command::ClearSelection => {
                            controller.reset_selection().await;
                            message = None;
                        }
                        Command::Submit => {
                            let session = controller.snapshot().await;
                            let selection = session.selection();
                            if session.game_over() {
                                message = Some("Game over, press n for a new board".to_string());
                            } else if !selection.can_submit() {
                                message = Some(SubmitError::TooShort { len: selection.len() }.to_string());
                            } else {
                                message = Some(format!("Checking {}...", selection.word()));
                                let c = Arc::clone(&controller);
                                tokio::spawn(async move {
                                    if let Err(e) = c.submit().await {
                                        log::debug!("[Input] submission refused: {}", e);
                                    }
                                });
                            }
                        }
                        Command::NewGame => {
                            controller.new_game(now_millis()).await;
                            cursor.reset();
                        }
                        Command::EditName => {
                            let current = controller.snapshot().await.player_name().to_string();
                            name_input = Some(NameInput::new(&current));
                        }
                    }
                }
            }
            Some(ev) = events.recv() => {
                if let Some(text) = describe(&ev) {
                    message = Some(text);
                }
                if let GameEvent::GameOver { score, seed, .. } = ev {
                    refresh_at = Some(Instant::now() + SCORE_REFRESH_DELAY);
                    let elapsed = controller.snapshot().await.elapsed_secs();
                    let url = share_url(&config.share_origin, seed);
                    let text = share_message(score, elapsed, &url);
                    log::info!("[Input] share text: {:?}", text);
                    message = Some(text);
                }
            }
            _ = frame.tick() => {
                if refresh_at.is_some_and(|at| Instant::now() >= at) {
                    refresh_at = None;
                    scores = controller.high_scores().await;
                }
            }
        }

        let session = controller.snapshot().await;
        let url = share_url(&config.share_origin, session.seed());
        let state = ViewState {
            session: &session,
            cursor: cursor.position(),
            message: message.as_deref(),
            leaderboard: &scores,
            share_url: session.game_over().then_some(url.as_str()),
            name_input: name_input.as_ref().map(NameInput::text),
        };
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        term.draw(view.render(&state, Viewport::new(w, h)))?;
    }
}
