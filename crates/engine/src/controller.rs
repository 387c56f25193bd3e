//! Game controller - one live session plus its collaborators
//!
//! The controller owns the session behind a `tokio::sync::Mutex`, the word
//! validator, the leaderboard client, and the countdown task. Front ends call
//! its methods and read [`GameEvent`]s from the channel handed to
//! [`GameController::new`].
//!
//! Word validation runs without holding the session lock. The verdict is
//! applied afterwards and is dropped if the session moved on in the meantime
//! (new game, time up, or the letters were consumed by another word).

use std::ops::ControlFlow;
use std::sync::{Arc, Mutex as StdMutex, MutexGuard};
use std::time::Duration;

use tokio::sync::{mpsc, Mutex};

use lexplosion_core::{
    GameOverReason, GameSession, SelectError, SubmissionOutcome, SubmitError,
};
use lexplosion_dictionary::{DictionaryLookup, WordValidator};
use lexplosion_leaderboard::{LeaderboardClient, LeaderboardEntry, LeaderboardStore, LocalHighScores};

use crate::countdown::Countdown;
use crate::types::Coord;

/// Something the front end may want to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    NewGame { seed: i64, episode: u32 },
    Tick { time_left: u32, low_time: bool },
    WordAccepted {
        word: String,
        points: u32,
        clear_bonus: u32,
        score: u32,
    },
    WordRejected { word: String },
    /// Verdict arrived after the session moved on
    SubmissionIgnored { word: String },
    GameOver {
        reason: GameOverReason,
        score: u32,
        seed: i64,
    },
}

/// Everything that reacts to a finished game
struct GameOverHooks<S> {
    leaderboard: LeaderboardClient<S>,
    local: Option<LocalHighScores>,
    events: mpsc::UnboundedSender<GameEvent>,
}

impl<S> Clone for GameOverHooks<S> {
    fn clone(&self) -> Self {
        Self {
            leaderboard: self.leaderboard.clone(),
            local: self.local.clone(),
            events: self.events.clone(),
        }
    }
}

impl<S: LeaderboardStore + 'static> GameOverHooks<S> {
    fn emit(&self, event: GameEvent) {
        // A closed receiver only means nobody is watching.
        let _ = self.events.send(event);
    }

    fn game_over(&self, reason: GameOverReason, entry: LeaderboardEntry) {
        log::info!(
            "[Engine] game over ({}): {} scored {}",
            reason.as_str(),
            entry.name,
            entry.score
        );
        self.emit(GameEvent::GameOver {
            reason,
            score: entry.score,
            seed: entry.seed,
        });
        if let Some(local) = &self.local {
            if let Err(e) = local.record(entry.clone()) {
                log::warn!("[Engine] could not save local high score: {}", e);
            }
        }
        self.leaderboard.submit_detached(entry);
    }
}

fn final_entry(session: &GameSession) -> LeaderboardEntry {
    LeaderboardEntry::new(session.display_name(), session.score(), session.seed())
}

/// Async front door to a [`GameSession`]
pub struct GameController<D, S> {
    session: Arc<Mutex<GameSession>>,
    validator: Arc<WordValidator<D>>,
    hooks: GameOverHooks<S>,
    countdown: StdMutex<Countdown>,
    tick_period: Duration,
}

impl<D, S> GameController<D, S>
where
    D: DictionaryLookup + 'static,
    S: LeaderboardStore + 'static,
{
    pub fn new(
        session: GameSession,
        validator: WordValidator<D>,
        leaderboard: LeaderboardClient<S>,
        local: Option<LocalHighScores>,
        events: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        let mut session = session;
        if let Some(name) = local.as_ref().and_then(LocalHighScores::player_name) {
            session.set_player_name(name);
        }
        Self {
            session: Arc::new(Mutex::new(session)),
            validator: Arc::new(validator),
            hooks: GameOverHooks {
                leaderboard,
                local,
                events,
            },
            countdown: StdMutex::new(Countdown::idle()),
            tick_period: Duration::from_secs(1),
        }
    }

    /// Shorten or lengthen one countdown second
    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    pub fn validator(&self) -> &WordValidator<D> {
        &self.validator
    }

    pub fn leaderboard(&self) -> &LeaderboardClient<S> {
        &self.hooks.leaderboard
    }

    pub fn local_scores(&self) -> Option<&LocalHighScores> {
        self.hooks.local.as_ref()
    }

    fn countdown(&self) -> MutexGuard<'_, Countdown> {
        self.countdown
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Start the countdown for the current board
    ///
    /// Must be called from within a tokio runtime.
    pub async fn start(&self) {
        let (seed, episode) = {
            let game = self.session.lock().await;
            (game.seed(), game.episode())
        };
        log::info!("[Engine] starting game {} (seed {})", episode, seed);
        self.hooks.emit(GameEvent::NewGame { seed, episode });
        self.spawn_countdown(episode);
    }

    /// Throw the current board away and start a fresh one for `seed`
    pub async fn new_game(&self, seed: i64) {
        self.countdown().cancel();
        self.session.lock().await.restart(seed);
        self.start().await;
    }

    fn spawn_countdown(&self, episode: u32) {
        let session = Arc::clone(&self.session);
        let hooks = self.hooks.clone();
        let countdown = Countdown::spawn(self.tick_period, move || {
            let session = Arc::clone(&session);
            let hooks = hooks.clone();
            async move {
                let mut game = session.lock().await;
                if game.episode() != episode || game.game_over() {
                    return ControlFlow::Break(());
                }
                let ended = game.tick();
                hooks.emit(GameEvent::Tick {
                    time_left: game.time_left(),
                    low_time: game.is_low_time(),
                });
                match ended {
                    Some(reason) => {
                        let entry = final_entry(&game);
                        drop(game);
                        hooks.game_over(reason, entry);
                        ControlFlow::Break(())
                    }
                    None => ControlFlow::Continue(()),
                }
            }
        });
        *self.countdown() = countdown;
    }

    /// True while the countdown task is alive
    pub fn is_counting_down(&self) -> bool {
        self.countdown().is_running()
    }

    pub async fn select(&self, coord: Coord) -> Result<(), SelectError> {
        self.session.lock().await.select(coord)
    }

    pub async fn reset_selection(&self) {
        self.session.lock().await.reset_selection();
    }

    /// Remember `name` for this and later games
    pub async fn set_player_name(&self, name: &str) {
        self.session.lock().await.set_player_name(name.trim());
        if let Some(local) = self.hooks.local.clone() {
            let owned = name.to_string();
            match tokio::task::spawn_blocking(move || local.set_player_name(&owned)).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => log::warn!("[Engine] could not save player name: {}", e),
                Err(e) => log::warn!("[Engine] player name write did not finish: {}", e),
            }
        }
    }

    /// Validate the selected word and apply the verdict
    ///
    /// Errors only for selections that cannot be submitted at all; dictionary
    /// trouble shows up as a rejected word.
    pub async fn submit(&self) -> Result<SubmissionOutcome, SubmitError> {
        let pending = self.session.lock().await.begin_submission()?;
        let valid = self
            .validator
            .validate(pending.word(), pending.cells())
            .await;

        let mut game = self.session.lock().await;
        let outcome = game.complete_submission(pending, valid);
        match &outcome {
            SubmissionOutcome::Accepted {
                word,
                points,
                clear_bonus,
                game_over,
            } => {
                log::debug!("[Engine] accepted {} for {}", word, points.total);
                self.hooks.emit(GameEvent::WordAccepted {
                    word: word.clone(),
                    points: points.total,
                    clear_bonus: *clear_bonus,
                    score: game.score(),
                });
                if let Some(reason) = *game_over {
                    let entry = final_entry(&game);
                    drop(game);
                    self.countdown().cancel();
                    self.hooks.game_over(reason, entry);
                }
            }
            SubmissionOutcome::Rejected { word } => {
                self.hooks.emit(GameEvent::WordRejected { word: word.clone() });
            }
            SubmissionOutcome::Stale { word } => {
                log::debug!("[Engine] ignoring stale verdict for {}", word);
                self.hooks
                    .emit(GameEvent::SubmissionIgnored { word: word.clone() });
            }
        }
        Ok(outcome)
    }

    /// Copy of the current session
    pub async fn snapshot(&self) -> GameSession {
        self.session.lock().await.clone()
    }

    /// Best-effort global ranking
    pub async fn high_scores(&self) -> Vec<LeaderboardEntry> {
        self.hooks.leaderboard.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexplosion_core::SessionRules;
    use lexplosion_dictionary::{MemoryStore, WordCache, WordListDictionary};
    use lexplosion_leaderboard::MemoryLeaderboard;
    use crate::types::ValidityPolicy;

    type TestController = GameController<WordListDictionary, MemoryLeaderboard>;

    fn controller(
        duration_secs: u32,
        words: &[&str],
    ) -> (TestController, mpsc::UnboundedReceiver<GameEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let rules = SessionRules {
            duration_secs,
            ..SessionRules::default()
        };
        let storage = Arc::new(MemoryStore::new());
        let controller = GameController::new(
            GameSession::new(42, rules),
            WordValidator::new(
                WordListDictionary::new(words.iter().copied()),
                WordCache::new(storage.clone()),
                ValidityPolicy::Strict,
            ),
            LeaderboardClient::new(MemoryLeaderboard::default()),
            Some(LocalHighScores::new(storage)),
            tx,
        );
        (controller, rx)
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<GameEvent>) -> Vec<GameEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    // Seed 42 top row: U G A A W; (0,1) G, (0,2) A, (1,1) L spells "GAL".
    async fn spell_gal(c: &TestController) {
        for coord in [Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 1)] {
            c.select(coord).await.unwrap();
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_countdown_reaches_game_over() {
        let (c, mut rx) = controller(3, &[]);
        c.start().await;
        tokio::time::sleep(Duration::from_millis(3500)).await;

        let game = c.snapshot().await;
        assert_eq!(game.time_left(), 0);
        assert_eq!(game.game_over_reason(), Some(GameOverReason::TimeUp));
        assert!(!c.is_counting_down());

        let events = drain(&mut rx);
        assert!(events.contains(&GameEvent::Tick { time_left: 1, low_time: true }));
        assert!(matches!(
            events.last(),
            Some(GameEvent::GameOver { reason: GameOverReason::TimeUp, score: 0, seed: 42 })
        ));

        tokio::task::yield_now().await;
        let ranking = c.high_scores().await;
        assert_eq!(ranking, vec![LeaderboardEntry::new("Anonymous", 0, 42)]);
        assert_eq!(c.local_scores().unwrap().list().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_game_replaces_countdown() {
        let (c, _rx) = controller(5, &[]);
        c.start().await;
        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(c.snapshot().await.time_left(), 3);

        c.new_game(7).await;
        tokio::time::sleep(Duration::from_millis(1500)).await;
        let game = c.snapshot().await;
        assert_eq!(game.seed(), 7);
        assert_eq!(game.episode(), 1);
        assert_eq!(game.time_left(), 4);
    }

    #[tokio::test]
    async fn test_submit_accepts_known_word() {
        let (c, mut rx) = controller(120, &["gal"]);
        spell_gal(&c).await;
        let outcome = c.submit().await.unwrap();
        assert!(matches!(outcome, SubmissionOutcome::Accepted { .. }));
        assert_eq!(c.snapshot().await.score(), 3);
        assert!(drain(&mut rx).contains(&GameEvent::WordAccepted {
            word: "GAL".to_string(),
            points: 3,
            clear_bonus: 0,
            score: 3,
        }));
    }

    #[tokio::test]
    async fn test_submit_rejects_unknown_word() {
        let (c, mut rx) = controller(120, &[]);
        spell_gal(&c).await;
        let outcome = c.submit().await.unwrap();
        assert_eq!(outcome, SubmissionOutcome::Rejected { word: "GAL".to_string() });
        assert_eq!(c.snapshot().await.score(), 0);
        assert_eq!(
            drain(&mut rx),
            vec![GameEvent::WordRejected { word: "GAL".to_string() }]
        );
    }

    #[tokio::test]
    async fn test_submit_too_short() {
        let (c, _rx) = controller(120, &[]);
        c.select(Coord::new(0, 0)).await.unwrap();
        assert_eq!(c.submit().await, Err(SubmitError::TooShort { len: 1 }));
        assert_eq!(c.snapshot().await.selection().len(), 1);
    }

    #[tokio::test]
    async fn test_player_name_persists() {
        let (c, _rx) = controller(120, &[]);
        c.set_player_name("  Ada ").await;
        assert_eq!(c.snapshot().await.display_name(), "Ada");
        assert_eq!(
            c.local_scores().unwrap().player_name(),
            Some("Ada".to_string())
        );
    }
}
