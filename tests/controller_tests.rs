//! Controller behaviour with a slow dictionary and a running countdown

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use lexplosion::core::{GameOverReason, GameSession, SessionRules, SubmissionOutcome};
use lexplosion::dictionary::{
    DictionaryError, DictionaryLookup, LookupMatch, MemoryStore, WordCache, WordValidator,
};
use lexplosion::engine::{GameController, GameEvent};
use lexplosion::leaderboard::{LeaderboardClient, LeaderboardEntry, MemoryLeaderboard};
use lexplosion::types::{Coord, ValidityPolicy};

/// Accepts every word after a delay
struct SlowDictionary {
    delay: Duration,
}

impl DictionaryLookup for SlowDictionary {
    fn lookup(
        &self,
        word: &str,
    ) -> impl Future<Output = Result<Vec<LookupMatch>, DictionaryError>> + Send {
        let delay = self.delay;
        let found = vec![LookupMatch::new(word.to_lowercase(), vec!["n\tword".into()])];
        async move {
            tokio::time::sleep(delay).await;
            Ok(found)
        }
    }
}

type Controller = GameController<SlowDictionary, MemoryLeaderboard>;

fn controller(
    duration_secs: u32,
    delay: Duration,
) -> (Arc<Controller>, mpsc::UnboundedReceiver<GameEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let rules = SessionRules {
        duration_secs,
        ..SessionRules::default()
    };
    let controller = GameController::new(
        GameSession::new(42, rules),
        WordValidator::new(
            SlowDictionary { delay },
            WordCache::new(Arc::new(MemoryStore::new())),
            ValidityPolicy::Strict,
        ),
        LeaderboardClient::new(MemoryLeaderboard::default()),
        None,
        tx,
    );
    (Arc::new(controller), rx)
}

async fn pick_gal(c: &Controller) {
    for coord in [Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 1)] {
        c.select(coord).await.unwrap();
    }
}

#[tokio::test(start_paused = true)]
async fn test_verdict_after_new_game_is_ignored() {
    let (c, mut rx) = controller(120, Duration::from_secs(2));
    c.start().await;
    pick_gal(&c).await;

    let submitting = {
        let c = Arc::clone(&c);
        tokio::spawn(async move { c.submit().await })
    };
    tokio::time::sleep(Duration::from_millis(500)).await;
    c.new_game(42).await;

    let outcome = submitting.await.unwrap().unwrap();
    assert_eq!(outcome, SubmissionOutcome::Stale { word: "GAL".to_string() });

    let game = c.snapshot().await;
    assert_eq!(game.score(), 0);
    assert_eq!(game.episode(), 1);
    assert_eq!(game.grid().to_rows()[0], "UGAAW");

    let mut saw_ignored = false;
    while let Ok(event) = rx.try_recv() {
        saw_ignored |= matches!(event, GameEvent::SubmissionIgnored { .. });
    }
    assert!(saw_ignored);
}

#[tokio::test(start_paused = true)]
async fn test_verdict_after_time_up_is_ignored() {
    let (c, _rx) = controller(1, Duration::from_secs(3));
    c.start().await;
    pick_gal(&c).await;

    let outcome = c.submit().await.unwrap();
    assert!(matches!(outcome, SubmissionOutcome::Stale { .. }));
    let game = c.snapshot().await;
    assert_eq!(game.game_over_reason(), Some(GameOverReason::TimeUp));
    assert_eq!(game.score(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_time_up_submits_score_once() {
    let (c, mut rx) = controller(3, Duration::from_millis(10));
    c.start().await;
    pick_gal(&c).await;
    assert!(matches!(c.submit().await, Ok(SubmissionOutcome::Accepted { .. })));

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(!c.is_counting_down());

    let game_overs = std::iter::from_fn(|| rx.try_recv().ok())
        .filter(|e| matches!(e, GameEvent::GameOver { .. }))
        .count();
    assert_eq!(game_overs, 1);
    assert_eq!(c.high_scores().await, vec![LeaderboardEntry::new("Anonymous", 3, 42)]);
}
