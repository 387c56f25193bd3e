//! Scoring module - points for accepted words
//!
//! Every letter is worth one point. Under the bonus rule, each letter past the
//! fourth is worth two more, so long words pay off quickly:
//!
//! | Length | Length only | With bonus |
//! |--------|-------------|------------|
//! | 3 | 3 | 3 |
//! | 4 | 4 | 4 |
//! | 5 | 5 | 7 |
//! | 6 | 6 | 10 |
//! | 7 | 7 | 13 |

use crate::types::{ScoringRule, BONUS_PER_EXTRA_LETTER, BONUS_THRESHOLD_LEN, CLEAR_BONUS};

/// Score breakdown for one word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// One point per letter
    pub base: u32,
    /// Long-word bonus (zero under `ScoringRule::LengthOnly`)
    pub bonus: u32,
    pub total: u32,
}

/// Bonus points for a word of `len` letters
pub fn calculate_length_bonus(len: usize) -> u32 {
    if len <= BONUS_THRESHOLD_LEN {
        return 0;
    }
    ((len - BONUS_THRESHOLD_LEN) as u32).saturating_mul(BONUS_PER_EXTRA_LETTER)
}

/// Score a word under `rule`
pub fn calculate_score(word: &str, rule: ScoringRule) -> ScoreResult {
    let len = word.chars().count();
    let base = len as u32;
    let bonus = match rule {
        ScoringRule::LengthOnly => 0,
        ScoringRule::LengthWithBonus => calculate_length_bonus(len),
    };
    ScoreResult {
        base,
        bonus,
        total: base.saturating_add(bonus),
    }
}

/// Total points for a word under `rule`
pub fn score(word: &str, rule: ScoringRule) -> u32 {
    calculate_score(word, rule).total
}

/// Bonus for emptying the grid
pub fn clear_bonus() -> u32 {
    CLEAR_BONUS
}
