//! Hand scoring: candidate melds, the optimal-meld search, knock legality,
//! lay-offs, and knock settlement.
//!
//! Every entry point is a pure function of its input hands. The free
//! functions use [`Scorer::new`] (standard [`Rules`], tracing events);
//! build a [`Scorer`] directly to change the rules or inject an observer.

mod candidates;
mod deadwood;
mod knock;
mod layoff;
mod search;
mod settlement;

pub use candidates::candidate_melds;
pub use deadwood::{optimal_deadwood, optimal_melds, DeadwoodReport};
pub use knock::{can_knock, can_knock_parallel, is_knockable, knock_discards};
pub use layoff::{find_layoffs, LayOff};
pub use search::{best_combination, Combinable, Combination};
pub use settlement::{evaluate_knock, DefenderPlay, KnockKind, KnockOutcome, Winner};

use crate::cards::Card;
use crate::hand::HandError;
use crate::observer::{ScoringObserver, TracingObserver};
use crate::rules::Rules;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoringError {
    #[error("expected a hand of {expected} cards, got {actual}")]
    HandSize { expected: usize, actual: usize },
    #[error("hands share a card: {0}")]
    OverlappingHands(Card),
    #[error("deadwood {deadwood} is above the knock limit of {limit}")]
    KnockNotAllowed { deadwood: u32, limit: u32 },
    #[error("invalid rules: {0}")]
    InvalidRules(String),
    #[error("invalid hand: {0}")]
    Hand(#[from] HandError),
}

/// Scoring entry points bound to a rule set and an observer.
///
/// ```
/// use gin_rummy::hand::Hand;
/// use gin_rummy::observer::NoopObserver;
/// use gin_rummy::rules::Rules;
/// use gin_rummy::scoring::Scorer;
///
/// let scorer = Scorer::with_rules(Rules::standard().with_knock_limit(7))
///     .unwrap()
///     .with_observer(NoopObserver);
/// let hand: Hand = "Ac Ad As 4c 5c 6c 7c 8c 9c Th 4h".parse().unwrap();
/// assert!(scorer.can_knock(&hand).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scorer<O = TracingObserver> {
    rules: Rules,
    observer: O,
}

impl Scorer<TracingObserver> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A scorer for custom rules; rejects rules that cannot be played.
    pub fn with_rules(rules: Rules) -> Result<Self, ScoringError> {
        rules.validate().map_err(ScoringError::InvalidRules)?;
        Ok(Self { rules, observer: TracingObserver })
    }
}

impl<O: ScoringObserver> Scorer<O> {
    /// Swap the observer, keeping the rules.
    pub fn with_observer<P: ScoringObserver>(self, observer: P) -> Scorer<P> {
        Scorer { rules: self.rules, observer }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }
}

pub(crate) fn expect_size(actual: usize, expected: usize) -> Result<(), ScoringError> {
    if actual != expected {
        return Err(ScoringError::HandSize { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoopObserver;

    #[test]
    fn with_rules_validates() {
        let err = Scorer::with_rules(Rules::standard().with_knock_limit(12)).unwrap_err();
        assert!(matches!(err, ScoringError::InvalidRules(_)));
        let ok = Scorer::with_rules(Rules::standard().with_gin_bonus(20)).unwrap();
        assert_eq!(ok.rules().gin_bonus, 20);
    }

    #[test]
    fn with_observer_keeps_the_rules() {
        let rules = Rules::standard().with_knock_limit(5);
        let scorer = Scorer::with_rules(rules).unwrap().with_observer(NoopObserver);
        assert_eq!(scorer.rules(), &rules);
        let _: &NoopObserver = scorer.observer();
    }

    #[test]
    fn expect_size_reports_both_counts() {
        assert_eq!(expect_size(10, 11), Err(ScoringError::HandSize { expected: 11, actual: 10 }));
        assert!(expect_size(11, 11).is_ok());
    }
}
