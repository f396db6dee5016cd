//! Observability hooks for the scoring engine.
//!
//! Scoring results never depend on the observer; it only sees intermediate
//! values. [`TracingObserver`] forwards them as `tracing` events and costs
//! nothing when no subscriber is installed.

use crate::cards::Card;
use crate::hand::Hand;
use crate::meld::Meld;
use crate::scoring::{DeadwoodReport, KnockOutcome};
use tracing::{event, Level};

const TARGET: &str = "gin_rummy::scoring";

/// Callbacks fired while a hand is scored. Every method defaults to a no-op.
pub trait ScoringObserver {
    /// All candidate melds generated for `hand`.
    fn on_candidates(&self, _hand: &Hand, _candidates: &[Meld]) {}

    /// The optimal arrangement found for `hand`.
    fn on_best(&self, _hand: &Hand, _report: &DeadwoodReport) {}

    /// One discard tried by the knock check and the deadwood it leaves.
    fn on_discard_checked(&self, _discard: Card, _deadwood: u32) {}

    /// A settled knock.
    fn on_knock_settled(&self, _outcome: &KnockOutcome) {}
}

impl<T: ScoringObserver + ?Sized> ScoringObserver for &T {
    fn on_candidates(&self, hand: &Hand, candidates: &[Meld]) {
        (**self).on_candidates(hand, candidates)
    }

    fn on_best(&self, hand: &Hand, report: &DeadwoodReport) {
        (**self).on_best(hand, report)
    }

    fn on_discard_checked(&self, discard: Card, deadwood: u32) {
        (**self).on_discard_checked(discard, deadwood)
    }

    fn on_knock_settled(&self, outcome: &KnockOutcome) {
        (**self).on_knock_settled(outcome)
    }
}

/// Ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ScoringObserver for NoopObserver {}

/// Emits `tracing` events under the `gin_rummy::scoring` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ScoringObserver for TracingObserver {
    fn on_candidates(&self, hand: &Hand, candidates: &[Meld]) {
        if !tracing::enabled!(target: TARGET, Level::TRACE) {
            return;
        }
        let melds: Vec<String> = candidates.iter().map(|m| m.to_string()).collect();
        event!(
            target: TARGET,
            Level::TRACE,
            hand = %hand,
            count = candidates.len(),
            melds = ?melds,
            "candidate melds"
        );
    }

    fn on_best(&self, hand: &Hand, report: &DeadwoodReport) {
        if !tracing::enabled!(target: TARGET, Level::DEBUG) {
            return;
        }
        let melds: Vec<String> = report.melds.iter().map(|m| m.to_string()).collect();
        let unmatched: Vec<String> = report.unmatched.iter().map(|c| c.to_string()).collect();
        event!(
            target: TARGET,
            Level::DEBUG,
            hand = %hand,
            deadwood = report.deadwood,
            melds = ?melds,
            unmatched = ?unmatched,
            "optimal melds"
        );
    }

    fn on_discard_checked(&self, discard: Card, deadwood: u32) {
        event!(target: TARGET, Level::TRACE, discard = %discard, deadwood, "discard checked");
    }

    fn on_knock_settled(&self, outcome: &KnockOutcome) {
        event!(
            target: TARGET,
            Level::DEBUG,
            kind = ?outcome.kind,
            winner = ?outcome.winner,
            knocker_deadwood = outcome.knocker_deadwood,
            opponent_deadwood = outcome.opponent_deadwood,
            score = outcome.score,
            layoffs = outcome.layoffs.len(),
            "knock settled"
        );
    }
}
