use super::layoff::{find_layoffs, LayOff};
use super::search::{best_combination, Combinable};
use super::{expect_size, Scorer, ScoringError};
use crate::hand::{CardMask, Hand};
use crate::meld::Meld;
use crate::observer::ScoringObserver;
use crate::rules::HAND_SIZE;

/// How a knock ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum KnockKind {
    /// Knocker had no deadwood; the opponent could not lay off.
    Gin,
    /// Knocker had the lower deadwood after lay-offs.
    Knock,
    /// Opponent finished below the knocker after lay-offs.
    Undercut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    Knocker,
    Opponent,
}

/// Something the opponent does with its cards once the knock is shown:
/// meld them among themselves or lay them off on the knocker's melds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefenderPlay {
    Meld(Meld),
    LayOff(LayOff),
}

impl Combinable for DefenderPlay {
    fn mask(&self) -> CardMask {
        match self {
            DefenderPlay::Meld(m) => m.mask(),
            DefenderPlay::LayOff(l) => l.mask(),
        }
    }

    fn points(&self) -> u32 {
        match self {
            DefenderPlay::Meld(m) => m.points(),
            DefenderPlay::LayOff(l) => l.points(),
        }
    }
}

/// Scored result of a knock.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct KnockOutcome {
    pub kind: KnockKind,
    pub winner: Winner,
    pub knocker_deadwood: u32,
    /// Opponent deadwood after its own melds and any lay-offs.
    pub opponent_deadwood: u32,
    /// Points awarded to `winner`.
    pub score: u32,
    pub knocker_melds: Vec<Meld>,
    pub opponent_melds: Vec<Meld>,
    /// Lay-offs the opponent made, targets indexing `knocker_melds`.
    pub layoffs: Vec<LayOff>,
}

/// Score a knock under standard rules. Both hands hold 10 cards.
///
/// ```
/// use gin_rummy::hand::Hand;
/// use gin_rummy::scoring::{evaluate_knock, KnockKind, Winner};
///
/// let knocker: Hand = "Ac Ad As 4c 5c 6c 7c 8c 9c 4h".parse().unwrap();
/// let opponent: Hand = "Kd Qd Jd 2h 3h 5h 7h 9h Th Ts".parse().unwrap();
/// let outcome = evaluate_knock(&knocker, &opponent).unwrap();
/// assert_eq!(outcome.kind, KnockKind::Knock);
/// assert_eq!(outcome.winner, Winner::Knocker);
/// assert_eq!(outcome.knocker_deadwood, 4);
/// ```
pub fn evaluate_knock(knocker: &Hand, opponent: &Hand) -> Result<KnockOutcome, ScoringError> {
    Scorer::new().evaluate_knock(knocker, opponent)
}

impl<O: ScoringObserver> Scorer<O> {
    /// Settle a knock.
    ///
    /// Fails if either hand is not 10 cards, if the hands share a card, or
    /// if the knocker is above the knock limit. On gin the opponent melds its
    /// own hand only. Otherwise the opponent's melds and lay-offs are chosen
    /// together by the same search, so each opponent card is used once.
    pub fn evaluate_knock(
        &self,
        knocker: &Hand,
        opponent: &Hand,
    ) -> Result<KnockOutcome, ScoringError> {
        expect_size(knocker.len(), HAND_SIZE)?;
        expect_size(opponent.len(), HAND_SIZE)?;
        if let Some(shared) = knocker.iter().find(|c| opponent.contains(*c)) {
            return Err(ScoringError::OverlappingHands(shared));
        }

        let knock = self.optimal_melds(knocker);
        let limit = self.rules.knock_limit;
        if knock.deadwood > limit {
            return Err(ScoringError::KnockNotAllowed { deadwood: knock.deadwood, limit });
        }

        let outcome = if knock.is_gin() {
            let defence = self.optimal_melds(opponent);
            KnockOutcome {
                kind: KnockKind::Gin,
                winner: Winner::Knocker,
                knocker_deadwood: 0,
                opponent_deadwood: defence.deadwood,
                score: defence.deadwood + self.rules.gin_bonus,
                knocker_melds: knock.melds,
                opponent_melds: defence.melds,
                layoffs: Vec::new(),
            }
        } else {
            let mut plays: Vec<DefenderPlay> =
                self.candidate_melds(opponent).into_iter().map(DefenderPlay::Meld).collect();
            plays.extend(
                find_layoffs(&knock.melds, opponent.cards()).into_iter().map(DefenderPlay::LayOff),
            );
            let best = best_combination(&plays);
            let opponent_deadwood = opponent.points() - best.value;

            let mut opponent_melds = Vec::new();
            let mut layoffs = Vec::new();
            for play in best.melds {
                match play {
                    DefenderPlay::Meld(m) => opponent_melds.push(m),
                    DefenderPlay::LayOff(l) => layoffs.push(l),
                }
            }

            let kd = knock.deadwood;
            let undercut =
                opponent_deadwood < kd || (self.rules.tie_is_undercut && opponent_deadwood == kd);
            let (kind, winner, score) = if undercut {
                (
                    KnockKind::Undercut,
                    Winner::Opponent,
                    kd - opponent_deadwood + self.rules.undercut_bonus,
                )
            } else {
                (KnockKind::Knock, Winner::Knocker, opponent_deadwood - kd)
            };
            KnockOutcome {
                kind,
                winner,
                knocker_deadwood: kd,
                opponent_deadwood,
                score,
                knocker_melds: knock.melds,
                opponent_melds,
                layoffs,
            }
        };

        self.observer.on_knock_settled(&outcome);
        Ok(outcome)
    }
}
