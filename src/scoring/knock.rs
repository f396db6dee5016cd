use super::{expect_size, Scorer, ScoringError};
use crate::cards::Card;
use crate::hand::Hand;
use crate::observer::ScoringObserver;
use crate::rules::{HAND_SIZE, KNOCK_HAND_SIZE};
use rayon::prelude::*;

/// Whether an 11-card hand can discard one card and knock under standard rules.
///
/// ```
/// use gin_rummy::hand::Hand;
/// use gin_rummy::scoring::can_knock;
///
/// let hand: Hand = "Ac Ad As 4c 5c 6c 7c 8c 9c Th 4h".parse().unwrap();
/// assert!(can_knock(&hand).unwrap());
///
/// let short: Hand = "Ac Ad As".parse().unwrap();
/// assert!(can_knock(&short).is_err());
/// ```
pub fn can_knock(hand: &Hand) -> Result<bool, ScoringError> {
    Scorer::new().can_knock(hand)
}

/// Same answer as [`can_knock`], with the discards checked on the rayon pool.
pub fn can_knock_parallel(hand: &Hand) -> Result<bool, ScoringError> {
    Scorer::new().can_knock_parallel(hand)
}

/// Every discard from an 11-card hand that leaves a knockable hand, with the
/// deadwood it leaves, in card order.
pub fn knock_discards(hand: &Hand) -> Result<Vec<(Card, u32)>, ScoringError> {
    Scorer::new().knock_discards(hand)
}

/// Whether a 10-card hand (after the discard) is within the knock limit.
pub fn is_knockable(hand: &Hand) -> Result<bool, ScoringError> {
    Scorer::new().is_knockable(hand)
}

impl<O: ScoringObserver> Scorer<O> {
    /// Fails with [`ScoringError::HandSize`] unless `hand` has 11 cards.
    ///
    /// Hands above [`Rules::pre_discard_limit`](crate::rules::Rules::pre_discard_limit)
    /// are rejected without trying discards; otherwise each discard is tried in
    /// card order and the first one reaching the knock limit answers `true`.
    pub fn can_knock(&self, hand: &Hand) -> Result<bool, ScoringError> {
        if !self.may_reach_limit(hand)? {
            return Ok(false);
        }
        for card in hand.iter() {
            if self.discard_deadwood(hand, card)? <= self.rules.knock_limit {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub fn knock_discards(&self, hand: &Hand) -> Result<Vec<(Card, u32)>, ScoringError> {
        if !self.may_reach_limit(hand)? {
            return Ok(Vec::new());
        }
        let mut discards = Vec::new();
        for card in hand.iter() {
            let deadwood = self.discard_deadwood(hand, card)?;
            if deadwood <= self.rules.knock_limit {
                discards.push((card, deadwood));
            }
        }
        Ok(discards)
    }

    pub fn is_knockable(&self, hand: &Hand) -> Result<bool, ScoringError> {
        expect_size(hand.len(), HAND_SIZE)?;
        Ok(self.optimal_deadwood(hand) <= self.rules.knock_limit)
    }

    /// Size check plus the pre-discard bound; `false` means no discard can work.
    fn may_reach_limit(&self, hand: &Hand) -> Result<bool, ScoringError> {
        expect_size(hand.len(), KNOCK_HAND_SIZE)?;
        Ok(self.optimal_deadwood(hand) <= self.rules.pre_discard_limit())
    }

    fn discard_deadwood(&self, hand: &Hand, discard: Card) -> Result<u32, ScoringError> {
        let rest = hand.without(discard)?;
        let deadwood = self.optimal_deadwood(&rest);
        self.observer.on_discard_checked(discard, deadwood);
        Ok(deadwood)
    }
}

impl<O: ScoringObserver + Sync> Scorer<O> {
    /// [`Scorer::can_knock`] with the discards searched in parallel.
    ///
    /// Stops handing out discards once one knocks; searches already running
    /// on other workers still finish.
    pub fn can_knock_parallel(&self, hand: &Hand) -> Result<bool, ScoringError> {
        if !self.may_reach_limit(hand)? {
            return Ok(false);
        }
        hand.cards()
            .par_iter()
            .map(|&card| {
                self.discard_deadwood(hand, card).map(|deadwood| deadwood <= self.rules.knock_limit)
            })
            .find_any(|knocks| !matches!(knocks, Ok(false)))
            .unwrap_or(Ok(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoopObserver;
    use crate::rules::Rules;
    use std::sync::Mutex;

    fn hand(s: &str) -> Hand {
        s.parse().expect("valid hand")
    }

    fn card(s: &str) -> Card {
        s.parse().expect("valid card")
    }

    #[derive(Default)]
    struct Discards(Mutex<Vec<Card>>);

    impl ScoringObserver for Discards {
        fn on_discard_checked(&self, discard: Card, _deadwood: u32) {
            self.0.lock().unwrap().push(discard);
        }
    }

    #[test]
    fn rejects_wrong_hand_size() {
        let ten = hand("Ac Ad As 4c 5c 6c 7c Qd Th 4h");
        assert_eq!(
            can_knock(&ten),
            Err(ScoringError::HandSize { expected: 11, actual: 10 })
        );
        assert!(matches!(is_knockable(&hand("Ac")), Err(ScoringError::HandSize { .. })));
    }

    #[test]
    fn stops_at_first_knocking_discard() {
        let observer = Discards::default();
        let scorer = Scorer::new().with_observer(&observer);
        // Tc-Kc run and 2s2d2h set; As leaves 15, 2s breaks the set, 7s leaves 9
        let h = hand("Tc Jc Qc Kc 2s 2d 2h As 3d 5h 7s");
        assert!(scorer.can_knock(&h).unwrap());
        let tried = observer.0.lock().unwrap().clone();
        assert_eq!(tried, vec![card("As"), card("2s"), card("7s")]);
    }

    #[test]
    fn hopeless_hands_skip_the_discard_search() {
        let observer = Discards::default();
        let scorer = Scorer::new().with_observer(&observer);
        let h = hand("As 3d 5c 7h 9s Jd Kc 2h 4s 6d 8c");
        assert!(!scorer.can_knock(&h).unwrap());
        assert!(observer.0.lock().unwrap().is_empty());
        assert!(scorer.knock_discards(&h).unwrap().is_empty());
    }

    #[test]
    fn lists_every_knocking_discard() {
        let scorer = Scorer::new().with_observer(NoopObserver);
        let h = hand("Ac Ad As 4c 5c 6c 7c 8c 9c Th 4h");
        let discards = scorer.knock_discards(&h).unwrap();
        let cards: Vec<String> = discards.iter().map(|(c, _)| c.to_string()).collect();
        assert_eq!(cards, vec!["4h", "Th"]);
        assert_eq!(discards[0].1, 10);
        assert_eq!(discards[1].1, 4);
    }

    #[test]
    fn knock_limit_comes_from_the_rules() {
        let h = hand("Ac Ad As 4c 5c 6c 7c 8c 9c Th 4h");
        let strict = Scorer::with_rules(Rules::standard().with_knock_limit(3)).unwrap();
        assert!(!strict.can_knock(&h).unwrap());
        let loose = Scorer::with_rules(Rules::standard().with_knock_limit(4)).unwrap();
        assert!(loose.can_knock(&h).unwrap());
    }

    #[test]
    fn parallel_check_stops_after_a_knocking_discard() {
        let observer = Discards::default();
        let scorer = Scorer::new().with_observer(&observer);
        let h = hand("Tc Jc Qc Kc 2s 2d 2h As 3d 5h 7s");
        let pool = rayon::ThreadPoolBuilder::new().num_threads(1).build().unwrap();
        assert!(pool.install(|| scorer.can_knock_parallel(&h)).unwrap());
        // one worker walks the discards in order and stops at 7s
        let tried = observer.0.lock().unwrap().clone();
        assert_eq!(tried, vec![card("As"), card("2s"), card("7s")]);
    }

    #[test]
    fn parallel_check_skips_hopeless_hands() {
        let observer = Discards::default();
        let scorer = Scorer::new().with_observer(&observer);
        let h = hand("As 3d 5c 7h 9s Jd Kc 2h 4s 6d 8c");
        assert!(!scorer.can_knock_parallel(&h).unwrap());
        assert!(observer.0.lock().unwrap().is_empty());
    }

    #[test]
    fn parallel_agrees_with_sequential() {
        let hands = [
            "Ac Ad As 4c 5c 6c 7c 8c 9c Th 4h",
            "As 3d 5c 7h 9s Jd Kc 2h 4s 6d 8c",
            "Tc Jc Qc Kc 2s 2d 2h As 3d 5h 7s",
            "Ks Kd Kc Qs Qd Qc Js Jd Jc 9h 8h",
        ];
        for s in hands {
            let h = hand(s);
            assert_eq!(can_knock(&h), can_knock_parallel(&h), "hand {s}");
        }
    }

    #[test]
    fn ten_card_knock_check() {
        assert!(is_knockable(&hand("Ac Ad As 4c 5c 6c 7c 8c 9c 4h")).unwrap());
        assert!(!is_knockable(&hand("Ac Ad As 4c 5c 6c 7c Qd Th 4h")).unwrap());
    }
}
