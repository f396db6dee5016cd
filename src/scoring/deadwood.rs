use super::search::best_combination;
use super::Scorer;
use crate::cards::Card;
use crate::hand::Hand;
use crate::meld::Meld;
use crate::observer::ScoringObserver;

/// Best arrangement of a hand: chosen melds, leftover cards, and their points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadwoodReport {
    /// Points of the unmatched cards.
    pub deadwood: u32,
    /// Pairwise disjoint melds, in the order the search chose them.
    pub melds: Vec<Meld>,
    /// Cards outside every chosen meld, in value order.
    pub unmatched: Vec<Card>,
}

impl DeadwoodReport {
    pub fn is_gin(&self) -> bool {
        self.deadwood == 0
    }

    /// Every card used by the chosen melds.
    pub fn melded_cards(&self) -> Vec<Card> {
        self.melds.iter().flat_map(|m| m.cards().iter().copied()).collect()
    }
}

/// Optimal arrangement of `hand`. See [`Scorer::optimal_melds`].
pub fn optimal_melds(hand: &Hand) -> DeadwoodReport {
    Scorer::new().optimal_melds(hand)
}

/// Lowest deadwood reachable by melding `hand`.
///
/// ```
/// use gin_rummy::hand::Hand;
/// use gin_rummy::scoring::optimal_deadwood;
///
/// let hand: Hand = "Ac Ad As 4c 5c 6c 7c Qd Th 4h".parse().unwrap();
/// assert_eq!(optimal_deadwood(&hand), 24);
/// ```
pub fn optimal_deadwood(hand: &Hand) -> u32 {
    Scorer::new().optimal_deadwood(hand)
}

impl<O: ScoringObserver> Scorer<O> {
    /// Melds `hand` to minimise deadwood: total points minus the best
    /// combination of candidate melds.
    pub fn optimal_melds(&self, hand: &Hand) -> DeadwoodReport {
        let candidates = self.candidate_melds(hand);
        let best = best_combination(&candidates);
        let covered = best.mask();
        let unmatched: Vec<Card> = hand.iter().filter(|c| !covered.contains(*c)).collect();
        let report = DeadwoodReport {
            deadwood: hand.points() - best.value,
            melds: best.melds,
            unmatched,
        };
        debug_assert_eq!(report.deadwood, crate::hand::hand_value(&report.unmatched));
        self.observer.on_best(hand, &report);
        report
    }

    pub fn optimal_deadwood(&self, hand: &Hand) -> u32 {
        self.optimal_melds(hand).deadwood
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoopObserver;

    fn scorer() -> Scorer<NoopObserver> {
        Scorer::new().with_observer(NoopObserver)
    }

    fn hand(s: &str) -> Hand {
        s.parse().expect("valid hand")
    }

    #[test]
    fn hand_without_melds_is_all_deadwood() {
        let h = hand("As 3d 5c 7h 9s Jd Kc");
        let r = scorer().optimal_melds(&h);
        assert_eq!(r.deadwood, h.points());
        assert!(r.melds.is_empty());
        assert_eq!(r.unmatched, h.cards());
    }

    #[test]
    fn empty_hand_has_no_deadwood() {
        let r = scorer().optimal_melds(&Hand::empty());
        assert_eq!(r.deadwood, 0);
        assert!(r.melds.is_empty() && r.unmatched.is_empty());
    }

    #[test]
    fn reports_leftovers_of_the_best_arrangement() {
        let r = scorer().optimal_melds(&hand("Ac Ad As 4c 5c 6c 7c Qd Th 4h"));
        assert_eq!(r.deadwood, 24);
        let melds: Vec<String> = r.melds.iter().map(|m| m.to_string()).collect();
        assert_eq!(melds, vec!["[As Ad Ac]", "[4c 5c 6c 7c]"]);
        assert_eq!(r.unmatched, crate::cards::parse_cards("Qd 4h Th").unwrap());
        assert_eq!(r.melded_cards().len(), 7);
    }

    #[test]
    fn frees_one_card_of_four_for_a_run() {
        // 7s7d7c7h + 5c6c: three sevens plus 5c6c7c beats the four-card set
        let r = scorer().optimal_melds(&hand("7s 7d 7c 7h 5c 6c Kh Qs"));
        assert_eq!(r.deadwood, 20);
        assert_eq!(r.melds.len(), 2);
    }

    #[test]
    fn gin_hand_reports_zero() {
        let r = scorer().optimal_melds(&hand("As 2s 3s 4d 4c 4h 9h Th Jh Qh"));
        assert!(r.is_gin());
    }
}
