use super::Scorer;
use crate::cards::{Card, Suit};
use crate::hand::{CardMask, Hand};
use crate::meld::{Meld, MeldKind};
use crate::observer::ScoringObserver;

const MIN_MELD: usize = 3;

/// Longer runs split into windows of at most this length without losing value.
const MAX_RUN_WINDOW: usize = 5;

/// Every set and run that can be formed from `hand`. Melds may share cards.
///
/// Sets come first (by rank), then runs (by suit, window length, start rank).
///
/// ```
/// use gin_rummy::hand::Hand;
/// use gin_rummy::scoring::candidate_melds;
///
/// let hand: Hand = "5c 5d 5h 5s".parse().unwrap();
/// assert_eq!(candidate_melds(&hand).len(), 3);
/// ```
pub fn candidate_melds(hand: &Hand) -> Vec<Meld> {
    Scorer::new().candidate_melds(hand)
}

impl<O: ScoringObserver> Scorer<O> {
    pub fn candidate_melds(&self, hand: &Hand) -> Vec<Meld> {
        let melds = generate(hand);
        self.observer.on_candidates(hand, &melds);
        melds
    }
}

fn generate(hand: &Hand) -> Vec<Meld> {
    let runs = run_candidates(hand);
    let run_cover = runs.iter().fold(CardMask::EMPTY, |m, r| m.union(r.mask()));
    let mut melds = set_candidates(hand, run_cover);
    melds.extend(runs);
    melds
}

/// Full sets, plus for a four-card set the three-card subsets that free one
/// card. Cards usable in a run are freed first; at least two subsets are
/// always emitted, padded in suit order.
fn set_candidates(hand: &Hand, run_cover: CardMask) -> Vec<Meld> {
    let mut by_rank: [Vec<Card>; 13] = Default::default();
    // hand iterates in value order, so each group is already in suit order
    for card in hand.iter() {
        by_rank[card.rank().index() as usize].push(card);
    }

    let mut melds = Vec::new();
    for group in by_rank.iter().filter(|g| g.len() >= MIN_MELD) {
        melds.push(Meld::from_sorted(MeldKind::Set, group.clone()));
        if group.len() < 4 {
            continue;
        }
        let (usable, rest): (Vec<Card>, Vec<Card>) =
            group.iter().copied().partition(|c| run_cover.contains(*c));
        let subsets = usable.len().max(2);
        for omit in usable.iter().chain(rest.iter()).take(subsets) {
            let cards = group.iter().copied().filter(|c| c != omit).collect();
            melds.push(Meld::from_sorted(MeldKind::Set, cards));
        }
    }
    melds
}

fn run_candidates(hand: &Hand) -> Vec<Meld> {
    let mut melds = Vec::new();
    for suit in Suit::ALL {
        let cards: Vec<Card> = hand.iter().filter(|c| c.suit() == suit).collect();
        let mut start = 0;
        for i in 1..=cards.len() {
            let breaks =
                i == cards.len() || cards[i].rank().index() != cards[i - 1].rank().index() + 1;
            if breaks {
                push_windows(&cards[start..i], &mut melds);
                start = i;
            }
        }
    }
    melds
}

/// Emit every contiguous window of length 3..=5 of a maximal run.
fn push_windows(stretch: &[Card], out: &mut Vec<Meld>) {
    for len in MIN_MELD..=MAX_RUN_WINDOW.min(stretch.len()) {
        for window in stretch.windows(len) {
            out.push(Meld::from_sorted(MeldKind::Run, window.to_vec()));
        }
    }
}
