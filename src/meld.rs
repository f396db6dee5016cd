use crate::cards::{Card, Rank, Suit};
use crate::hand::{hand_value, CardMask};
use std::fmt;

/// The two shapes a meld can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum MeldKind {
    /// 3 or 4 cards of one rank.
    Set,
    /// 3 or more consecutive ranks of one suit.
    Run,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MeldError {
    #[error("a meld needs at least 3 cards, got {0}")]
    TooFewCards(usize),
    #[error("duplicate card in meld: {0}")]
    DuplicateCard(Card),
    #[error("cards form neither a set nor a run")]
    NotAMeld,
}

/// A validated group of cards: either a set or a run.
///
/// Set cards are kept in suit order, run cards in rank order. The card mask
/// is computed once so overlap checks in the search are a single AND.
///
/// ```
/// use gin_rummy::cards::parse_cards;
/// use gin_rummy::meld::{Meld, MeldKind};
///
/// let run = Meld::try_new(parse_cards("6d 4d 5d").unwrap()).unwrap();
/// assert_eq!(run.kind(), MeldKind::Run);
/// assert_eq!(run.points(), 15);
/// assert_eq!(run.to_string(), "[4d 5d 6d]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Meld {
    kind: MeldKind,
    cards: Vec<Card>,
    mask: CardMask,
}

impl Meld {
    /// Validate an arbitrary group of cards as a set or a run.
    pub fn try_new(mut cards: Vec<Card>) -> Result<Meld, MeldError> {
        if cards.len() < 3 {
            return Err(MeldError::TooFewCards(cards.len()));
        }
        cards.sort_unstable();
        if let Some(w) = cards.windows(2).find(|w| w[0] == w[1]) {
            return Err(MeldError::DuplicateCard(w[0]));
        }
        let rank = cards[0].rank();
        if cards.len() <= 4 && cards.iter().all(|c| c.rank() == rank) {
            // already in suit order: same rank, sorted by value
            return Ok(Meld::from_sorted(MeldKind::Set, cards));
        }
        let suit = cards[0].suit();
        let consecutive =
            cards.windows(2).all(|w| w[1].rank().index() == w[0].rank().index() + 1);
        if cards.iter().all(|c| c.suit() == suit) && consecutive {
            return Ok(Meld::from_sorted(MeldKind::Run, cards));
        }
        Err(MeldError::NotAMeld)
    }

    /// Build a meld from cards already known to form `kind` in canonical order.
    pub(crate) fn from_sorted(kind: MeldKind, cards: Vec<Card>) -> Meld {
        debug_assert!(cards.len() >= 3);
        let mask = CardMask::from_cards(&cards);
        Meld { kind, cards, mask }
    }

    pub fn kind(&self) -> MeldKind {
        self.kind
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn mask(&self) -> CardMask {
        self.mask
    }

    pub fn points(&self) -> u32 {
        hand_value(&self.cards)
    }

    pub fn overlaps(&self, other: &Meld) -> bool {
        self.mask.intersects(other.mask)
    }

    pub fn contains(&self, card: Card) -> bool {
        self.mask.contains(card)
    }

    /// Shared rank of a set, `None` for runs.
    pub fn rank(&self) -> Option<Rank> {
        match self.kind {
            MeldKind::Set => Some(self.cards[0].rank()),
            MeldKind::Run => None,
        }
    }

    /// Shared suit of a run, `None` for sets.
    pub fn suit(&self) -> Option<Suit> {
        match self.kind {
            MeldKind::Run => Some(self.cards[0].suit()),
            MeldKind::Set => None,
        }
    }

    /// Lowest and highest rank of a run, `None` for sets.
    pub fn rank_bounds(&self) -> Option<(Rank, Rank)> {
        match self.kind {
            MeldKind::Run => Some((self.cards[0].rank(), self.cards[self.cards.len() - 1].rank())),
            MeldKind::Set => None,
        }
    }
}

impl fmt::Display for Meld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str("]")
    }
}
