use crate::cards::{parse_cards, Card};
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate card in hand: {0}")]
    DuplicateCard(Card),
    #[error("card not in hand: {0}")]
    CardNotInHand(Card),
    #[error("not enough cards: wanted {wanted}, {available} available")]
    NotEnoughCards { wanted: usize, available: usize },
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A set of cards packed into one bit per card value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CardMask(u64);

impl CardMask {
    pub const EMPTY: CardMask = CardMask(0);

    pub fn from_cards<'a, I>(cards: I) -> Self
    where
        I: IntoIterator<Item = &'a Card>,
    {
        cards.into_iter().fold(Self::EMPTY, |m, c| m.with(*c))
    }

    pub const fn bit(card: Card) -> u64 {
        1u64 << card.value()
    }

    #[must_use]
    pub const fn with(self, card: Card) -> Self {
        CardMask(self.0 | Self::bit(card))
    }

    pub const fn contains(self, card: Card) -> bool {
        self.0 & Self::bit(card) != 0
    }

    pub const fn intersects(self, other: CardMask) -> bool {
        self.0 & other.0 != 0
    }

    #[must_use]
    pub const fn union(self, other: CardMask) -> Self {
        CardMask(self.0 | other.0)
    }

    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Sum of point values of the given cards.
pub fn hand_value(cards: &[Card]) -> u32 {
    cards.iter().map(|c| c.points()).sum()
}

/// A set of unique cards, kept sorted by card value so iteration order is
/// deterministic regardless of how the hand was assembled.
///
/// ```
/// use gin_rummy::hand::Hand;
///
/// let hand: Hand = "Ac Ad As 4c 5c 6c 7c Qd Th 4h".parse().unwrap();
/// assert_eq!(hand.len(), 10);
/// assert_eq!(hand.points(), 49);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn try_new(mut cards: Vec<Card>) -> Result<Self, HandError> {
        cards.sort_unstable();
        if let Some(w) = cards.windows(2).find(|w| w[0] == w[1]) {
            return Err(HandError::DuplicateCard(w[0]));
        }
        Ok(Self { cards })
    }

    pub fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.binary_search(&card).is_ok()
    }

    pub fn mask(&self) -> CardMask {
        CardMask::from_cards(&self.cards)
    }

    /// Total point value of every card in the hand.
    pub fn points(&self) -> u32 {
        hand_value(&self.cards)
    }

    /// A copy of this hand with `card` removed.
    pub fn without(&self, card: Card) -> Result<Hand, HandError> {
        let pos = self.cards.binary_search(&card).map_err(|_| HandError::CardNotInHand(card))?;
        let mut cards = self.cards.clone();
        cards.remove(pos);
        Ok(Hand { cards })
    }

    /// A copy of this hand with `card` added.
    pub fn with(&self, card: Card) -> Result<Hand, HandError> {
        match self.cards.binary_search(&card) {
            Ok(_) => Err(HandError::DuplicateCard(card)),
            Err(pos) => {
                let mut cards = self.cards.clone();
                cards.insert(pos, card);
                Ok(Hand { cards })
            }
        }
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Hand::try_new(cards)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Hand::try_new(cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
