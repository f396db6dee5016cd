use super::search::Combinable;
use crate::cards::{Card, Rank, Suit};
use crate::hand::{hand_value, CardMask};
use crate::meld::{Meld, MeldKind};
use std::fmt;

/// Defender cards that can be attached to one of the knocker's melds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayOff {
    target: usize,
    cards: Vec<Card>,
    mask: CardMask,
}

impl LayOff {
    fn new(target: usize, cards: Vec<Card>) -> Self {
        let mask = CardMask::from_cards(&cards);
        Self { target, cards, mask }
    }

    /// Index of the extended meld in the slice given to [`find_layoffs`].
    pub fn target(&self) -> usize {
        self.target
    }

    /// The defender's cards, one or two, in rank order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn mask(&self) -> CardMask {
        self.mask
    }

    /// Deadwood the defender sheds by laying these cards off.
    pub fn points(&self) -> u32 {
        hand_value(&self.cards)
    }
}

impl Combinable for LayOff {
    fn mask(&self) -> CardMask {
        self.mask
    }

    fn points(&self) -> u32 {
        LayOff::points(self)
    }
}

impl fmt::Display for LayOff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, " -> #{}", self.target)
    }
}

/// Every legal extension of `melds` using `defender` cards.
///
/// A three-card set takes the missing fourth card of its rank. A run takes
/// the card just below its low end or just above its high end, or the two
/// adjacent cards extending one end by two ranks, laid off together. Each
/// option is listed on its own; options may share cards and choosing among
/// them is up to the caller.
///
/// Options come in meld order; per run: low single, low pair, high single,
/// high pair.
///
/// ```
/// use gin_rummy::cards::parse_cards;
/// use gin_rummy::meld::Meld;
/// use gin_rummy::scoring::find_layoffs;
///
/// let run = Meld::try_new(parse_cards("4d 5d 6d").unwrap()).unwrap();
/// let layoffs = find_layoffs(&[run], &parse_cards("3d 7d 8d").unwrap());
/// let shown: Vec<String> = layoffs.iter().map(|l| l.to_string()).collect();
/// assert_eq!(shown, vec!["3d -> #0", "7d -> #0", "7d 8d -> #0"]);
/// ```
pub fn find_layoffs(melds: &[Meld], defender: &[Card]) -> Vec<LayOff> {
    let held = CardMask::from_cards(defender);
    let mut layoffs = Vec::new();
    for (target, meld) in melds.iter().enumerate() {
        match meld.kind() {
            MeldKind::Set => {
                if meld.len() != 3 {
                    continue;
                }
                let Some(rank) = meld.rank() else { continue };
                for suit in Suit::ALL {
                    let card = Card::new(rank, suit);
                    if held.contains(card) && !meld.contains(card) {
                        layoffs.push(LayOff::new(target, vec![card]));
                    }
                }
            }
            MeldKind::Run => {
                let (Some(suit), Some((lo, hi))) = (meld.suit(), meld.rank_bounds()) else {
                    continue;
                };
                extend_end(target, suit, lo, Rank::pred, held, &mut layoffs);
                extend_end(target, suit, hi, Rank::succ, held, &mut layoffs);
            }
        }
    }
    layoffs
}

/// Single and paired extensions past `end` in the direction given by `step`.
fn extend_end(
    target: usize,
    suit: Suit,
    end: Rank,
    step: fn(Rank) -> Option<Rank>,
    held: CardMask,
    out: &mut Vec<LayOff>,
) {
    let Some(first) = step(end).map(|r| Card::new(r, suit)).filter(|c| held.contains(*c)) else {
        return;
    };
    out.push(LayOff::new(target, vec![first]));
    let second = step(first.rank()).map(|r| Card::new(r, suit)).filter(|c| held.contains(*c));
    if let Some(second) = second {
        let mut pair = vec![first, second];
        pair.sort_unstable();
        out.push(LayOff::new(target, pair));
    }
}
