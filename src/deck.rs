use crate::cards::Card;
use crate::hand::{Hand, HandError};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A standard 52-card deck. Cards are drawn from the end of the vector.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use gin_rummy::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        Self { cards: Card::all().collect() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.draw()).collect()
    }

    /// Draw `n` cards as a validated [`Hand`].
    ///
    /// Fails with [`HandError::NotEnoughCards`] if the deck runs out first.
    pub fn draw_hand(&mut self, n: usize) -> Result<Hand, HandError> {
        if self.cards.len() < n {
            return Err(HandError::NotEnoughCards { wanted: n, available: self.cards.len() });
        }
        Hand::try_new(self.draw_n(n))
    }
}
