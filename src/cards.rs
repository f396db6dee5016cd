use std::fmt;
use std::str::FromStr;

/// Card ranks from Ace (low) to King. Aces are always low in Gin Rummy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Ace = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
    Nine = 8,
    Ten = 9,
    Jack = 10,
    Queen = 11,
    King = 12,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Zero-based position, Ace = 0 through King = 12.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Option<Rank> {
        if index < 13 {
            Some(Rank::ALL[index as usize])
        } else {
            None
        }
    }

    /// Deadwood points: Ace = 1, pips at face value, court cards 10.
    pub const fn points(self) -> u32 {
        let v = self as u32 + 1;
        if v > 10 {
            10
        } else {
            v
        }
    }

    /// The rank directly above this one, `None` for King.
    pub const fn succ(self) -> Option<Rank> {
        Rank::from_index(self as u8 + 1)
    }

    /// The rank directly below this one, `None` for Ace.
    pub const fn pred(self) -> Option<Rank> {
        match self {
            Rank::Ace => None,
            r => Rank::from_index(r as u8 - 1),
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t == "10" {
            return Ok(Rank::Ten);
        }
        let mut chars = t.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Rank::try_from(c).map_err(|_| RankParseError::Invalid(s.to_string()))
            }
            _ => Err(RankParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = RankParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Rank::Ace),
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            _ => Err(RankParseError::Invalid(c.to_string())),
        }
    }
}

/// Four suits in their fixed index order: S < D < C < H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    Spades = 0,
    Diamonds = 1,
    Clubs = 2,
    Hearts = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts];

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Option<Suit> {
        if index < 4 {
            Some(Suit::ALL[index as usize])
        } else {
            None
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Suit::Spades => 's',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Hearts => 'h',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c);
        }
        match t.to_ascii_lowercase().as_str() {
            "spades" => Ok(Suit::Spades),
            "diamonds" => Ok(Suit::Diamonds),
            "clubs" => Ok(Suit::Clubs),
            "hearts" => Ok(Suit::Hearts),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            's' | '♠' => Ok(Suit::Spades),
            'd' | '♦' => Ok(Suit::Diamonds),
            'c' | '♣' => Ok(Suit::Clubs),
            'h' | '♥' => Ok(Suit::Hearts),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// A playing card: suit + rank.
///
/// Cards order by their integer encoding `suit_index * 13 + rank_index`, so
/// all spades sort before all diamonds and so on.
///
/// ```
/// use gin_rummy::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ten, Suit::Clubs);
/// assert_eq!(card.to_string(), "Tc");
/// assert_eq!(card.value(), 2 * 13 + 9);
/// assert_eq!(Card::from_value(card.value()).unwrap(), card);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    // Field order matters: the derived Ord compares suit first, then rank.
    suit: Suit,
    rank: Rank,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Integer encoding in `0..52`.
    pub const fn value(self) -> u8 {
        self.suit.index() * 13 + self.rank.index()
    }

    /// Inverse of [`Card::value`].
    pub fn from_value(value: u8) -> Result<Card, CardParseError> {
        match (Suit::from_index(value / 13), Rank::from_index(value % 13)) {
            (Some(suit), Some(rank)) => Ok(Card::new(rank, suit)),
            _ => Err(CardParseError::ValueOutOfRange(value)),
        }
    }

    pub const fn points(self) -> u32 {
        self.rank.points()
    }

    /// All 52 cards in encoding order.
    pub fn all() -> impl Iterator<Item = Card> {
        Suit::ALL.into_iter().flat_map(|s| Rank::ALL.into_iter().map(move |r| Card::new(r, s)))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error("card value out of range: {0}")]
    ValueOutOfRange(u8),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        // suit is always the last char (possibly a multi-byte glyph); rank is the rest
        let (split, suit_ch) =
            t.char_indices().last().ok_or_else(|| CardParseError::Invalid(s.to_string()))?;
        if split == 0 {
            return Err(CardParseError::Invalid(s.to_string()));
        }
        let rank = Rank::from_str(&t[..split])?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(rank, suit))
    }
}

/// Deadwood point value of a single card.
pub const fn point_value(card: Card) -> u32 {
    card.points()
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use gin_rummy::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("As, Kd 10c 4♥").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(cards[1], Card::new(Rank::King, Suit::Diamonds));
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Clubs));
/// assert_eq!(cards[3], Card::new(Rank::Four, Suit::Hearts));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}
