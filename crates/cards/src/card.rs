use super::rank::Rank;
use super::suit::Suit;

/// A playing card: an immutable `(Suit, Rank)` value.
///
/// Serialized as `{ "suit": "H", "rank": "10" }`, the shape persisted in
/// round records. Parsed from notation such as `"10h"` or `"Ks"`: the rank
/// followed by a single suit character.
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

/// (Suit, Rank) isomorphism
impl From<(Suit, Rank)> for Card {
    fn from((suit, rank): (Suit, Rank)) -> Self {
        Self::new(suit, rank)
    }
}
impl From<Card> for (Suit, Rank) {
    fn from(c: Card) -> Self {
        (c.suit, c.rank)
    }
}

/// u8 isomorphism
/// each card maps to its location in the reference deck, suit-major
/// Ks
/// 11
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.suit) * 12 + u8::from(c.rank)
    }
}
impl TryFrom<u8> for Card {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        let suit = Suit::try_from(n / 12)?;
        let rank = Rank::try_from(n % 12)?;
        Ok(Self::new(suit, rank))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.char_indices().last() {
            Some((i, _)) if i > 0 => {
                let rank = Rank::try_from(&s[..i])?;
                let suit = Suit::try_from(&s[i..])?;
                Ok(Self::new(suit, rank))
            }
            _ => Err(format!("invalid card str: {}", s)),
        }
    }
}
impl Card {
    /// Parses whitespace-separated card notations into a vector of cards.
    pub fn parse(s: &str) -> Result<Vec<Self>, String> {
        s.split_whitespace()
            .map(Self::try_from)
            .collect::<Result<Vec<Self>, _>>()
    }
}
