use super::card::Card;
use super::decks::Decks;
use super::rank::Rank;
use super::suit::Suit;
use derby_core::Arbitrary;
use rand::Rng;

/// An ordered shoe of cards, drawn front to back.
///
/// Built from [`Decks`] copies of the 48-card reference deck and permuted
/// with Fisher–Yates. Arbitrary card sequences (synthetic decks for tests or
/// replays of a persisted deck order) enter through `From<Vec<Card>>`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// Cards in one reference deck: four suits of twelve ranks.
    pub const REFERENCE: usize = 48;

    /// The reference deck in canonical order: suit-major, rank-minor.
    pub fn reference() -> impl Iterator<Item = Card> {
        Suit::all()
            .into_iter()
            .flat_map(|suit| Rank::all().into_iter().map(move |rank| Card::new(suit, rank)))
    }
    /// Concatenated reference decks, unshuffled.
    pub fn ordered(decks: Decks) -> Self {
        Self(
            (0..decks.count())
                .flat_map(|_| Self::reference())
                .collect(),
        )
    }
    /// Concatenated reference decks under a uniform random permutation.
    pub fn shuffled(decks: Decks) -> Self {
        Self::shuffled_with(decks, &mut rand::rng())
    }
    /// As [`Deck::shuffled`], drawing randomness from the given generator.
    pub fn shuffled_with<R>(decks: Decks, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut deck = Self::ordered(decks);
        deck.shuffle(rng);
        deck
    }
    /// Fisher–Yates: walk down from the last index, swapping each position
    /// with a uniform pick from the positions at or below it.
    pub fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        for i in (1..self.0.len()).rev() {
            let j = rng.random_range(0..=i);
            self.0.swap(i, j);
        }
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Arbitrary for Deck {
    fn random() -> Self {
        Self::shuffled(Decks::One)
    }
}

impl AsRef<[Card]> for Deck {
    fn as_ref(&self) -> &[Card] {
        &self.0
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}
impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.0.iter().map(Card::to_string).collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}
