//! Playing cards and the shuffled multi-deck that drives every race.
//!
//! ## Core Types
//!
//! - [`Suit`] — One of the four horses: spades, hearts, diamonds, clubs
//! - [`Rank`] — Card face value, purely cosmetic during a race
//! - [`Card`] — An immutable `(Suit, Rank)` pair
//! - [`Decks`] — How many 48-card decks are combined (one to three)
//! - [`Deck`] — An ordered, shuffled sequence of cards
//!
//! Invalid suits, ranks, and deck counts are unrepresentable; parsing from
//! primitives goes through `TryFrom`.
mod card;
mod deck;
mod decks;
mod rank;
mod suit;

pub use card::*;
pub use deck::*;
pub use decks::*;
pub use rank::*;
pub use suit::*;
