use super::positions::Positions;
use derby_cards::Card;
use derby_core::*;

/// A checkpoint bound to one face-down card.
///
/// A gate opens once every horse stands at or past its threshold. Opening
/// reveals the card and sends that card's horse back one step, so gates
/// hold the leader back until the slowest horse catches up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Gate {
    index: usize,
    threshold: Step,
    card: Card,
    revealed: bool,
}

impl Gate {
    pub fn new(index: usize, threshold: Step, card: Card) -> Self {
        Self {
            index,
            threshold,
            card,
            revealed: false,
        }
    }
    /// `ceil(length * (i + 1) / 5)` for each gate `i`: non-decreasing,
    /// the last equal to `length`.
    pub fn thresholds(length: Step) -> [Step; GATE_COUNT] {
        std::array::from_fn(|i| (length * (i + 1)).div_ceil(GATE_COUNT))
    }
    /// Binds the leading cards of a deck to gates in order. A deck shorter
    /// than [`GATE_COUNT`] yields only as many gates as it has cards.
    pub fn bind(cards: &[Card], length: Step) -> Vec<Self> {
        Self::thresholds(length)
            .into_iter()
            .zip(cards.iter())
            .enumerate()
            .map(|(index, (threshold, card))| Self::new(index, threshold, *card))
            .collect()
    }
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn threshold(&self) -> Step {
        self.threshold
    }
    pub fn card(&self) -> Card {
        self.card
    }
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
    /// Unrevealed, and every horse has reached the threshold.
    pub fn is_triggered(&self, positions: &Positions) -> bool {
        !self.revealed && positions.slowest() >= self.threshold
    }
    pub(crate) fn reveal(&mut self) {
        debug_assert!(!self.revealed);
        self.revealed = true;
    }
}
