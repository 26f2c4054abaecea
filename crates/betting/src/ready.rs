use derby_cards::Suit;
use derby_core::*;

/// Snapshot of a player taken as a round starts.
///
/// `ready` is when the player readied up; earlier players take priority for
/// remainder points.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReadyPlayer {
    pub id: PlayerId,
    pub name: String,
    pub suit: Suit,
    #[serde(rename = "readyTimestamp")]
    pub ready: Millis,
}

impl ReadyPlayer {
    pub fn new(id: PlayerId, name: impl Into<String>, suit: Suit, ready: Millis) -> Self {
        Self {
            id,
            name: name.into(),
            suit,
            ready,
        }
    }
    pub fn backs(&self, suit: Suit) -> bool {
        self.suit == suit
    }
}

impl std::fmt::Display for ReadyPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} on {}", self.name, self.suit.name())
    }
}
