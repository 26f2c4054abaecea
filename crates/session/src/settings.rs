use super::rejection::Rejection;
use derby_cards::Decks;
use derby_core::*;
use derby_race::Track;

/// Per-session game parameters, fixed at creation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Settings {
    #[serde(rename = "betAmountPoints")]
    pub bet: Points,
    #[serde(rename = "numDecks")]
    pub decks: Decks,
    #[serde(rename = "tracks")]
    pub track: Track,
}

impl Settings {
    /// Validates raw creation parameters.
    pub fn new(bet: Points, decks: u8, track: u8) -> Result<Self, Rejection> {
        if !(1..=MAX_BET).contains(&bet) {
            return Err(Rejection::InvalidBet);
        }
        Ok(Self {
            bet,
            decks: Decks::try_from(decks).map_err(|_| Rejection::InvalidDecks)?,
            track: Track::try_from(track).map_err(|_| Rejection::InvalidTrack)?,
        })
    }
}

impl std::fmt::Display for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "bet {} with {} deck(s) on a {} track",
            self.bet,
            self.decks.count(),
            self.track.length()
        )
    }
}
