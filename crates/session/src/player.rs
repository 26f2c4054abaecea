use super::pin::Pin;
use super::rejection::Rejection;
use derby_betting::ReadyPlayer;
use derby_cards::Suit;
use derby_core::*;

/// A member of a session.
///
/// `ready` holds the instant the player readied up, so a player is ready
/// exactly when it is set. Readying requires a selected suit.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(rename = "pinHash")]
    pub pin: Pin,
    #[serde(rename = "isMaster")]
    pub master: bool,
    #[serde(rename = "selectedSuit")]
    pub suit: Option<Suit>,
    #[serde(rename = "readyTimestamp")]
    pub ready: Option<Millis>,
    pub connected: bool,
}

impl Player {
    pub fn new(name: &str, pin: &str, master: bool) -> Result<Self, Rejection> {
        Ok(Self {
            id: PlayerId::default(),
            name: Self::validate(name)?,
            pin: Pin::new(pin)?,
            master,
            suit: None,
            ready: None,
            connected: true,
        })
    }
    /// Display names are 3 to 16 characters.
    pub fn validate(name: &str) -> Result<String, Rejection> {
        if (NAME_MIN..=NAME_MAX).contains(&name.chars().count()) {
            Ok(name.to_string())
        } else {
            Err(Rejection::InvalidName)
        }
    }
    /// Same name and PIN.
    pub fn is(&self, name: &str, pin: &str) -> bool {
        self.name == name && self.pin.matches(pin)
    }
    pub fn is_ready(&self) -> bool {
        self.ready.is_some()
    }
    /// This player's stake in the next round, if they have one.
    pub fn entrant(&self) -> Option<ReadyPlayer> {
        match (self.connected, self.suit, self.ready) {
            (true, Some(suit), Some(ready)) => {
                Some(ReadyPlayer::new(self.id, self.name.clone(), suit, ready))
            }
            _ => None,
        }
    }
    /// Back to an unpicked, unready player.
    pub fn reset(&mut self) {
        self.suit = None;
        self.ready = None;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        if self.master {
            write!(f, " (master)")?;
        }
        if let Some(suit) = self.suit {
            write!(f, " on {}", suit.name())?;
        }
        Ok(())
    }
}
