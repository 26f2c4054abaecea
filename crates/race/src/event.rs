use super::positions::Positions;
use derby_cards::*;
use derby_core::*;

/// One visible step of a race, stamped with its offset from race start.
///
/// The serialized form matches the persisted round record:
/// `{"type":"TURN_REVEAL_CARD","tOffset":0,"card":{..}}` and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// The next card is turned over.
    #[serde(rename = "TURN_REVEAL_CARD")]
    Reveal {
        #[serde(rename = "tOffset")]
        at: Millis,
        card: Card,
    },
    /// The drawn card's horse moves forward.
    #[serde(rename = "TURN_MOVE_FORWARD")]
    Advance {
        #[serde(rename = "tOffset")]
        at: Millis,
        suit: Suit,
        #[serde(rename = "newPos")]
        position: Step,
    },
    /// A gate opens and shows its card.
    #[serde(rename = "GATE_REVEAL")]
    Gate {
        #[serde(rename = "tOffset")]
        at: Millis,
        #[serde(rename = "gateIndex")]
        gate: usize,
        card: Card,
    },
    /// The gate card's horse steps back.
    #[serde(rename = "GATE_MOVE_BACK")]
    Retreat {
        #[serde(rename = "tOffset")]
        at: Millis,
        suit: Suit,
        #[serde(rename = "newPos")]
        position: Step,
    },
    /// The race is over.
    #[serde(rename = "RACE_FINISHED")]
    Finish {
        #[serde(rename = "tOffset")]
        at: Millis,
        #[serde(rename = "winningSuit")]
        winner: Suit,
        #[serde(rename = "finalPositions")]
        positions: Positions,
    },
}

impl Event {
    /// Offset from race start.
    pub fn at(&self) -> Millis {
        match self {
            Event::Reveal { at, .. }
            | Event::Advance { at, .. }
            | Event::Gate { at, .. }
            | Event::Retreat { at, .. }
            | Event::Finish { at, .. } => *at,
        }
    }
    /// The horse this event moves or crowns, if any.
    pub fn suit(&self) -> Option<Suit> {
        match self {
            Event::Reveal { card, .. } | Event::Gate { card, .. } => Some(card.suit()),
            Event::Advance { suit, .. } | Event::Retreat { suit, .. } => Some(*suit),
            Event::Finish { winner, .. } => Some(*winner),
        }
    }
    pub fn is_finish(&self) -> bool {
        matches!(self, Event::Finish { .. })
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::Reveal { at, card } => write!(f, "{:>6} draw   {}", at, card),
            Event::Advance { at, suit, position } => {
                write!(f, "{:>6} ahead  {} -> {}", at, suit.ascii(), position)
            }
            Event::Gate { at, gate, card } => write!(f, "{:>6} gate#{} {}", at, gate, card),
            Event::Retreat { at, suit, position } => {
                write!(f, "{:>6} back   {} -> {}", at, suit.ascii(), position)
            }
            Event::Finish {
                at,
                winner,
                positions,
            } => write!(f, "{:>6} WINNER {} [{}]", at, winner.name(), positions),
        }
    }
}
