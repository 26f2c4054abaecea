use super::positions::Positions;
use super::timeline::Timeline;
use derby_cards::*;

/// Everything a simulated race produces.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Outcome {
    #[serde(rename = "events")]
    pub timeline: Timeline,
    #[serde(rename = "winningSuit")]
    pub winner: Suit,
    #[serde(rename = "finalPositions")]
    pub positions: Positions,
    #[serde(rename = "gateCards")]
    pub gates: Vec<Card>,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for event in self.timeline.events() {
            writeln!(f, "{}", event)?;
        }
        Ok(())
    }
}
