use super::ready::ReadyPlayer;
use derby_core::*;

/// A player who received one remainder point.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Recipient {
    #[serde(rename = "playerId")]
    pub id: PlayerId,
    #[serde(rename = "playerName")]
    pub name: String,
}

impl From<&ReadyPlayer> for Recipient {
    fn from(player: &ReadyPlayer) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
        }
    }
}

/// Leftover points from dividing the pool, and who got them, in priority
/// order. `count == recipients.len()`.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Remainder {
    #[serde(rename = "remainder")]
    pub count: Points,
    #[serde(rename = "bonusRecipients")]
    pub recipients: Vec<Recipient>,
}
