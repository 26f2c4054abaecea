use derby_core::*;

/// One settlement instruction: `from` pays `to` a positive amount.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub from_id: PlayerId,
    pub from_name: String,
    pub to_id: PlayerId,
    pub to_name: String,
    pub amount: Points,
}

impl std::fmt::Display for Transfer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} -> {}: {}", self.from_name, self.to_name, self.amount)
    }
}
