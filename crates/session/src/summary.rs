use derby_betting::Balance;
use derby_betting::Ledger;
use derby_betting::Transfer;
use derby_core::*;
use std::collections::BTreeMap;

/// What a session leaves behind once it ends.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Summary {
    #[serde(rename = "netPoints")]
    pub balances: BTreeMap<PlayerId, Balance>,
    pub transfers: Vec<Transfer>,
    #[serde(rename = "totalPointsPlayed")]
    pub played: Points,
}

impl From<&Ledger> for Summary {
    fn from(ledger: &Ledger) -> Self {
        Self {
            balances: ledger.balances().clone(),
            transfers: ledger.settle(),
            played: ledger.played(),
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "points played: {}", self.played)?;
        for balance in self.balances.values() {
            writeln!(f, "{}", balance)?;
        }
        for transfer in self.transfers.iter() {
            writeln!(f, "{}", transfer)?;
        }
        Ok(())
    }
}
