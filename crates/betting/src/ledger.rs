use super::balance::Balance;
use super::payouts::Payouts;
use super::ready::ReadyPlayer;
use super::settlement::Settlement;
use super::transfer::Transfer;
use derby_core::*;
use std::collections::BTreeMap;

/// Running net balances over the rounds of one session.
///
/// Since every round's deltas sum to zero, so do the balances.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Ledger {
    balances: BTreeMap<PlayerId, Balance>,
    played: Points,
}

impl Ledger {
    /// Opens an account at zero, keeping any existing balance.
    pub fn open(&mut self, id: PlayerId, name: impl Into<String>) {
        self.balances
            .entry(id)
            .or_insert_with(|| Balance::new(name, 0));
    }
    /// Adds one round's deltas, opening accounts for new entrants.
    pub fn apply(&mut self, entrants: &[ReadyPlayer], payouts: &Payouts) {
        for player in entrants {
            self.open(player.id, player.name.clone());
        }
        for (id, delta) in payouts.deltas.iter() {
            self.balances.entry(*id).or_default().net += delta;
        }
        self.played += payouts.pool;
    }
    pub fn balances(&self) -> &BTreeMap<PlayerId, Balance> {
        &self.balances
    }
    pub fn net(&self, id: &PlayerId) -> Points {
        self.balances.get(id).map(|b| b.net).unwrap_or_default()
    }
    /// Total points staked across all rounds.
    pub fn played(&self) -> Points {
        self.played
    }
    /// Transfers that clear every balance.
    pub fn settle(&self) -> Vec<Transfer> {
        Settlement::compute(&self.balances)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use derby_cards::Suit;

    #[test]
    fn rounds_accumulate_and_settle() {
        let a = ReadyPlayer::new(PlayerId::default(), "ann", Suit::S, 1);
        let b = ReadyPlayer::new(PlayerId::default(), "bob", Suit::H, 2);
        let c = ReadyPlayer::new(PlayerId::default(), "cat", Suit::H, 3);
        let round = [a.clone(), b.clone(), c.clone()];
        let mut ledger = Ledger::default();
        ledger.apply(&round, &Payouts::compute(&round, Suit::S, 10));
        ledger.apply(&round, &Payouts::compute(&round, Suit::H, 10));
        // ann: +20 then -10; bob and cat: -10 then +5
        assert_eq!(ledger.net(&a.id), 10);
        assert_eq!(ledger.net(&b.id), -5);
        assert_eq!(ledger.net(&c.id), -5);
        assert_eq!(ledger.played(), 60);
        assert_eq!(ledger.balances().values().map(|b| b.net).sum::<Points>(), 0);
        let transfers = ledger.settle();
        assert_eq!(transfers.len(), 2);
        assert!(transfers.iter().all(|t| t.to_id == a.id && t.amount == 5));
    }

    #[test]
    fn open_keeps_existing_balance() {
        let a = ReadyPlayer::new(PlayerId::default(), "ann", Suit::S, 1);
        let b = ReadyPlayer::new(PlayerId::default(), "bob", Suit::D, 2);
        let mut ledger = Ledger::default();
        ledger.apply(
            &[a.clone(), b.clone()],
            &Payouts::compute(&[a.clone(), b.clone()], Suit::S, 4),
        );
        ledger.open(a.id, "renamed");
        assert_eq!(ledger.net(&a.id), 4);
        assert_eq!(ledger.balances()[&a.id].name, "ann");
        let z = PlayerId::default();
        ledger.open(z, "zed");
        assert_eq!(ledger.net(&z), 0);
        assert_eq!(ledger.settle().len(), 1);
    }
}
