use super::balance::Balance;
use super::transfer::Transfer;
use derby_core::*;
use std::collections::BTreeMap;

/// Greedy debt netting.
///
/// Creditors are taken largest first, debtors most-indebted first, and the
/// two fronts are matched against each other until one side runs dry. Each
/// match clears at least one party, so at most `creditors + debtors - 1`
/// transfers are produced. Zero balances never appear.
pub struct Settlement;

impl Settlement {
    pub fn compute(balances: &BTreeMap<PlayerId, Balance>) -> Vec<Transfer> {
        let mut creditors = balances
            .iter()
            .filter(|(_, b)| b.is_creditor())
            .map(|(id, b)| (*id, b, b.net))
            .collect::<Vec<_>>();
        let mut debtors = balances
            .iter()
            .filter(|(_, b)| b.is_debtor())
            .map(|(id, b)| (*id, b, -b.net))
            .collect::<Vec<_>>();
        creditors.sort_by_key(|(_, _, credit)| std::cmp::Reverse(*credit));
        debtors.sort_by_key(|(_, _, debt)| std::cmp::Reverse(*debt));
        let mut transfers = Vec::new();
        let (mut i, mut j) = (0, 0);
        while i < debtors.len() && j < creditors.len() {
            let amount = std::cmp::min(debtors[i].2, creditors[j].2);
            let (from_id, debtor, _) = debtors[i];
            let (to_id, creditor, _) = creditors[j];
            transfers.push(Transfer {
                from_id,
                from_name: debtor.name.clone(),
                to_id,
                to_name: creditor.name.clone(),
                amount,
            });
            debtors[i].2 -= amount;
            creditors[j].2 -= amount;
            if debtors[i].2 == 0 {
                i += 1;
            }
            if creditors[j].2 == 0 {
                j += 1;
            }
        }
        log::debug!(
            "{} creditors and {} debtors settled in {} transfers",
            creditors.len(),
            debtors.len(),
            transfers.len()
        );
        transfers
    }
}
