use super::ready::ReadyPlayer;
use super::remainder::Recipient;
use super::remainder::Remainder;
use derby_cards::Suit;
use derby_core::*;
use std::collections::BTreeMap;

/// Point deltas for one round.
///
/// Stakes are always forfeited first, so a losing player's delta is minus
/// the bet. The pool is split by integer division among the players who
/// backed the winner, or among every player when nobody did; the remainder
/// goes one point each to the earliest players to ready up. Deltas always
/// sum to zero.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Payouts {
    #[serde(rename = "payouts")]
    pub deltas: BTreeMap<PlayerId, Points>,
    #[serde(rename = "remainderInfo")]
    pub remainder: Remainder,
    #[serde(rename = "totalPool")]
    pub pool: Points,
}

impl Payouts {
    /// An empty `entrants` slice yields an empty round with no pool.
    pub fn compute(entrants: &[ReadyPlayer], winner: Suit, bet: Points) -> Self {
        let pool = entrants.len() as Points * bet;
        let mut deltas = entrants
            .iter()
            .map(|p| (p.id, -bet))
            .collect::<BTreeMap<_, _>>();
        let mut queue = entrants.iter().collect::<Vec<_>>();
        queue.sort_by_key(|p| p.ready);
        let winners = queue
            .iter()
            .copied()
            .filter(|p| p.backs(winner))
            .collect::<Vec<_>>();
        let shares = if winners.is_empty() { queue } else { winners };
        if shares.is_empty() {
            return Self::default();
        }
        let n = shares.len() as Points;
        let base = pool / n;
        let count = pool % n;
        for player in shares.iter() {
            *deltas.entry(player.id).or_default() += base;
        }
        let recipients = shares
            .iter()
            .take(count as usize)
            .map(|p| Recipient::from(*p))
            .collect::<Vec<_>>();
        for recipient in recipients.iter() {
            *deltas.entry(recipient.id).or_default() += 1;
        }
        log::debug!(
            "pool {} split {} ways: {} each, {} left over",
            pool,
            n,
            base,
            count
        );
        Self {
            deltas,
            remainder: Remainder { count, recipients },
            pool,
        }
    }
    /// This round's delta for one player, zero if they did not play.
    pub fn delta(&self, id: &PlayerId) -> Points {
        self.deltas.get(id).copied().unwrap_or_default()
    }
    /// Sum of all deltas.
    pub fn sum(&self) -> Points {
        self.deltas.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn player(name: &str, suit: Suit, ready: Millis) -> ReadyPlayer {
        ReadyPlayer::new(PlayerId::default(), name, suit, ready)
    }

    #[test]
    fn two_winners_split_evenly() {
        let a = player("ann", Suit::S, 10);
        let b = player("bob", Suit::S, 20);
        let c = player("cat", Suit::H, 30);
        let payouts = Payouts::compute(&[a.clone(), b.clone(), c.clone()], Suit::S, 10);
        assert_eq!(payouts.pool, 30);
        assert_eq!(payouts.delta(&a.id), 5);
        assert_eq!(payouts.delta(&b.id), 5);
        assert_eq!(payouts.delta(&c.id), -10);
        assert_eq!(payouts.remainder, Remainder::default());
    }

    #[test]
    fn everyone_wins_breaks_even() {
        let players = [
            player("ann", Suit::D, 1),
            player("bob", Suit::D, 2),
            player("cat", Suit::D, 3),
        ];
        let payouts = Payouts::compute(&players, Suit::D, 10);
        assert_eq!(payouts.pool, 30);
        assert!(players.iter().all(|p| payouts.delta(&p.id) == 0));
    }

    #[test]
    fn single_winner_takes_pool() {
        let winner = player("ann", Suit::C, 100);
        let loser = player("bob", Suit::H, 50);
        let payouts = Payouts::compute(&[winner.clone(), loser.clone()], Suit::C, 7);
        assert_eq!(payouts.pool, 14);
        assert_eq!(payouts.delta(&winner.id), 7);
        assert_eq!(payouts.delta(&loser.id), -7);
    }

    #[test]
    fn remainder_goes_to_earliest_winner() {
        // pool 21 across two winners: 10 each, one left over
        let late = player("late", Suit::H, 200);
        let early = player("early", Suit::H, 100);
        let loser = player("loser", Suit::S, 50);
        let payouts = Payouts::compute(&[late.clone(), early.clone(), loser.clone()], Suit::H, 7);
        assert_eq!(payouts.delta(&early.id), 4);
        assert_eq!(payouts.delta(&late.id), 3);
        assert_eq!(payouts.delta(&loser.id), -7);
        assert_eq!(payouts.remainder.count, 1);
        assert_eq!(payouts.remainder.recipients, vec![Recipient::from(&early)]);
    }

    #[test]
    fn equal_timestamps_keep_entry_order() {
        // pool 20 across three winners: 6 each, two left over
        let players = [
            player("x", Suit::D, 5),
            player("y", Suit::D, 5),
            player("z", Suit::D, 5),
            player("w", Suit::C, 1),
        ];
        let payouts = Payouts::compute(&players, Suit::D, 5);
        let names = payouts
            .remainder
            .recipients
            .iter()
            .map(|r| r.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["x", "y"]);
        assert_eq!(payouts.delta(&players[2].id), 1);
    }

    #[test]
    fn nobody_backs_the_winner_refunds_everyone() {
        let players = [
            player("ann", Suit::S, 3),
            player("bob", Suit::H, 1),
            player("cat", Suit::D, 2),
        ];
        let payouts = Payouts::compute(&players, Suit::C, 9);
        assert_eq!(payouts.pool, 27);
        assert!(players.iter().all(|p| payouts.delta(&p.id) == 0));
        assert_eq!(payouts.remainder.count, 0);
        assert!(payouts.remainder.recipients.is_empty());
    }

    #[test]
    fn empty_round_is_empty() {
        let payouts = Payouts::compute(&[], Suit::S, 10);
        assert_eq!(payouts, Payouts::default());
    }

    #[test]
    fn deltas_always_sum_to_zero() {
        let ref mut rng = SmallRng::seed_from_u64(31);
        for _ in 0..500 {
            let n = rng.random_range(1..12);
            let bet = rng.random_range(1..=MAX_BET);
            let players = (0..n)
                .map(|i| {
                    let suit = Suit::all()[rng.random_range(0..4)];
                    player(&format!("p{}", i), suit, rng.random_range(0..1000))
                })
                .collect::<Vec<_>>();
            let winner = Suit::all()[rng.random_range(0..4)];
            let payouts = Payouts::compute(&players, winner, bet);
            assert_eq!(payouts.sum(), 0);
            assert_eq!(payouts.pool, n as Points * bet);
            assert_eq!(payouts.remainder.count, payouts.remainder.recipients.len() as Points);
            assert_eq!(payouts, Payouts::compute(&players, winner, bet));
        }
    }

    #[test]
    fn serializes_with_record_field_names() {
        let a = player("ann", Suit::S, 1);
        let json = serde_json::to_value(Payouts::compute(&[a.clone()], Suit::S, 3)).unwrap();
        assert_eq!(json["totalPool"], 3);
        assert_eq!(json["payouts"][a.id.to_string()], 0);
        assert_eq!(json["remainderInfo"]["remainder"], 0);
    }
}
