use super::settings::Settings;
use derby_betting::Payouts;
use derby_betting::ReadyPlayer;
use derby_cards::*;
use derby_core::*;
use derby_race::*;

/// One race and its settlement, fixed the moment it starts.
///
/// The outcome is computed up front; clients replay `race.timeline`
/// from `start`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Round {
    pub id: ID<Round>,
    #[serde(rename = "deckOrder")]
    pub deck: Deck,
    #[serde(rename = "gateThresholds")]
    pub thresholds: [Step; GATE_COUNT],
    #[serde(rename = "readyPlayers")]
    pub entrants: Vec<ReadyPlayer>,
    pub race: Outcome,
    pub payouts: Payouts,
    #[serde(rename = "raceStartAt")]
    pub start: Millis,
}

impl Round {
    pub fn play(deck: Deck, settings: &Settings, entrants: Vec<ReadyPlayer>, now: Millis) -> Self {
        let race = Race::simulate(deck.cards(), settings.track);
        let payouts = Payouts::compute(&entrants, race.winner, settings.bet);
        Self {
            id: ID::default(),
            thresholds: settings.track.thresholds(),
            deck,
            entrants,
            race,
            payouts,
            start: now + COUNTDOWN_MILLIS,
        }
    }
    pub fn winner(&self) -> Suit {
        self.race.winner
    }
    /// Instant the finish event plays.
    pub fn end(&self) -> Millis {
        self.start + self.race.timeline.duration()
    }
    /// Events already visible at `now`.
    pub fn visible(&self, now: Millis) -> &[Event] {
        match now.checked_sub(self.start) {
            Some(elapsed) => self.race.timeline.until(elapsed),
            None => &[],
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} wins a pool of {} among {} players",
            self.winner().name(),
            self.payouts.pool,
            self.entrants.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plays_the_whole_race_up_front() {
        let settings = Settings::new(5, 1, 8).unwrap();
        let deck = Deck::from(Card::parse("2c 3c 4c 5c 6c  2h 3h 4h 5h 6h 7h 8h 9h").unwrap());
        let entrants = vec![
            ReadyPlayer::new(PlayerId::default(), "ann", Suit::H, 1),
            ReadyPlayer::new(PlayerId::default(), "bob", Suit::S, 2),
        ];
        let round = Round::play(deck, &settings, entrants.clone(), 10_000);
        assert_eq!(round.winner(), Suit::H);
        assert_eq!(round.start, 13_000);
        assert_eq!(round.end(), 13_000 + 12_000);
        assert_eq!(round.thresholds, [2, 4, 5, 7, 8]);
        assert_eq!(round.payouts.delta(&entrants[0].id), 5);
        assert_eq!(round.payouts.delta(&entrants[1].id), -5);
        assert!(round.visible(12_999).is_empty());
        assert_eq!(round.visible(13_000).len(), 1);
        assert_eq!(round.visible(round.end()).len(), round.race.timeline.len());
    }
}
