use super::event::Event;
use super::gate::Gate;
use super::outcome::Outcome;
use super::phase::Phase;
use super::positions::Positions;
use super::timeline::Timeline;
use super::track::Track;
use derby_cards::*;
use derby_core::*;

/// The race state machine.
///
/// The first [`GATE_COUNT`] cards of the deck are bound to the gates and
/// never drawn. Every later card moves its horse one step; the first horse
/// to reach the track length wins. Between draws the gates are checked once,
/// in index order, against the live positions. If the deck runs out the
/// leader wins, ties going to the earliest suit.
///
/// Time is a relative cursor advanced by fixed durations, so the same deck
/// and track always produce the same [`Timeline`].
#[derive(Debug, Clone)]
pub struct Race<'d> {
    deck: &'d [Card],
    length: Step,
    gates: Vec<Gate>,
    positions: Positions,
    draw: usize,
    clock: Millis,
    phase: Phase,
    timeline: Timeline,
}

impl<'d> Race<'d> {
    /// Simulates a whole race.
    pub fn simulate(deck: &'d [Card], track: Track) -> Outcome {
        Self::new(deck, track).run()
    }
    pub fn new(deck: &'d [Card], track: Track) -> Self {
        Self::course(deck, track.length())
    }
    /// A race over an arbitrary length, for exercising degenerate courses.
    pub(crate) fn course(deck: &'d [Card], length: Step) -> Self {
        let gates = Gate::bind(deck, length);
        Self {
            deck,
            length,
            draw: gates.len(),
            gates,
            positions: Positions::default(),
            clock: 0,
            phase: Phase::Drawing,
            timeline: Timeline::default(),
        }
    }
    /// Steps until finished and collects the result.
    pub fn run(mut self) -> Outcome {
        while !self.phase.is_finished() {
            self.step();
        }
        let winner = self.phase.winner().unwrap_or_else(|| self.positions.leader());
        Outcome {
            timeline: self.timeline,
            winner,
            positions: self.positions,
            gates: self.gates.iter().map(Gate::card).collect(),
        }
    }
    /// Advances the state machine by one transition.
    pub fn step(&mut self) -> Phase {
        self.phase = match self.phase {
            Phase::Drawing => self.draw(),
            Phase::Gating => self.check(),
            finished @ Phase::Finished(_) => finished,
        };
        self.phase
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn positions(&self) -> &Positions {
        &self.positions
    }
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }
    /// Cards not yet drawn.
    pub fn remaining(&self) -> usize {
        self.deck.len() - self.draw
    }

    fn draw(&mut self) -> Phase {
        let Some(card) = self.deck.get(self.draw).copied() else {
            return self.finish(self.positions.leader());
        };
        self.draw += 1;
        self.timeline.push(Event::Reveal {
            at: self.clock,
            card,
        });
        self.clock += REVEAL_MILLIS;
        let suit = card.suit();
        let position = self.positions.advance(suit);
        self.timeline.push(Event::Advance {
            at: self.clock,
            suit,
            position,
        });
        self.clock += ADVANCE_MILLIS;
        if position >= self.length {
            self.finish(suit)
        } else {
            Phase::Gating
        }
    }
    /// One pass in index order. A retreat from an earlier gate is visible to
    /// later gates in the same pass; passed gates are not revisited.
    fn check(&mut self) -> Phase {
        for i in 0..self.gates.len() {
            if self.gates[i].is_triggered(&self.positions) {
                self.open(i);
            }
        }
        Phase::Drawing
    }
    fn open(&mut self, i: usize) {
        let gate = &mut self.gates[i];
        gate.reveal();
        let card = gate.card();
        let index = gate.index();
        self.timeline.push(Event::Gate {
            at: self.clock,
            gate: index,
            card,
        });
        let suit = card.suit();
        let position = self.positions.retreat(suit);
        self.timeline.push(Event::Retreat {
            at: self.clock,
            suit,
            position,
        });
        self.clock += GATE_MILLIS;
        log::debug!("gate {} opened on {}, {} back to {}", index, card, suit, position);
    }
    fn finish(&mut self, winner: Suit) -> Phase {
        self.timeline.push(Event::Finish {
            at: self.clock,
            winner,
            positions: self.positions,
        });
        log::debug!(
            "{} wins at {}ms after {} draws [{}]",
            winner.name(),
            self.clock,
            self.draw - self.gates.len(),
            self.positions
        );
        Phase::Finished(winner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn cards(s: &str) -> Vec<Card> {
        Card::parse(s).unwrap()
    }

    fn gates_of(outcome: &Outcome) -> Vec<usize> {
        outcome
            .timeline
            .events()
            .iter()
            .filter_map(|e| match e {
                Event::Gate { gate, .. } => Some(*gate),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn gate_opens_once_and_pushes_its_horse_back() {
        // gate 0 (threshold 2 on an 8 track) is bound to a diamond
        let deck = cards("2d 3c 4c 5c 6c  2s 2h 3d 2c 3s 3h 4d 3c 5d");
        let outcome = Race::simulate(&deck, Track::L8);
        let events = outcome.timeline.events();
        assert_eq!(gates_of(&outcome), vec![0]);
        assert_eq!(
            events[16],
            Event::Gate {
                at: 12_000,
                gate: 0,
                card: deck[0],
            }
        );
        assert_eq!(
            events[17],
            Event::Retreat {
                at: 12_000,
                suit: Suit::D,
                position: 1,
            }
        );
        assert_eq!(
            events[19],
            Event::Advance {
                at: 13_500,
                suit: Suit::D,
                position: 2,
            }
        );
        // all horses tied at 2 when the deck runs out
        assert_eq!(
            events[20],
            Event::Finish {
                at: 14_000,
                winner: Suit::S,
                positions: Positions::from([2, 2, 2, 2]),
            }
        );
        assert_eq!(events.len(), 21);
    }

    #[test]
    fn first_to_the_line_wins() {
        let deck = cards("2c 3c 4c 5c 6c  2h 3h 4h 5h 6h 7h 8h 9h");
        let outcome = Race::simulate(&deck, Track::L8);
        assert_eq!(outcome.winner, Suit::H);
        assert_eq!(outcome.positions, Positions::from([0, 8, 0, 0]));
        assert_eq!(outcome.timeline.len(), 17);
        assert_eq!(outcome.timeline.duration(), 8 * (REVEAL_MILLIS + ADVANCE_MILLIS));
    }

    #[test]
    fn exhausted_deck_goes_to_leader_by_suit_order() {
        let deck = cards("2s 3s 4s 5s 6s  2d 2h");
        let outcome = Race::simulate(&deck, Track::L8);
        assert_eq!(outcome.winner, Suit::H);
        assert_eq!(outcome.positions, Positions::from([0, 1, 1, 0]));
        assert_eq!(outcome.timeline.duration(), 3000);
    }

    #[test]
    fn retreat_blocks_later_gates_in_the_same_pass() {
        // length 2: thresholds [1, 1, 2, 2, 2]
        let deck = cards("2s 3h 4d 5c 6s  2s 2h 2d 2c 3s 3h");
        let outcome = Race::course(&deck, 2).run();
        assert_eq!(gates_of(&outcome), vec![0, 1]);
        let events = outcome.timeline.events();
        // turn four opens gate 0 only: spades fall back below gate 1
        assert_eq!(
            events[8..10],
            [
                Event::Gate {
                    at: 6_000,
                    gate: 0,
                    card: deck[0],
                },
                Event::Retreat {
                    at: 6_000,
                    suit: Suit::S,
                    position: 0,
                },
            ]
        );
        assert!(matches!(events[10], Event::Reveal { at: 6_500, .. }));
        // turn five brings spades back and opens gate 1
        assert_eq!(
            events[12..14],
            [
                Event::Gate {
                    at: 8_000,
                    gate: 1,
                    card: deck[1],
                },
                Event::Retreat {
                    at: 8_000,
                    suit: Suit::H,
                    position: 0,
                },
            ]
        );
        assert_eq!(outcome.winner, Suit::S);
        assert_eq!(outcome.positions, Positions::from([1, 1, 1, 1]));
    }

    #[test]
    fn short_decks_finish_immediately() {
        let outcome = Race::simulate(&[], Track::L12);
        assert_eq!(outcome.winner, Suit::S);
        assert!(outcome.gates.is_empty());
        assert_eq!(outcome.timeline.len(), 1);
        assert!(outcome.timeline.finish().is_some());
        let deck = cards("2c 3d 4h");
        let outcome = Race::simulate(&deck, Track::L12);
        assert_eq!(outcome.gates, deck);
        assert_eq!(outcome.timeline.len(), 1);
    }

    #[test]
    fn phases_alternate_until_finished() {
        let deck = cards("2c 3c 4c 5c 6c  2h 3h");
        let mut race = Race::new(&deck, Track::L8);
        assert_eq!(race.phase(), Phase::Drawing);
        assert_eq!(race.step(), Phase::Gating);
        assert_eq!(race.step(), Phase::Drawing);
        assert_eq!(race.step(), Phase::Gating);
        assert_eq!(race.remaining(), 0);
        assert_eq!(race.step(), Phase::Drawing);
        assert_eq!(race.step(), Phase::Finished(Suit::H));
        assert_eq!(race.step(), Phase::Finished(Suit::H));
        assert_eq!(race.timeline().len(), 5);
    }

    #[test]
    fn random_races_terminate_with_one_finish() {
        let ref mut rng = SmallRng::seed_from_u64(2024);
        for decks in Decks::all() {
            for track in Track::all() {
                for _ in 0..64 {
                    let deck = Deck::shuffled_with(decks, rng);
                    let outcome = Race::simulate(deck.cards(), track);
                    let events = outcome.timeline.events();
                    assert_eq!(events.iter().filter(|e| e.is_finish()).count(), 1);
                    assert_eq!(
                        outcome.timeline.finish(),
                        Some(&Event::Finish {
                            at: outcome.timeline.duration(),
                            winner: outcome.winner,
                            positions: outcome.positions,
                        })
                    );
                    assert!(events.windows(2).all(|w| w[0].at() <= w[1].at()));
                    assert_eq!(outcome.gates, deck.cards()[..GATE_COUNT]);
                    let gates = gates_of(&outcome);
                    assert!(gates.windows(2).all(|w| w[0] < w[1]));
                    assert!(!gates.contains(&(GATE_COUNT - 1)));
                }
            }
        }
    }

    #[test]
    fn timeline_replays_to_final_positions() {
        let ref mut rng = SmallRng::seed_from_u64(99);
        for track in Track::all() {
            let deck = Deck::shuffled_with(Decks::Two, rng);
            let outcome = Race::simulate(deck.cards(), track);
            let mut replay = Positions::default();
            for event in outcome.timeline.events() {
                match event {
                    Event::Advance { suit, position, .. } => {
                        assert_eq!(replay.advance(*suit), *position)
                    }
                    Event::Retreat { suit, position, .. } => {
                        assert_eq!(replay.retreat(*suit), *position)
                    }
                    _ => {}
                }
            }
            assert_eq!(replay, outcome.positions);
            if outcome.positions.get(outcome.winner) < track.length() {
                assert_eq!(outcome.winner, outcome.positions.leader());
            }
        }
    }

    #[test]
    fn simulation_is_deterministic() {
        let deck = Deck::shuffled(Decks::Three);
        let a = Race::simulate(deck.cards(), Track::L24);
        let b = Race::simulate(deck.cards(), Track::L24);
        assert_eq!(a, b);
    }
}
