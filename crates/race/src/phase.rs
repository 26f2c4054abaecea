use derby_cards::Suit;

/// Where the race state machine stands.
///
/// `Drawing` hands over to `Gating` after every draw that does not win;
/// `Gating` hands back to `Drawing` after one pass over the gates. Both can
/// reach `Finished`, which is terminal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    #[default]
    Drawing,
    Gating,
    Finished(Suit),
}

impl Phase {
    pub fn is_finished(&self) -> bool {
        matches!(self, Phase::Finished(_))
    }
    pub fn winner(&self) -> Option<Suit> {
        match self {
            Phase::Finished(suit) => Some(*suit),
            _ => None,
        }
    }
}
