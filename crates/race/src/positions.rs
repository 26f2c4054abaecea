use derby_cards::Suit;
use derby_core::*;

/// How far each horse has run, in steps from the start line.
///
/// Serialized as `{ "S": n, "H": n, "D": n, "C": n }`.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Positions {
    #[serde(rename = "S")]
    s: Step,
    #[serde(rename = "H")]
    h: Step,
    #[serde(rename = "D")]
    d: Step,
    #[serde(rename = "C")]
    c: Step,
}

impl Positions {
    pub fn get(&self, suit: Suit) -> Step {
        match suit {
            Suit::S => self.s,
            Suit::H => self.h,
            Suit::D => self.d,
            Suit::C => self.c,
        }
    }
    fn lane(&mut self, suit: Suit) -> &mut Step {
        match suit {
            Suit::S => &mut self.s,
            Suit::H => &mut self.h,
            Suit::D => &mut self.d,
            Suit::C => &mut self.c,
        }
    }
    /// Moves a horse one step forward, returning its new position.
    pub fn advance(&mut self, suit: Suit) -> Step {
        let lane = self.lane(suit);
        *lane += 1;
        *lane
    }
    /// Moves a horse one step back, never past the start line.
    pub fn retreat(&mut self, suit: Suit) -> Step {
        let lane = self.lane(suit);
        *lane = lane.saturating_sub(1);
        *lane
    }
    /// Position of the horse furthest behind.
    pub fn slowest(&self) -> Step {
        Suit::all()
            .into_iter()
            .map(|s| self.get(s))
            .min()
            .unwrap_or_default()
    }
    /// The horse strictly furthest ahead; ties go to the earliest suit in
    /// S, H, D, C order.
    pub fn leader(&self) -> Suit {
        Suit::all()
            .into_iter()
            .fold(Suit::S, |best, s| if self.get(s) > self.get(best) { s } else { best })
    }
    /// `(suit, position)` pairs in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (Suit, Step)> + '_ {
        Suit::all().into_iter().map(|s| (s, self.get(s)))
    }
}

impl From<[Step; HORSE_COUNT]> for Positions {
    fn from([s, h, d, c]: [Step; HORSE_COUNT]) -> Self {
        Self { s, h, d, c }
    }
}

impl std::fmt::Display for Positions {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let lanes = self
            .iter()
            .map(|(suit, step)| format!("{}{}", suit.ascii(), step))
            .collect::<Vec<_>>();
        write!(f, "{}", lanes.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let positions = Positions::default();
        assert!(positions.iter().all(|(_, step)| step == 0));
        assert_eq!(positions.leader(), Suit::S);
    }

    #[test]
    fn retreat_clamps_at_start() {
        let mut positions = Positions::default();
        assert_eq!(positions.retreat(Suit::H), 0);
        assert_eq!(positions.advance(Suit::H), 1);
        assert_eq!(positions.retreat(Suit::H), 0);
        assert_eq!(positions.retreat(Suit::H), 0);
    }

    #[test]
    fn leader_breaks_ties_by_suit_order() {
        assert_eq!(Positions::from([1, 3, 3, 2]).leader(), Suit::H);
        assert_eq!(Positions::from([0, 0, 4, 4]).leader(), Suit::D);
        assert_eq!(Positions::from([2, 2, 2, 2]).leader(), Suit::S);
        assert_eq!(Positions::from([2, 2, 2, 5]).leader(), Suit::C);
    }

    #[test]
    fn slowest_is_minimum() {
        assert_eq!(Positions::from([4, 1, 3, 2]).slowest(), 1);
    }

    #[test]
    fn serializes_by_suit_letter() {
        let json = serde_json::to_string(&Positions::from([1, 2, 3, 4])).unwrap();
        assert_eq!(json, r#"{"S":1,"H":2,"D":3,"C":4}"#);
    }
}
