use derby_core::HORSE_COUNT;

/// Card suit, doubling as a horse identity: each suit races in its own lane.
///
/// The declaration order (S < H < D < C) is the fixed priority used to
/// break ties when a race ends by leader decision.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum Suit {
    #[default]
    S = 0,
    H = 1,
    D = 2,
    C = 3,
}

impl Suit {
    /// All four suits in priority order.
    pub const fn all() -> [Suit; HORSE_COUNT] {
        [Suit::S, Suit::H, Suit::D, Suit::C]
    }
    /// Unicode suit symbol for display.
    pub fn ascii(&self) -> char {
        match self {
            Suit::S => '♠',
            Suit::H => '♥',
            Suit::D => '♦',
            Suit::C => '♣',
        }
    }
    /// Full English name.
    pub fn name(&self) -> &'static str {
        match self {
            Suit::S => "Spades",
            Suit::H => "Hearts",
            Suit::D => "Diamonds",
            Suit::C => "Clubs",
        }
    }
    /// Lane index, `0..4`, in priority order.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// u8 isomorphism
impl TryFrom<u8> for Suit {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Suit::S),
            1 => Ok(Suit::H),
            2 => Ok(Suit::D),
            3 => Ok(Suit::C),
            _ => Err(format!("invalid suit u8: {}", n)),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Suit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "S" | "♠" => Ok(Suit::S),
            "H" | "♥" => Ok(Suit::H),
            "D" | "♦" => Ok(Suit::D),
            "C" | "♣" => Ok(Suit::C),
            _ => Err(format!("invalid suit str: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Suit::S => write!(f, "s"),
            Suit::H => write!(f, "h"),
            Suit::D => write!(f, "d"),
            Suit::C => write!(f, "c"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for suit in Suit::all() {
            assert!(Ok(suit) == Suit::try_from(u8::from(suit)));
        }
        assert!(Suit::try_from(4u8).is_err());
    }

    #[test]
    fn priority_order() {
        assert!(Suit::S < Suit::H);
        assert!(Suit::H < Suit::D);
        assert!(Suit::D < Suit::C);
        assert_eq!(Suit::all().map(|s| s.index()), [0, 1, 2, 3]);
    }

    #[test]
    fn parses_letters_and_symbols() {
        assert_eq!(Suit::try_from("h"), Ok(Suit::H));
        assert_eq!(Suit::try_from("♣"), Ok(Suit::C));
        assert!(Suit::try_from("x").is_err());
    }

    #[test]
    fn serializes_as_letter() {
        assert_eq!(serde_json::to_string(&Suit::D).unwrap(), "\"D\"");
    }
}
