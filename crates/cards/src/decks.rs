/// Number of 48-card decks combined into one shoe.
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
#[serde(try_from = "u8", into = "u8")]
pub enum Decks {
    #[default]
    One = 1,
    Two = 2,
    Three = 3,
}

impl Decks {
    pub const fn all() -> [Decks; 3] {
        [Decks::One, Decks::Two, Decks::Three]
    }
    pub fn count(&self) -> usize {
        *self as usize
    }
    /// Total cards across all combined decks.
    pub fn size(&self) -> usize {
        self.count() * super::Deck::REFERENCE
    }
}

/// u8 isomorphism
impl TryFrom<u8> for Decks {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Decks::One),
            2 => Ok(Decks::Two),
            3 => Ok(Decks::Three),
            _ => Err(format!("invalid deck count: {}", n)),
        }
    }
}
impl From<Decks> for u8 {
    fn from(d: Decks) -> u8 {
        d as u8
    }
}

impl std::fmt::Display for Decks {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.count())
    }
}
