/// Card face value.
///
/// Ranks carry no weight in a race, only suits move horses, but they are
/// kept so every card in a multi-deck is a distinct physical card.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum Rank {
    #[default]
    #[serde(rename = "2")]
    Two = 0,
    #[serde(rename = "3")]
    Three = 1,
    #[serde(rename = "4")]
    Four = 2,
    #[serde(rename = "5")]
    Five = 3,
    #[serde(rename = "6")]
    Six = 4,
    #[serde(rename = "7")]
    Seven = 5,
    #[serde(rename = "8")]
    Eight = 6,
    #[serde(rename = "9")]
    Nine = 7,
    #[serde(rename = "10")]
    Ten = 8,
    #[serde(rename = "J")]
    Jack = 9,
    #[serde(rename = "Q")]
    Queen = 10,
    #[serde(rename = "K")]
    King = 11,
}

impl Rank {
    /// All twelve ranks, low to high. There is no ace.
    pub const fn all() -> [Rank; 12] {
        [
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
        ]
    }
}

/// u8 isomorphism
impl TryFrom<u8> for Rank {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Rank::all()
            .get(n as usize)
            .copied()
            .ok_or_else(|| format!("invalid rank u8: {}", n))
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Rank {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "10" | "T" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            _ => Err(format!("invalid rank str: {}", s)),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Two => "2",
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "10",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
            }
        )
    }
}
