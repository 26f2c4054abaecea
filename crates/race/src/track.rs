use super::gate::Gate;
use derby_core::*;

/// Track length in steps. The first horse to reach it wins.
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
pub enum Track {
    #[default]
    L8 = 8,
    L12 = 12,
    L16 = 16,
    L20 = 20,
    L24 = 24,
}

impl Track {
    pub const fn all() -> [Track; 5] {
        [Track::L8, Track::L12, Track::L16, Track::L20, Track::L24]
    }
    pub fn length(&self) -> Step {
        *self as Step
    }
    /// Gate thresholds along this track.
    pub fn thresholds(&self) -> [Step; GATE_COUNT] {
        Gate::thresholds(self.length())
    }
}

/// u8 isomorphism
impl TryFrom<u8> for Track {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            8 => Ok(Track::L8),
            12 => Ok(Track::L12),
            16 => Ok(Track::L16),
            20 => Ok(Track::L20),
            24 => Ok(Track::L24),
            _ => Err(format!("invalid track length: {}", n)),
        }
    }
}
impl From<Track> for u8 {
    fn from(t: Track) -> u8 {
        t as u8
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.length())
    }
}
