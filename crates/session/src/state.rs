/// Session lifecycle.
///
/// ```text
/// Lobby -> Racing -> Victory -> Racing -> ... -> Ended
///   ^                  |
///   +------------------+
/// ```
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum State {
    #[default]
    Lobby,
    Racing,
    Victory,
    Ended,
}

impl State {
    /// Whether a new round may begin.
    pub fn can_start(&self) -> bool {
        matches!(self, Self::Lobby | Self::Victory)
    }
    pub fn is_ended(&self) -> bool {
        matches!(self, Self::Ended)
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Lobby => write!(f, "LOBBY"),
            Self::Racing => write!(f, "RACING"),
            Self::Victory => write!(f, "VICTORY"),
            Self::Ended => write!(f, "ENDED"),
        }
    }
}
