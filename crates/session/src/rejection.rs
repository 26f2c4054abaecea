/// Reasons a session operation is refused.
///
/// A rejected operation leaves the session unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    InvalidName,
    InvalidPin,
    InvalidBet,
    InvalidDecks,
    InvalidTrack,
    InvalidSuit,
    UnknownPlayer,
    NotMaster,
    Ended,
    Racing,
    CannotStart,
    NotEnoughPlayers,
    NoHorse,
    AlreadyReady,
    EmptyMessage,
    MessageTooLong,
    TooFast,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName => write!(f, "invalid name"),
            Self::InvalidPin => write!(f, "invalid PIN"),
            Self::InvalidBet => write!(f, "invalid bet"),
            Self::InvalidDecks => write!(f, "invalid number of decks"),
            Self::InvalidTrack => write!(f, "invalid track length"),
            Self::InvalidSuit => write!(f, "invalid suit"),
            Self::UnknownPlayer => write!(f, "player not found"),
            Self::NotMaster => write!(f, "not master"),
            Self::Ended => write!(f, "session has ended"),
            Self::Racing => write!(f, "race in progress"),
            Self::CannotStart => write!(f, "cannot start now"),
            Self::NotEnoughPlayers => write!(f, "need at least 2 ready players"),
            Self::NoHorse => write!(f, "select a horse first"),
            Self::AlreadyReady => write!(f, "cannot change horse when ready"),
            Self::EmptyMessage => write!(f, "empty message"),
            Self::MessageTooLong => write!(f, "message too long"),
            Self::TooFast => write!(f, "too fast"),
        }
    }
}

impl std::error::Error for Rejection {}
