use super::rejection::Rejection;
use derby_core::*;

/// A chat line posted to a session.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Chat {
    #[serde(rename = "playerId")]
    pub from: PlayerId,
    #[serde(rename = "playerName")]
    pub name: String,
    pub message: String,
    #[serde(rename = "createdAt")]
    pub at: Millis,
}

impl Chat {
    /// Trims a message and checks it is non-empty. The length bound
    /// applies to the message as sent, surrounding whitespace included.
    pub fn validate(message: &str) -> Result<&str, Rejection> {
        match message.trim() {
            "" => Err(Rejection::EmptyMessage),
            _ if message.chars().count() > CHAT_MAX => Err(Rejection::MessageTooLong),
            text => Ok(text),
        }
    }
}

impl std::fmt::Display for Chat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "<{}> {}", self.name, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_bounds() {
        assert_eq!(Chat::validate("  hi there \n"), Ok("hi there"));
        assert_eq!(Chat::validate("   "), Err(Rejection::EmptyMessage));
        assert_eq!(Chat::validate(""), Err(Rejection::EmptyMessage));
        let long = "x".repeat(CHAT_MAX);
        assert_eq!(Chat::validate(&long), Ok(long.as_str()));
        let longer = "x".repeat(CHAT_MAX + 1);
        assert_eq!(Chat::validate(&longer), Err(Rejection::MessageTooLong));
    }

    #[test]
    fn length_counts_surrounding_whitespace() {
        let padded = format!(" {} ", "x".repeat(CHAT_MAX - 1));
        assert_eq!(padded.chars().count(), CHAT_MAX + 1);
        assert_eq!(Chat::validate(&padded), Err(Rejection::MessageTooLong));
        let fits = format!(" {}", "x".repeat(CHAT_MAX - 1));
        assert_eq!(Chat::validate(&fits), Ok("x".repeat(CHAT_MAX - 1).as_str()));
    }
}
