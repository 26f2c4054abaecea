use super::rejection::Rejection;
use derby_core::*;

/// SHA-256 hex digest of a player's PIN.
///
/// The PIN itself is never stored; two players are the same identity when
/// their names and digests match.
#[derive(Debug, Clone, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Pin(String);

impl Pin {
    /// Validates the PIN length and hashes it.
    pub fn new(pin: &str) -> Result<Self, Rejection> {
        if (PIN_MIN..=PIN_MAX).contains(&pin.chars().count()) {
            Ok(Self(Self::hash(pin)))
        } else {
            Err(Rejection::InvalidPin)
        }
    }
    pub fn hash(pin: &str) -> String {
        use sha2::Digest;
        sha2::Sha256::digest(pin.as_bytes())
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect()
    }
    pub fn matches(&self, pin: &str) -> bool {
        self.0 == Self::hash(pin)
    }
    pub fn digest(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_sha256_hex() {
        assert_eq!(
            Pin::hash("1234"),
            "03ac674216f3e15c761ee1a5e255f067953623c8b388b4459e13f978d7c846f4"
        );
    }

    #[test]
    fn matches_only_the_same_pin() {
        let pin = Pin::new("4321").unwrap();
        assert!(pin.matches("4321"));
        assert!(!pin.matches("1234"));
        assert_eq!(pin, Pin::new("4321").unwrap());
    }

    #[test]
    fn length_bounds() {
        assert_eq!(Pin::new("123"), Err(Rejection::InvalidPin));
        assert_eq!(Pin::new("1234567"), Err(Rejection::InvalidPin));
        assert!(Pin::new("123456").is_ok());
    }
}
