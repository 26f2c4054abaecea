use derby_core::*;
use rand::Rng;

/// Six-character session join code over `A-Z0-9`.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Code(String);

impl Code {
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }
    pub fn random_with<R>(rng: &mut R) -> Self
    where
        R: Rng,
    {
        Self(
            (0..CODE_LENGTH)
                .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())])
                .map(char::from)
                .collect(),
        )
    }
    /// Normalizes user input to the canonical upper-case form.
    pub fn parse(s: &str) -> Self {
        Self(s.trim().to_uppercase())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Arbitrary for Code {
    fn random() -> Self {
        Self::random()
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
