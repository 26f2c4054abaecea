//! Core type aliases, traits, and constants for card derby.
//!
//! This crate provides the foundational types and game parameters
//! shared by the deck, race, betting, and session crates.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Signed point amounts: bets, pools, payout deltas, net balances.
pub type Points = i64;
/// Horse position along the track, in steps from the start line.
pub type Step = usize;
/// Milliseconds. Relative offsets inside a race timeline, or wall-clock
/// instants supplied by the caller (never read from a clock here).
pub type Millis = u64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and simulation.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Generic ID wrapper providing compile-time type safety over uuid::Uuid.
pub struct ID<T> {
    inner: uuid::Uuid,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    pub fn inner(&self) -> uuid::Uuid {
        self.inner
    }
}

impl<T> From<ID<T>> for uuid::Uuid {
    fn from(id: ID<T>) -> Self {
        id.inner()
    }
}
impl<T> From<uuid::Uuid> for ID<T> {
    fn from(inner: uuid::Uuid) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

/// Fresh time-ordered (v7) identifier.
impl<T> Default for ID<T> {
    fn default() -> Self {
        Self::from(uuid::Uuid::now_v7())
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

/// Serialized as the bare UUID so IDs work as JSON map keys.
impl<T> serde::Serialize for ID<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.inner.serialize(serializer)
    }
}
impl<'de, T> serde::Deserialize<'de> for ID<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        uuid::Uuid::deserialize(deserializer).map(Self::from)
    }
}

/// Marker for player identities shared by betting and session records.
#[derive(Debug)]
pub enum Punter {}
/// Identity of one player within a session.
pub type PlayerId = ID<Punter>;

// ============================================================================
// RACE PARAMETERS
// ============================================================================
/// Number of gates along every track.
pub const GATE_COUNT: usize = 5;
/// Number of horses, one per suit.
pub const HORSE_COUNT: usize = 4;
/// Time spent revealing a drawn card.
pub const REVEAL_MILLIS: Millis = 1000;
/// Time spent moving a horse forward.
pub const ADVANCE_MILLIS: Millis = 500;
/// Time spent on a gate reveal and its retreat.
pub const GATE_MILLIS: Millis = 500;
/// Delay between starting a round and the published race start instant.
pub const COUNTDOWN_MILLIS: Millis = 3000;

// ============================================================================
// SESSION PARAMETERS
// ============================================================================
/// Largest bet a session may be created with.
pub const MAX_BET: Points = 999_999;
/// Ready players required to start a round.
pub const MIN_READY: usize = 2;
/// Player name length bounds, in characters.
pub const NAME_MIN: usize = 3;
pub const NAME_MAX: usize = 16;
/// PIN length bounds, in characters.
pub const PIN_MIN: usize = 4;
pub const PIN_MAX: usize = 6;
/// Length of a session join code.
pub const CODE_LENGTH: usize = 6;
/// Characters a session join code is drawn from.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

// ============================================================================
// CHAT PARAMETERS
// ============================================================================
/// Longest accepted chat message, in characters.
pub const CHAT_MAX: usize = 200;
/// Messages admitted per identity per window.
pub const CHAT_LIMIT: usize = 3;
/// Sliding window for chat rate limiting.
pub const CHAT_WINDOW: Millis = 1000;
/// Tracked identities at which a rate limiter first sweeps expired keys.
pub const CHAT_SWEEP: usize = 256;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;

    #[test]
    fn ids_are_unique() {
        let a = ID::<Marker>::default();
        let b = ID::<Marker>::default();
        assert!(a != b);
    }

    #[test]
    fn ids_serialize_as_bare_uuid() {
        let id = ID::<Marker>::default();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
        let back = serde_json::from_str::<ID<Marker>>(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn code_alphabet_is_alphanumeric() {
        assert_eq!(CODE_ALPHABET.len(), 36);
        assert!(CODE_ALPHABET.iter().all(u8::is_ascii_alphanumeric));
    }
}
