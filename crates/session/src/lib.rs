//! Multiplayer session model for card derby.
//!
//! A session is created by its master, joined by code, and cycles through
//! lobby, race, and victory until the master ends it. Every operation takes
//! the current time as an argument; nothing here reads a clock or touches
//! storage, so callers persist and broadcast the plain values.
//!
//! ## Core Types
//!
//! - [`Session`] — The session state machine and its players
//! - [`Settings`] — Validated bet, deck count, and track length
//! - [`Player`] — Name, PIN hash, pick, and ready stamp
//! - [`State`] — Lobby, racing, victory, or ended
//! - [`Round`] — One simulated race with its entrants and payouts
//! - [`Summary`] — Final balances and transfers
//!
//! ## Identity
//!
//! - [`Code`] — Six-character join code
//! - [`Pin`] — Hashed PIN
//!
//! ## Chat
//!
//! - [`Chat`] — A validated chat message
//! - [`Limiter`] — Sliding-window rate limiter keyed by identity
//! - [`Rejection`] — Why an operation was refused
mod chat;
mod code;
mod limiter;
mod pin;
mod player;
mod rejection;
mod round;
mod session;
mod settings;
mod state;
mod summary;

pub use chat::*;
pub use code::*;
pub use limiter::*;
pub use pin::*;
pub use player::*;
pub use rejection::*;
pub use round::*;
pub use session::*;
pub use settings::*;
pub use state::*;
pub use summary::*;
