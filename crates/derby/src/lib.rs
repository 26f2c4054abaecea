//! Card-driven horse race betting engine.
//!
//! This facade crate re-exports all public derby crates for convenient access.
//!
//! ## Crate Organization
//!
//! ### Core Types
//! - [`core`] — Type aliases, constants, and shared traits
//! - [`cards`] — Suits, ranks, cards, and deck shuffling
//!
//! ### Engine
//! - [`race`] — Deterministic race simulation and event timeline
//! - [`betting`] — Round payouts and debt settlement
//!
//! ### Application
//! - [`session`] — Lobby, rounds, chat, and end-of-session summary

pub use derby_core    as core;
pub use derby_cards   as cards;
pub use derby_race    as race;
pub use derby_betting as betting;
pub use derby_session as session;

// Re-export commonly used types at the root
pub use derby_core::*;
