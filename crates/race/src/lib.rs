//! Deterministic card-driven horse race simulation.
//!
//! A race is a pure function of a shuffled deck and a track length. The
//! simulator runs the whole race up front and records every visible step as
//! an [`Event`] stamped with a relative offset, so any number of clients can
//! replay one persisted [`Timeline`] against a shared start instant.
//!
//! ## Course
//!
//! - [`Track`] — Track length: 8, 12, 16, 20, or 24 steps
//! - [`Gate`] — One of five checkpoints, each bound to a face-down card
//! - [`Positions`] — How far each horse has run
//!
//! ## Simulation
//!
//! - [`Race`] — The draw/gate state machine
//! - [`Phase`] — Drawing, gating, or finished
//! - [`Outcome`] — Timeline, winner, final positions, and gate cards
//!
//! ## Replay
//!
//! - [`Event`] — Card reveal, advance, gate reveal, retreat, finish
//! - [`Timeline`] — Ordered events with offset-based slicing
mod event;
mod gate;
mod outcome;
mod phase;
mod positions;
mod race;
mod timeline;
mod track;

pub use event::*;
pub use gate::*;
pub use outcome::*;
pub use phase::*;
pub use positions::*;
pub use race::*;
pub use timeline::*;
pub use track::*;
