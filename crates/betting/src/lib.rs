//! Round payouts and end-of-session settlement.
//!
//! Every ready player stakes the bet; the pool goes to those who backed the
//! winning horse, or back to everyone when nobody did. Integer division
//! leaves a remainder, handed out one point at a time by ready order. At
//! session end the accumulated balances are netted into pairwise transfers.
//!
//! ## Rounds
//!
//! - [`ReadyPlayer`] — A player's pick and ready time when a round starts
//! - [`Payouts`] — Per-player point deltas for one round
//! - [`Remainder`] — Who received the leftover points
//!
//! ## Sessions
//!
//! - [`Ledger`] — Running net balances across rounds
//! - [`Balance`] — One player's name and net points
//! - [`Settlement`] — Greedy netting of balances
//! - [`Transfer`] — One debtor-to-creditor payment
mod balance;
mod ledger;
mod payouts;
mod ready;
mod remainder;
mod settlement;
mod transfer;

pub use balance::*;
pub use ledger::*;
pub use payouts::*;
pub use ready::*;
pub use remainder::*;
pub use settlement::*;
pub use transfer::*;
