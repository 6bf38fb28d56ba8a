//! Core state machine for a single-administrator voting process.
//!
//! An [`Election`] moves through six forward-only phases: the authority
//! registers voters, opens and closes proposal registration, opens and
//! closes the voting session, then tallies the votes. Registered voters may
//! submit proposals while registration is open and cast exactly one vote
//! while the session is open. The first proposal to attain the maximum vote
//! count wins.
//!
//! The crate is transport-agnostic: every call takes the caller's identity
//! explicitly, rejected calls return a typed [`Error`] without touching any
//! state, and successful mutations append an [`Event`] to the election's
//! journal for the presentation layer to observe.

pub mod election;
pub mod error;
pub mod event;
pub mod model;
pub mod tally;

pub use election::Election;
pub use error::{Error, Result};
pub use event::Event;
pub use model::{Identity, Proposal, ProposalId, Voter, WorkflowStatus};
pub use tally::Winner;
