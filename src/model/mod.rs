//! Records shared across the election core: caller identities, the two
//! registry entry types, and the workflow phase enum.

mod identity;
mod proposal;
mod voter;
mod workflow;

pub use identity::Identity;
pub use proposal::{Proposal, ProposalId};
pub use voter::Voter;
pub use workflow::WorkflowStatus;
