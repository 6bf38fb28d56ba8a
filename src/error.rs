use thiserror::Error;

use crate::model::{ProposalId, WorkflowStatus};

pub type Result<T> = std::result::Result<T, Error>;

/// Every way a call into the election core can be rejected.
///
/// All failures are synchronous and leave the election state untouched; none
/// of them poison the election, which stays usable after any rejected call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Caller is not the election authority.
    #[error("caller is not the election authority")]
    AccessDenied,
    /// Operation attempted outside its required workflow phase.
    #[error("operation requires phase \"{expected}\", but the election is in phase \"{actual}\"")]
    InvalidPhase {
        expected: WorkflowStatus,
        actual: WorkflowStatus,
    },
    /// The null identity cannot be registered as a voter.
    #[error("invalid identity")]
    InvalidIdentity,
    /// Caller is not a registered voter.
    #[error("caller is not a registered voter")]
    NotRegistered,
    /// A voter record already exists for this identity.
    #[error("voter is already registered")]
    AlreadyRegistered,
    /// The caller has already cast their vote.
    #[error("caller has already voted")]
    AlreadyVoted,
    /// Proposal descriptions must be non-empty.
    #[error("proposal description cannot be empty")]
    EmptyDescription,
    /// No proposal exists at the given index.
    #[error("no proposal exists at index {0}")]
    NoSuchProposal(ProposalId),
    /// Proposal registration cannot close before any proposal is submitted.
    #[error("no proposals have been registered")]
    NoProposals,
    /// The winner was requested before the votes were tallied.
    #[error("votes have not been tallied yet")]
    NotTalliedYet,
}
