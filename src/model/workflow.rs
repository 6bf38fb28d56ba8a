use std::fmt::{self, Display, Formatter};

use serde_repr::{Deserialize_repr, Serialize_repr};

/// Phases of the election lifecycle, in strict forward-only order.
///
/// Serialized as its integer discriminant, which is also the value the
/// presentation layer receives.
#[derive(
    Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize_repr, Deserialize_repr,
)]
#[repr(u8)]
pub enum WorkflowStatus {
    /// The authority is registering voters. Initial phase.
    RegisteringVoters = 0,
    /// Registered voters may submit proposals.
    ProposalsRegistrationStarted = 1,
    /// Proposal submission is closed; voting has not yet begun.
    ProposalsRegistrationEnded = 2,
    /// Registered voters may cast their vote.
    VotingSessionStarted = 3,
    /// Voting is closed; votes have not yet been tallied.
    VotingSessionEnded = 4,
    /// The winner has been determined. Terminal phase.
    VotesTallied = 5,
}

impl WorkflowStatus {
    /// The next phase in the workflow, or `None` from the terminal phase.
    /// Phases are never skipped and never revisited.
    pub fn successor(self) -> Option<WorkflowStatus> {
        match self {
            Self::RegisteringVoters => Some(Self::ProposalsRegistrationStarted),
            Self::ProposalsRegistrationStarted => Some(Self::ProposalsRegistrationEnded),
            Self::ProposalsRegistrationEnded => Some(Self::VotingSessionStarted),
            Self::VotingSessionStarted => Some(Self::VotingSessionEnded),
            Self::VotingSessionEnded => Some(Self::VotesTallied),
            Self::VotesTallied => None,
        }
    }
}

impl Display for WorkflowStatus {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}",
            match self {
                Self::RegisteringVoters => "registering voters",
                Self::ProposalsRegistrationStarted => "proposals registration open",
                Self::ProposalsRegistrationEnded => "proposals registration closed",
                Self::VotingSessionStarted => "voting session open",
                Self::VotingSessionEnded => "voting session closed",
                Self::VotesTallied => "votes tallied",
            }
        )
    }
}
