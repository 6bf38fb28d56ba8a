use serde::{Deserialize, Serialize};

use crate::model::{Identity, ProposalId, WorkflowStatus};

/// A notification emitted by a successful mutation.
///
/// Events are appended to the election's journal in emission order, atomically
/// with the mutation they describe: a rejected call emits nothing. The journal
/// is informational; the presentation layer is expected to re-fetch full state
/// after each mutating call rather than patch its view from individual events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum Event {
    /// The authority registered a new voter.
    #[serde(rename_all = "camelCase")]
    VoterRegistered { voter: Identity },
    /// A registered voter submitted a proposal.
    #[serde(rename_all = "camelCase")]
    ProposalRegistered { proposal_id: ProposalId },
    /// The workflow advanced one phase.
    #[serde(rename_all = "camelCase")]
    WorkflowStatusChange {
        previous: WorkflowStatus,
        next: WorkflowStatus,
    },
    /// A registered voter cast their vote.
    #[serde(rename_all = "camelCase")]
    Voted {
        voter: Identity,
        proposal_id: ProposalId,
    },
}
