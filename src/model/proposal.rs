use serde::{Deserialize, Serialize};

/// Dense zero-based index of a proposal, assigned in submission order.
/// A proposal's index is its permanent identifier; proposals are never
/// removed or reordered.
pub type ProposalId = u32;

/// A submitted candidate option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    /// Proposal text. Non-empty, immutable after submission.
    pub description: String,
    /// Number of votes received. Only incremented while the voting session
    /// is open.
    pub vote_count: u32,
}

impl Proposal {
    pub(crate) fn new(description: String) -> Self {
        Self {
            description,
            vote_count: 0,
        }
    }
}
