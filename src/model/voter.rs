use serde::{Deserialize, Serialize};

use super::ProposalId;

/// A participant's registration record.
///
/// The default value is the never-registered record; voter reads for unknown
/// identities return it rather than failing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voter {
    /// Set once by the authority during voter registration, never reset.
    pub is_registered: bool,
    /// The proposal this voter backed, if they have voted. Set exactly once.
    pub voted_proposal_id: Option<ProposalId>,
}

impl Voter {
    /// A freshly registered voter that has not voted yet.
    pub(crate) fn registered() -> Self {
        Self {
            is_registered: true,
            voted_proposal_id: None,
        }
    }

    /// Whether this voter has cast their vote.
    pub fn has_voted(&self) -> bool {
        self.voted_proposal_id.is_some()
    }
}
