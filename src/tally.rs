//! The tally engine: deterministic winner computation over the proposal
//! registry. Invoked exactly once per election, by
//! [`Election::tally_votes`](crate::Election::tally_votes).

use serde::{Deserialize, Serialize};

use crate::model::{Proposal, ProposalId};

/// The tallied winner, as returned by
/// [`Election::get_winner`](crate::Election::get_winner).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Winner {
    pub proposal_id: ProposalId,
    pub description: String,
    pub vote_count: u32,
}

/// Find the winning proposal: the lowest index attaining the maximum vote
/// count. A later proposal with an equal count never displaces an earlier one.
///
/// The registry is non-empty whenever this runs, because the workflow refuses
/// to close proposal registration on an empty registry.
pub(crate) fn winning_index(proposals: &[Proposal]) -> ProposalId {
    debug_assert!(!proposals.is_empty());
    let mut winner = 0;
    let mut max_count = 0;
    for (index, proposal) in proposals.iter().enumerate() {
        if proposal.vote_count > max_count {
            winner = index;
            max_count = proposal.vote_count;
        }
    }
    winner as ProposalId
}
