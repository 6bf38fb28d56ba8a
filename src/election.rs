//! The election itself: workflow controller, access guard, and owner of the
//! voter and proposal registries.

use std::collections::HashMap;

use log::{info, warn};

use crate::{
    error::{Error, Result},
    event::Event,
    model::{Identity, Proposal, ProposalId, Voter, WorkflowStatus},
    tally::{self, Winner},
};

/// A single election, driven through a strict forward-only workflow by one
/// administrative authority.
///
/// There is no ambient state: each `Election` is an independent value, and
/// every call takes the caller's identity explicitly. Mutating operations run
/// all of their guards before touching any state, so a rejected call leaves
/// the election, including its event journal, untouched.
#[derive(Debug)]
pub struct Election {
    /// The administrative identity. Immutable after creation.
    authority: Identity,
    /// Current workflow phase.
    status: WorkflowStatus,
    /// The voter registry. Records are created by the authority and never
    /// deleted.
    voters: HashMap<Identity, Voter>,
    /// The proposal registry, in submission order. Proposals are never
    /// removed or reordered.
    proposals: Vec<Proposal>,
    /// The winning proposal, set exactly once on entry into `VotesTallied`.
    winning_proposal: Option<ProposalId>,
    /// Journal of notifications, in emission order.
    events: Vec<Event>,
}

impl Election {
    /// Create a new election administered by `authority`, in the
    /// `RegisteringVoters` phase.
    pub fn new(authority: Identity) -> Self {
        info!("new election administered by {authority}");
        Self {
            authority,
            status: WorkflowStatus::RegisteringVoters,
            voters: HashMap::new(),
            proposals: Vec::new(),
            winning_proposal: None,
            events: Vec::new(),
        }
    }

    // === Mutating operations ===

    /// Register `voter`, creating its registry record.
    ///
    /// Authority-only; `RegisteringVoters` phase only. Rejects the null
    /// identity and duplicate registrations.
    pub fn register_voter(&mut self, caller: &Identity, voter: Identity) -> Result<()> {
        self.ensure_authority(caller)?;
        self.ensure_status(WorkflowStatus::RegisteringVoters)?;
        if voter.is_null() {
            return Err(Error::InvalidIdentity);
        }
        if self.voters.contains_key(&voter) {
            warn!("{voter} is already registered");
            return Err(Error::AlreadyRegistered);
        }

        info!("registered voter {voter}");
        self.events.push(Event::VoterRegistered {
            voter: voter.clone(),
        });
        self.voters.insert(voter, Voter::registered());
        Ok(())
    }

    /// Open proposal registration. Authority-only; advances
    /// `RegisteringVoters` to `ProposalsRegistrationStarted`.
    pub fn start_proposals_registration(&mut self, caller: &Identity) -> Result<()> {
        self.ensure_authority(caller)?;
        self.ensure_status(WorkflowStatus::RegisteringVoters)?;
        self.advance(WorkflowStatus::ProposalsRegistrationStarted);
        Ok(())
    }

    /// Submit a proposal, returning its newly assigned index.
    ///
    /// Registered voters only (the authority included, if registered);
    /// `ProposalsRegistrationStarted` phase only. A voter may submit any
    /// number of proposals. The description must be non-empty.
    pub fn register_proposal(
        &mut self,
        caller: &Identity,
        description: impl Into<String>,
    ) -> Result<ProposalId> {
        let description = description.into();
        self.ensure_registered(caller)?;
        self.ensure_status(WorkflowStatus::ProposalsRegistrationStarted)?;
        if description.is_empty() {
            return Err(Error::EmptyDescription);
        }

        let proposal_id = self.proposals.len() as ProposalId;
        info!("{caller} registered proposal {proposal_id}: \"{description}\"");
        self.proposals.push(Proposal::new(description));
        self.events.push(Event::ProposalRegistered { proposal_id });
        Ok(proposal_id)
    }

    /// Close proposal registration. Authority-only; advances
    /// `ProposalsRegistrationStarted` to `ProposalsRegistrationEnded`.
    /// Refuses to close on an empty registry, which guarantees the tally
    /// engine always has at least one proposal to scan.
    pub fn end_proposals_registration(&mut self, caller: &Identity) -> Result<()> {
        self.ensure_authority(caller)?;
        self.ensure_status(WorkflowStatus::ProposalsRegistrationStarted)?;
        if self.proposals.is_empty() {
            warn!("refusing to close proposal registration with no proposals");
            return Err(Error::NoProposals);
        }
        self.advance(WorkflowStatus::ProposalsRegistrationEnded);
        Ok(())
    }

    /// Open the voting session. Authority-only; advances
    /// `ProposalsRegistrationEnded` to `VotingSessionStarted`.
    pub fn start_voting_session(&mut self, caller: &Identity) -> Result<()> {
        self.ensure_authority(caller)?;
        self.ensure_status(WorkflowStatus::ProposalsRegistrationEnded)?;
        self.advance(WorkflowStatus::VotingSessionStarted);
        Ok(())
    }

    /// Cast the caller's vote for the proposal at `proposal_id`.
    ///
    /// Registered voters only; `VotingSessionStarted` phase only; at most
    /// once per voter.
    pub fn vote(&mut self, caller: &Identity, proposal_id: ProposalId) -> Result<()> {
        self.ensure_registered(caller)?;
        self.ensure_status(WorkflowStatus::VotingSessionStarted)?;
        if self.get_voter(caller).has_voted() {
            warn!("{caller} attempted to vote twice");
            return Err(Error::AlreadyVoted);
        }
        let index = proposal_id as usize;
        if index >= self.proposals.len() {
            return Err(Error::NoSuchProposal(proposal_id));
        }

        self.proposals[index].vote_count += 1;
        // Presence was established by the registration guard.
        if let Some(voter) = self.voters.get_mut(caller) {
            voter.voted_proposal_id = Some(proposal_id);
        }
        info!("{caller} voted for proposal {proposal_id}");
        self.events.push(Event::Voted {
            voter: caller.clone(),
            proposal_id,
        });
        Ok(())
    }

    /// Close the voting session. Authority-only; advances
    /// `VotingSessionStarted` to `VotingSessionEnded`. Vote counts are
    /// immutable from this point on.
    pub fn end_voting_session(&mut self, caller: &Identity) -> Result<()> {
        self.ensure_authority(caller)?;
        self.ensure_status(WorkflowStatus::VotingSessionStarted)?;
        self.advance(WorkflowStatus::VotingSessionEnded);
        Ok(())
    }

    /// Tally the votes, recording and returning the winning proposal's index.
    ///
    /// Authority-only; advances `VotingSessionEnded` to the terminal
    /// `VotesTallied` phase. The first proposal to attain the maximum vote
    /// count wins.
    pub fn tally_votes(&mut self, caller: &Identity) -> Result<ProposalId> {
        self.ensure_authority(caller)?;
        self.ensure_status(WorkflowStatus::VotingSessionEnded)?;

        let winner = tally::winning_index(&self.proposals);
        self.winning_proposal = Some(winner);
        self.advance(WorkflowStatus::VotesTallied);
        info!("votes tallied, proposal {winner} wins");
        Ok(winner)
    }

    // === Read-only operations ===
    //
    // Reads are unrestricted: any caller, any phase (except `get_winner`,
    // which requires the tally to have run).

    /// The administrative identity.
    pub fn authority(&self) -> &Identity {
        &self.authority
    }

    /// The current workflow phase.
    pub fn workflow_status(&self) -> WorkflowStatus {
        self.status
    }

    /// The registry record for `identity`. Never-registered identities get
    /// the default all-false record.
    pub fn get_voter(&self, identity: &Identity) -> Voter {
        self.voters.get(identity).copied().unwrap_or_default()
    }

    pub fn is_voter_registered(&self, identity: &Identity) -> bool {
        self.get_voter(identity).is_registered
    }

    pub fn has_voter_voted(&self, identity: &Identity) -> bool {
        self.get_voter(identity).has_voted()
    }

    /// The proposal `identity` voted for, if they have voted.
    pub fn voter_voted_proposal(&self, identity: &Identity) -> Option<ProposalId> {
        self.get_voter(identity).voted_proposal_id
    }

    /// The proposal at `proposal_id`.
    pub fn get_proposal(&self, proposal_id: ProposalId) -> Result<&Proposal> {
        self.proposals
            .get(proposal_id as usize)
            .ok_or(Error::NoSuchProposal(proposal_id))
    }

    /// All proposals, in submission order.
    pub fn proposals(&self) -> &[Proposal] {
        &self.proposals
    }

    /// The winning proposal's index, once the votes have been tallied.
    pub fn winning_proposal_id(&self) -> Option<ProposalId> {
        self.winning_proposal
    }

    /// The tallied winner. Fails with `NotTalliedYet` before the terminal
    /// phase.
    pub fn get_winner(&self) -> Result<Winner> {
        let proposal_id = self.winning_proposal.ok_or(Error::NotTalliedYet)?;
        let proposal = self.get_proposal(proposal_id)?;
        Ok(Winner {
            proposal_id,
            description: proposal.description.clone(),
            vote_count: proposal.vote_count,
        })
    }

    /// The notification journal, in emission order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    // === Access guard & workflow controller internals ===

    /// Guard for authority-only operations.
    fn ensure_authority(&self, caller: &Identity) -> Result<()> {
        if caller == &self.authority {
            Ok(())
        } else {
            warn!("{caller} attempted an authority-only operation");
            Err(Error::AccessDenied)
        }
    }

    /// Guard for registered-voter operations.
    fn ensure_registered(&self, caller: &Identity) -> Result<()> {
        if self.get_voter(caller).is_registered {
            Ok(())
        } else {
            warn!("{caller} is not a registered voter");
            Err(Error::NotRegistered)
        }
    }

    /// Guard for phase legality.
    fn ensure_status(&self, expected: WorkflowStatus) -> Result<()> {
        if self.status == expected {
            Ok(())
        } else {
            Err(Error::InvalidPhase {
                expected,
                actual: self.status,
            })
        }
    }

    /// Advance the workflow by exactly one phase, emitting the transition.
    /// Every phase change goes through here.
    fn advance(&mut self, next: WorkflowStatus) {
        debug_assert_eq!(self.status.successor(), Some(next));
        let previous = std::mem::replace(&mut self.status, next);
        info!("workflow advanced: {previous} -> {next}");
        self.events.push(Event::WorkflowStatusChange { previous, next });
    }
}
