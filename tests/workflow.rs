//! End-to-end election scenarios, driving the public surface the way a
//! presentation layer would: one caller identity per call, full state
//! re-fetched after each mutation.

use scrutin::{Election, Error, Event, Identity, WorkflowStatus};

fn owner() -> Identity {
    Identity::new("owner")
}

fn voters() -> [Identity; 3] {
    [
        Identity::new("voter1"),
        Identity::new("voter2"),
        Identity::new("voter3"),
    ]
}

fn init_logging() {
    log4rs_test_utils::test_logging::init_logging_once_for(["scrutin"], None, None);
}

/// An election with three registered voters, one proposal each, and the
/// voting session open.
fn election_ready_to_vote() -> Election {
    let mut election = Election::new(owner());
    let [a, b, c] = voters();
    for voter in [&a, &b, &c] {
        election.register_voter(&owner(), voter.clone()).unwrap();
    }
    election.start_proposals_registration(&owner()).unwrap();
    election.register_proposal(&a, "Raise the budget").unwrap();
    election.register_proposal(&b, "Lower taxes").unwrap();
    election.register_proposal(&c, "Improve services").unwrap();
    election.end_proposals_registration(&owner()).unwrap();
    election.start_voting_session(&owner()).unwrap();
    election
}

#[test]
fn full_election_lifecycle() {
    init_logging();
    let mut election = election_ready_to_vote();
    let [a, b, c] = voters();

    election.vote(&a, 2).unwrap();
    election.vote(&b, 2).unwrap();
    election.vote(&c, 1).unwrap();
    election.end_voting_session(&owner()).unwrap();

    assert_eq!(election.tally_votes(&owner()).unwrap(), 2);

    let winner = election.get_winner().unwrap();
    assert_eq!(winner.proposal_id, 2);
    assert_eq!(winner.description, "Improve services");
    assert_eq!(winner.vote_count, 2);
    assert_eq!(election.workflow_status(), WorkflowStatus::VotesTallied);
}

#[test]
fn ties_go_to_the_first_proposal_reaching_the_maximum() {
    let mut election = election_ready_to_vote();
    let [a, b, _] = voters();

    // Counts [1, 1, 0]: proposal 0 reaches the maximum first.
    election.vote(&a, 0).unwrap();
    election.vote(&b, 1).unwrap();
    election.end_voting_session(&owner()).unwrap();
    election.tally_votes(&owner()).unwrap();

    assert_eq!(election.winning_proposal_id(), Some(0));
}

#[test]
fn vote_counts_sum_to_the_number_of_voters_who_voted() {
    let mut election = election_ready_to_vote();
    let [a, b, c] = voters();

    election.vote(&a, 2).unwrap();
    election.vote(&b, 2).unwrap();
    // A failed vote must not count.
    assert_eq!(election.vote(&a, 0), Err(Error::AlreadyVoted));
    election.vote(&c, 1).unwrap();
    election.end_voting_session(&owner()).unwrap();

    let total: u32 = election.proposals().iter().map(|p| p.vote_count).sum();
    let voted = voters()
        .iter()
        .filter(|v| election.has_voter_voted(v))
        .count() as u32;
    assert_eq!(total, 3);
    assert_eq!(total, voted);
}

#[test]
fn bulk_and_indexed_proposal_reads_agree() {
    let election = election_ready_to_vote();
    let proposals = election.proposals();
    assert_eq!(proposals.len(), 3);
    for (index, proposal) in proposals.iter().enumerate() {
        assert_eq!(election.get_proposal(index as u32).unwrap(), proposal);
    }
}

#[test]
fn the_phase_only_ever_advances_one_step_at_a_time() {
    let mut election = Election::new(owner());
    let [a, _, _] = voters();
    election.register_voter(&owner(), a.clone()).unwrap();

    let mut last = election.workflow_status();
    assert_eq!(last, WorkflowStatus::RegisteringVoters);

    election.start_proposals_registration(&owner()).unwrap();
    election.register_proposal(&a, "Only proposal").unwrap();
    election.end_proposals_registration(&owner()).unwrap();
    election.start_voting_session(&owner()).unwrap();
    election.vote(&a, 0).unwrap();
    election.end_voting_session(&owner()).unwrap();
    election.tally_votes(&owner()).unwrap();

    // Replay the journal: each transition moves exactly one phase forward.
    for event in election.events() {
        if let Event::WorkflowStatusChange { previous, next } = event {
            assert_eq!(*previous, last);
            assert_eq!(previous.successor(), Some(*next));
            last = *next;
        }
    }
    assert_eq!(last, WorkflowStatus::VotesTallied);
}

#[test]
fn non_authority_callers_cannot_drive_the_workflow() {
    let mut election = election_ready_to_vote();
    let [a, _, _] = voters();

    assert_eq!(election.end_voting_session(&a), Err(Error::AccessDenied));
    assert_eq!(
        election.workflow_status(),
        WorkflowStatus::VotingSessionStarted
    );
    assert_eq!(
        election.register_voter(&a, Identity::new("friend")),
        Err(Error::AccessDenied)
    );
    assert!(!election.is_voter_registered(&Identity::new("friend")));
}

#[test]
fn rejected_calls_leave_no_trace_in_the_journal() {
    let mut election = election_ready_to_vote();
    let journal_len = election.events().len();

    let stranger = Identity::new("stranger");
    assert_eq!(election.vote(&stranger, 0), Err(Error::NotRegistered));
    assert_eq!(
        election.tally_votes(&owner()),
        Err(Error::InvalidPhase {
            expected: WorkflowStatus::VotingSessionEnded,
            actual: WorkflowStatus::VotingSessionStarted,
        })
    );

    assert_eq!(election.events().len(), journal_len);
}

#[test]
fn two_elections_are_fully_independent() {
    let mut first = election_ready_to_vote();
    let second = Election::new(Identity::new("someone else"));

    let [a, _, _] = voters();
    first.vote(&a, 0).unwrap();

    assert_eq!(second.workflow_status(), WorkflowStatus::RegisteringVoters);
    assert!(second.proposals().is_empty());
    assert!(!second.is_voter_registered(&a));
}

#[test]
fn the_journal_is_a_faithful_record_of_the_election() {
    let mut election = Election::new(owner());
    let [a, _, _] = voters();
    election.register_voter(&owner(), a.clone()).unwrap();
    election.start_proposals_registration(&owner()).unwrap();
    election.register_proposal(&a, "Only proposal").unwrap();

    assert_eq!(
        election.events(),
        &[
            Event::VoterRegistered { voter: a.clone() },
            Event::WorkflowStatusChange {
                previous: WorkflowStatus::RegisteringVoters,
                next: WorkflowStatus::ProposalsRegistrationStarted,
            },
            Event::ProposalRegistered { proposal_id: 0 },
        ]
    );
}
