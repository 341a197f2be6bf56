#![no_main]

use arbitrary::Arbitrary;
use ballot_ledger::{BallotError, BallotLedgerContract, BallotLedgerContractClient};
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env,
};

const VOTERS: usize = 6;

/// Actions modelling every ballot ledger entry point.
///
/// Candidate ids are left unbounded so out-of-range ids are exercised as
/// often as valid ones.
#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Vote { voter: u8, candidate_id: u32 },
    SmallVote { voter: u8, candidate_id: u8 },
    AdvanceTime { delta: u16 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(BallotLedgerContract, ());
    let client = BallotLedgerContractClient::new(&env, &contract_id);

    let count = client.candidates_count();
    let voters: Vec<Address> = (0..VOTERS).map(|_| Address::generate(&env)).collect();
    let mut expected = vec![0u64; count as usize];

    for action in actions {
        let (voter, candidate_id) = match action {
            FuzzAction::Vote { voter, candidate_id } => (voter, candidate_id),
            FuzzAction::SmallVote { voter, candidate_id } => (voter, candidate_id as u32 % (count + 2)),
            FuzzAction::AdvanceTime { delta } => {
                let ts = env.ledger().timestamp().saturating_add(delta as u64);
                env.ledger().set_timestamp(ts);
                continue;
            }
        };
        let voter = &voters[voter as usize % VOTERS];
        let had_voted = client.has_voted(voter);

        match client.try_vote(voter, &candidate_id) {
            Ok(_) => {
                assert!(!had_voted, "INVARIANT VIOLATION: second ballot accepted");
                assert!(candidate_id >= 1 && candidate_id <= count);
                expected[candidate_id as usize - 1] += 1;
            }
            Err(Ok(BallotError::AlreadyVoted)) => assert!(had_voted),
            Err(Ok(BallotError::InvalidCandidate)) => {
                assert!(!had_voted);
                assert!(candidate_id == 0 || candidate_id > count);
            }
            Err(Ok(e)) => panic!("vote returned {:?}", e),
            Err(Err(e)) => panic!("unexpected host error: {:?}", e),
        }

        // ── Post-action invariant checks ──
        let tallies: Vec<u64> = client.get_candidates().iter().map(|c| c.vote_count).collect();
        assert_eq!(tallies, expected, "INVARIANT VIOLATION: tally drift");

        let voted = voters.iter().filter(|v| client.has_voted(v)).count() as u64;
        let sum: u64 = tallies.iter().sum();
        assert_eq!(sum, voted, "INVARIANT VIOLATION: sum(vote_count) != voted identities");
        assert_eq!(sum, client.total_votes());
    }
});
