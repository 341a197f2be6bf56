#![no_std]

//! # Ballot Ledger
//!
//! A single-poll voting contract:
//!
//! - **Fixed registry**: candidates are seeded once by the constructor with
//!   dense ids `1..=candidates_count` and never added or removed.
//! - **Exactly-once voting**: each voter address moves `NotVoted → Voted`
//!   through one successful `vote` call; the tally increment, the voter record
//!   and the running total are written in the same invocation.
//! - **Read-after-write**: every query reads the same storage the last
//!   successful `vote` wrote.
//!
//! The Soroban host authenticates `voter` and executes invocations one at a
//! time, each atomically, so the check-then-write sequence in `vote` cannot
//! interleave with another call.

pub mod ballot;
pub mod events;
pub mod registry;
pub mod voters;

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

pub use ballot::{BallotError, Candidate, CandidateId, VoterRecord};

// ── Contract ──────────────────────────────────────────────────────────────────

#[contract]
pub struct BallotLedgerContract;

#[contractimpl]
impl BallotLedgerContract {
    /// Seed the default candidate registry. Runs once, at deployment.
    pub fn __constructor(env: Env) {
        let count = registry::seed_defaults(&env);
        events::publish_initialized(&env, count);
    }

    // ── Voting ────────────────────────────────────────────────────────────────

    /// Cast `voter`'s single ballot for `candidate_id`.
    ///
    /// Fails with `AlreadyVoted` if `voter` has a recorded ballot, then with
    /// `InvalidCandidate` if `candidate_id` is outside `[1, candidates_count]`.
    /// Nothing is written on failure.
    pub fn vote(env: Env, voter: Address, candidate_id: CandidateId) -> Result<(), BallotError> {
        voter.require_auth();

        if voters::has_voted(&env, &voter) {
            return Err(BallotError::AlreadyVoted);
        }
        if !registry::exists(&env, candidate_id) {
            return Err(BallotError::InvalidCandidate);
        }

        let vote_count = registry::record_vote(&env, candidate_id)?;
        let record = voters::record(&env, &voter, candidate_id);

        events::publish_vote_cast(&env, &voter, &record, vote_count);

        Ok(())
    }

    // ── View functions ────────────────────────────────────────────────────────

    pub fn candidates_count(env: Env) -> u32 {
        registry::count(&env)
    }

    pub fn get_candidate(env: Env, id: CandidateId) -> Result<Candidate, BallotError> {
        registry::load(&env, id)
    }

    /// All candidates in id order.
    pub fn get_candidates(env: Env) -> Vec<Candidate> {
        registry::all(&env)
    }

    pub fn has_voted(env: Env, voter: Address) -> bool {
        voters::has_voted(&env, &voter)
    }

    pub fn get_voter_record(env: Env, voter: Address) -> Option<VoterRecord> {
        voters::load(&env, &voter)
    }

    /// Number of accepted ballots; always equals the sum of all tallies.
    pub fn total_votes(env: Env) -> u64 {
        registry::total_votes(&env)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
