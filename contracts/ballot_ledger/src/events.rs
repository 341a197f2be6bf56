#![allow(deprecated)]

//! Structured event publishing for the ballot ledger.

use soroban_sdk::{symbol_short, Address, Env};

use crate::ballot::{CandidateId, VoterRecord};

/// Event published once when the registry is seeded.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub candidates_count: u32,
    pub timestamp: u64,
}

/// Event published for every accepted ballot.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteCastEvent {
    pub voter: Address,
    pub candidate_id: CandidateId,
    pub vote_count: u64,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, candidates_count: u32) {
    let data = InitializedEvent {
        candidates_count,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((symbol_short!("INIT"),), data);
}

pub fn publish_vote_cast(env: &Env, voter: &Address, record: &VoterRecord, vote_count: u64) {
    let data = VoteCastEvent {
        voter: voter.clone(),
        candidate_id: record.candidate_id,
        vote_count,
        timestamp: record.voted_at,
    };
    env.events().publish((symbol_short!("VOTE"), record.candidate_id), data);
}
