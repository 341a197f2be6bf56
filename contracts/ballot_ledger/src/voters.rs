//! Per-voter status.
//!
//! A voter with no record has not voted. The record is written by the one
//! successful `vote` call and is never removed, so `NotVoted -> Voted` is the
//! only transition.

use soroban_sdk::{Address, Env};

use crate::ballot::{CandidateId, DataKey, VoterRecord};

// TTL: ~30 days
const TTL_THRESHOLD: u32 = 518_400;
const TTL_EXTEND_TO: u32 = 1_036_800;

fn voter_key(voter: &Address) -> DataKey {
    DataKey::Voter(voter.clone())
}

pub fn has_voted(env: &Env, voter: &Address) -> bool {
    env.storage().persistent().has(&voter_key(voter))
}

pub fn load(env: &Env, voter: &Address) -> Option<VoterRecord> {
    env.storage().persistent().get(&voter_key(voter))
}

pub(crate) fn record(env: &Env, voter: &Address, candidate_id: CandidateId) -> VoterRecord {
    let record = VoterRecord {
        candidate_id,
        voted_at: env.ledger().timestamp(),
    };
    let key = voter_key(voter);
    env.storage().persistent().set(&key, &record);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    record
}
