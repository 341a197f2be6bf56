//! Candidate registry.
//!
//! Candidates live in instance storage keyed by id. The set is written once
//! at deployment; afterwards only `vote_count` changes, and only through
//! [`record_vote`].

use soroban_sdk::{Env, String, Vec};

use crate::ballot::{BallotError, Candidate, CandidateId, DataKey};

// TTL: ~30 days
const TTL_THRESHOLD: u32 = 518_400;
const TTL_EXTEND_TO: u32 = 1_036_800;

/// Names registered by the constructor, in id order.
pub const DEFAULT_CANDIDATES: [&str; 3] = ["Candidate 1", "Candidate 2", "Candidate 3"];

pub fn default_names(env: &Env) -> Vec<String> {
    let mut names = Vec::new(env);
    for name in DEFAULT_CANDIDATES.iter() {
        names.push_back(String::from_str(env, name));
    }
    names
}

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn write_registry(env: &Env, names: &Vec<String>) -> u32 {
    let storage = env.storage().instance();
    let mut id: CandidateId = 0;
    for name in names.iter() {
        id += 1;
        storage.set(
            &DataKey::Candidate(id),
            &Candidate {
                id,
                name,
                vote_count: 0,
            },
        );
    }
    storage.set(&DataKey::CandidateCount, &id);
    storage.set(&DataKey::TotalVotes, &0u64);
    extend_instance_ttl(env);
    id
}

/// Register the [`DEFAULT_CANDIDATES`] and return how many were written.
pub(crate) fn seed_defaults(env: &Env) -> u32 {
    write_registry(env, &default_names(env))
}

/// Register `names` as candidates `1..=names.len()`.
///
/// Fails with `AlreadyInitialized` once a registry exists, and with
/// `InvalidCandidate` for an empty list or any empty name. Nothing is
/// written on failure.
pub fn seed(env: &Env, names: &Vec<String>) -> Result<u32, BallotError> {
    if is_seeded(env) {
        return Err(BallotError::AlreadyInitialized);
    }
    if names.is_empty() || names.iter().any(|name| name.is_empty()) {
        return Err(BallotError::InvalidCandidate);
    }
    Ok(write_registry(env, names))
}

pub fn is_seeded(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::CandidateCount)
}

pub fn count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::CandidateCount)
        .unwrap_or(0)
}

pub fn exists(env: &Env, id: CandidateId) -> bool {
    id >= 1 && id <= count(env)
}

pub fn load(env: &Env, id: CandidateId) -> Result<Candidate, BallotError> {
    if !exists(env, id) {
        return Err(BallotError::InvalidCandidate);
    }
    env.storage()
        .instance()
        .get(&DataKey::Candidate(id))
        .ok_or(BallotError::InvalidCandidate)
}

pub fn all(env: &Env) -> Vec<Candidate> {
    let mut candidates = Vec::new(env);
    for id in 1..=count(env) {
        if let Ok(candidate) = load(env, id) {
            candidates.push_back(candidate);
        }
    }
    candidates
}

pub fn total_votes(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TotalVotes)
        .unwrap_or(0)
}

/// Add one vote to candidate `id` and to the running total.
///
/// Returns the candidate's new tally.
pub(crate) fn record_vote(env: &Env, id: CandidateId) -> Result<u64, BallotError> {
    let mut candidate = load(env, id)?;
    candidate.vote_count += 1;

    let storage = env.storage().instance();
    storage.set(&DataKey::Candidate(id), &candidate);
    storage.set(&DataKey::TotalVotes, &(total_votes(env) + 1));
    extend_instance_ttl(env);

    Ok(candidate.vote_count)
}
