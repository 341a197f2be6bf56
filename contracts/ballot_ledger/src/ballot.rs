use soroban_sdk::{contracterror, contracttype, Address, String};

pub type CandidateId = u32;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    CandidateCount,
    Candidate(CandidateId),
    TotalVotes,
    Voter(Address),
}

/// A registered ballot option and its running tally.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub vote_count: u64,
}

/// Written once when a voter casts their ballot; never modified afterwards.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoterRecord {
    pub candidate_id: CandidateId,
    pub voted_at: u64,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum BallotError {
    AlreadyVoted       = 1,
    InvalidCandidate   = 2,
    AlreadyInitialized = 3,
}

impl BallotError {
    /// Stable human-readable reason surfaced to callers alongside the code.
    pub const fn reason(&self) -> &'static str {
        match self {
            BallotError::AlreadyVoted => "You have already voted",
            BallotError::InvalidCandidate => "Invalid candidate",
            BallotError::AlreadyInitialized => "Registry already initialized",
        }
    }
}
