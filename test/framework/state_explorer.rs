//! # State Space Explorer
//!
//! Executes ballot action sequences against a deployed ledger and verifies
//! invariants after every transition.
//!
//! ## Design
//!
//! Each explored state is a `BallotSnapshot`; edges are `BallotAction`s.
//! After every action the explorer checks:
//!
//! - the state invariants of its `InvariantSet`;
//! - the outcome-independent transition invariants (monotonic tallies,
//!   terminal voted state);
//! - `SingleIncrement` for an accepted vote, `UnchangedOnFailure` for a
//!   rejected one.

extern crate std;

use soroban_sdk::Address;
use std::string::String;
use std::vec::Vec;

use super::generators::BallotAction;
use super::invariants::{
    InvariantSet, SingleIncrement, TransitionInvariantSet, UnchangedOnFailure,
};
use super::{ActionOutcome, BallotSnapshot, BallotTestHarness, TestRunSummary};

// ── Explorer Configuration ───────────────────────────────────────────────────

/// Configuration for state-space exploration.
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    /// Maximum number of actions to execute in a single exploration run.
    pub max_steps: usize,
    /// Whether to halt on the first invariant violation (fail-fast).
    pub fail_fast: bool,
    /// Whether to record snapshots for later analysis.
    pub record_snapshots: bool,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            max_steps: 100,
            fail_fast: true,
            record_snapshots: false,
        }
    }
}

// ── Exploration Result ───────────────────────────────────────────────────────

/// Full result of an exploration run.
#[derive(Debug)]
pub struct ExplorationResult {
    pub summary: TestRunSummary,
    pub snapshots: Vec<BallotSnapshot>,
    pub action_log: Vec<(BallotAction, ActionOutcome)>,
}

impl ExplorationResult {
    pub fn passed(&self) -> bool {
        self.summary.passed()
    }

    /// Number of accepted ballots in the log.
    pub fn accepted_votes(&self) -> usize {
        self.action_log
            .iter()
            .filter(|(action, outcome)| {
                matches!(action, BallotAction::Vote { .. }) && outcome.is_ok()
            })
            .count()
    }
}

// ── State Space Explorer ─────────────────────────────────────────────────────

/// Executes action sequences against a ballot ledger, checking invariants
/// after every transition.
pub struct StateExplorer<'a> {
    harness: &'a BallotTestHarness,
    invariants: InvariantSet,
    transitions: TransitionInvariantSet,
    config: ExplorerConfig,
    users: Vec<Address>,
}

impl<'a> StateExplorer<'a> {
    /// Create an explorer for the given harness and voter pool.
    pub fn new(
        harness: &'a BallotTestHarness,
        invariants: InvariantSet,
        config: ExplorerConfig,
        users: Vec<Address>,
    ) -> Self {
        Self {
            harness,
            invariants,
            transitions: TransitionInvariantSet::ballot_defaults(),
            config,
            users,
        }
    }

    /// Create an explorer with default configuration and built-in invariants.
    pub fn with_defaults(harness: &'a BallotTestHarness, users: Vec<Address>) -> Self {
        let candidates = harness.candidates_count();
        Self::new(
            harness,
            InvariantSet::ballot_defaults(candidates),
            ExplorerConfig::default(),
            users,
        )
    }

    /// Execute a sequence of actions, checking invariants after each.
    pub fn explore(&mut self, actions: &[BallotAction]) -> ExplorationResult {
        let mut summary = TestRunSummary::new();
        let mut snapshots = Vec::new();
        let mut action_log = Vec::new();

        let mut before = self.harness.snapshot(&self.users);
        if self.config.record_snapshots {
            snapshots.push(before.clone());
        }

        let steps = actions.len().min(self.config.max_steps);

        for action in actions.iter().take(steps) {
            let outcome = self.execute_action(action);
            if let Some(entry_point) = action_entry_point(action) {
                summary.entry_points_hit.insert(entry_point.into());
            }
            summary.actions_executed += 1;
            summary.transitions_observed += 1;

            let after = self.harness.snapshot(&self.users);

            let mut violations = self.invariants.check_all(&after);
            violations.extend(self.transitions.check_all(&before, &after));
            violations.extend(self.outcome_violations(action, &outcome, &before, &after));
            summary.invariant_checks += 1;

            action_log.push((action.clone(), outcome));

            for (name, msg) in violations {
                let violation = std::format!(
                    "After action #{} ({:?}): [{}] {}",
                    summary.actions_executed,
                    action,
                    name,
                    msg
                );
                summary.invariant_violations.push(violation);
            }

            if self.config.record_snapshots {
                snapshots.push(after.clone());
            }

            if self.config.fail_fast && !summary.passed() {
                break;
            }
            before = after;
        }

        ExplorationResult {
            summary,
            snapshots,
            action_log,
        }
    }

    /// Checks that depend on whether the action was accepted.
    fn outcome_violations(
        &self,
        action: &BallotAction,
        outcome: &ActionOutcome,
        before: &BallotSnapshot,
        after: &BallotSnapshot,
    ) -> Vec<(String, String)> {
        let BallotAction::Vote { candidate_id, .. } = action else {
            return Vec::new();
        };

        let mut set = TransitionInvariantSet::new();
        match outcome {
            ActionOutcome::Ok => set.add(Box::new(SingleIncrement {
                candidate_id: *candidate_id,
            })),
            ActionOutcome::ExpectedError(_) => set.add(Box::new(UnchangedOnFailure)),
            ActionOutcome::UnexpectedError(e) => {
                return std::vec![("no host errors".into(), std::format!("vote failed: {}", e))];
            }
        }
        set.check_all(before, after)
    }

    /// Execute a single action against the harness, returning the outcome.
    fn execute_action(&mut self, action: &BallotAction) -> ActionOutcome {
        match action {
            BallotAction::Vote {
                user_index,
                candidate_id,
            } => {
                let user = &self.users[*user_index % self.users.len()];
                self.harness.try_vote(user, *candidate_id)
            }
            BallotAction::AdvanceTime { delta } => {
                self.harness.env.advance_time(*delta);
                ActionOutcome::Ok
            }
        }
    }
}

/// Map an action to the contract entry point it exercises, if any.
fn action_entry_point(action: &BallotAction) -> Option<&'static str> {
    match action {
        BallotAction::Vote { .. } => Some("vote"),
        BallotAction::AdvanceTime { .. } => None,
    }
}

/// The state-mutating ballot ledger entry points, for coverage calculation.
pub const BALLOT_ENTRY_POINTS: &[&str] = &["vote"];
