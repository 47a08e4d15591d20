//! Whole-utterance planning: validate, interpret, search, render.
//!
//! The pipeline is synchronous and single-threaded; one utterance in, one
//! plan out. Errors cross the boundary as tagged values, never panics.

use serde::Serialize;

use shrdlite_search::error::SearchError;
use shrdlite_search::policy::SearchPolicyV1;
use shrdlite_search::search::{astar, SearchOutcomeV1};
use shrdlite_world::moves::{Cost, Move};
use shrdlite_world::snapshot::{SnapshotError, WorldSnapshotV1};
use shrdlite_world::state::WorldStateV1;

use crate::formula::DnfFormula;
use crate::interpret::{interpret_all, InterpretError};
use crate::parse::Command;
use crate::render::render_plan;
use crate::space::PlannerSpace;

/// The whole-plan message emitted when the goal already holds.
pub const ALREADY_TRUE: &str = "That is already true!";

/// A rendered plan: the action/utterance stream and its search cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanV1 {
    /// Primitive tokens (`"l"`, `"r"`, `"p"`, `"d"`) interleaved with
    /// user-facing utterances.
    pub actions: Vec<String>,
    /// Total edge cost of the searched path (0 for an already-true goal).
    pub total_cost: Cost,
}

/// Typed failure for the planning pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    Snapshot(SnapshotError),
    Interpret(InterpretError),
    Search(SearchError),
}

impl std::fmt::Display for PlanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Snapshot(error) => write!(f, "invalid snapshot: {error}"),
            Self::Interpret(error) => write!(f, "no interpretation: {error}"),
            Self::Search(error) => write!(f, "no plan found: {error}"),
        }
    }
}

impl std::error::Error for PlanError {}

impl From<SnapshotError> for PlanError {
    fn from(error: SnapshotError) -> Self {
        Self::Snapshot(error)
    }
}

impl From<InterpretError> for PlanError {
    fn from(error: InterpretError) -> Self {
        Self::Interpret(error)
    }
}

/// Interpret every parse against the snapshot, returning all successful
/// goal formulas (batch semantics: errors surface only when nothing
/// succeeds).
///
/// # Errors
///
/// Snapshot invariant violations, then the first [`InterpretError`] if no
/// parse interprets.
pub fn interpretations(
    parses: &[Command],
    snapshot: &WorldSnapshotV1,
) -> Result<Vec<DnfFormula>, PlanError> {
    snapshot.validate()?;
    Ok(interpret_all(parses, snapshot)?)
}

/// Plan one utterance: the cheapest plan over all successful
/// interpretations, rendered as an action/utterance stream.
///
/// # Errors
///
/// - [`PlanError::Snapshot`] when the snapshot violates its invariants,
/// - [`PlanError::Interpret`] when no parse yields a goal,
/// - [`PlanError::Search`] when no interpretation's search finds a path
///   (the first search error is surfaced).
pub fn plan(
    parses: &[Command],
    snapshot: &WorldSnapshotV1,
    policy: &SearchPolicyV1,
) -> Result<PlanV1, PlanError> {
    let goals = interpretations(parses, snapshot)?;
    let start = WorldStateV1::from_snapshot(snapshot);

    let mut best: Option<SearchOutcomeV1<WorldStateV1, Move>> = None;
    let mut first_error: Option<SearchError> = None;
    for goal in &goals {
        let space = PlannerSpace::new(snapshot, goal);
        match astar(start.clone(), &space, policy) {
            Ok(outcome) => {
                if best
                    .as_ref()
                    .map_or(true, |held| outcome.total_cost < held.total_cost)
                {
                    best = Some(outcome);
                }
            }
            Err(error) => {
                first_error.get_or_insert(error);
            }
        }
    }

    let Some(outcome) = best else {
        return Err(PlanError::Search(
            first_error.unwrap_or(SearchError::FrontierExhausted),
        ));
    };
    if outcome.actions.is_empty() {
        return Ok(PlanV1 {
            actions: vec![ALREADY_TRUE.to_string()],
            total_cost: 0,
        });
    }
    Ok(PlanV1 {
        actions: render_plan(&outcome.path, &snapshot.objects),
        total_cost: outcome.total_cost,
    })
}
