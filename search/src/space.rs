//! Search space contract trait.

use shrdlite_world::fingerprint::StateFingerprint;
use shrdlite_world::moves::Cost;

/// One outgoing edge of a state.
#[derive(Debug, Clone)]
pub struct SuccessorV1<S, A> {
    /// The successor state (a fresh copy; the source is never mutated).
    pub state: S,
    /// The action that produces the successor.
    pub action: A,
    /// Edge cost. Must be at least one cost unit.
    pub cost: Cost,
}

/// Trait for state spaces that support best-first search.
///
/// # Contract
///
/// - `successors` must be deterministic: same state, same edges in the
///   same order.
/// - Every edge cost is positive.
/// - `heuristic` must never overestimate the cheapest remaining cost to a
///   goal under the space's own cost model; otherwise the returned path is
///   not guaranteed cost-optimal.
/// - `fingerprint` must be injective over reachable states (structural
///   identity drives the closed set).
pub trait SearchSpaceV1 {
    type State: Clone;
    type Action: Clone;

    /// Enumerate all outgoing edges of the given state.
    fn successors(&self, state: &Self::State) -> Vec<SuccessorV1<Self::State, Self::Action>>;

    /// Test whether the given state satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Admissible estimate of the remaining cost to a goal.
    fn heuristic(&self, state: &Self::State) -> Cost;

    /// Canonical fingerprint of a state.
    fn fingerprint(&self, state: &Self::State) -> StateFingerprint;
}
