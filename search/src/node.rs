//! Core search node type and frontier ordering key.

use shrdlite_world::fingerprint::StateFingerprint;
use shrdlite_world::moves::Cost;

/// An immutable node in the search arena.
///
/// Frontier extraction orders nodes by `(f_cost, depth, node_id)` where
/// `f_cost = g_cost + h_cost`. Lower is better; ties break by shallower
/// depth, then older creation order (`node_id` is assigned monotonically).
#[derive(Debug, Clone)]
pub struct SearchNodeV1<S, A> {
    /// Arena index, assigned in creation order.
    pub node_id: usize,
    /// Parent arena index (`None` for the root).
    pub parent_id: Option<usize>,
    /// Full immutable state at this node.
    pub state: S,
    /// Fingerprint of the state, the dedup key.
    pub fingerprint: StateFingerprint,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// Cumulative path cost.
    pub g_cost: Cost,
    /// Admissible heuristic estimate, computed once at creation.
    pub h_cost: Cost,
    /// The action that produced this node from its parent.
    pub producing_action: Option<A>,
}

impl<S, A> SearchNodeV1<S, A> {
    /// Compute `f_cost = g_cost + h_cost`, the frontier ordering key.
    #[must_use]
    pub fn f_cost(&self) -> Cost {
        self.g_cost.saturating_add(self.h_cost)
    }
}

/// The frontier ordering key: `(f_cost, depth, node_id)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: Cost,
    pub depth: u32,
    pub node_id: usize,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then(self.depth.cmp(&other.depth))
            .then(self.node_id.cmp(&other.node_id))
    }
}

impl<S, A> From<&SearchNodeV1<S, A>> for FrontierKey {
    fn from(node: &SearchNodeV1<S, A>) -> Self {
        Self {
            f_cost: node.f_cost(),
            depth: node.depth,
            node_id: node.node_id,
        }
    }
}
