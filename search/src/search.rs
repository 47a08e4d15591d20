//! Search entry point and expansion loop.

use std::time::{Duration, Instant};

use shrdlite_world::moves::Cost;

use crate::error::SearchError;
use crate::frontier::BestFirstFrontier;
use crate::node::{FrontierKey, SearchNodeV1};
use crate::policy::SearchPolicyV1;
use crate::space::SearchSpaceV1;

/// Counters and timing for one search execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes expanded (goal tests that proceeded to successor generation).
    pub expansions: u64,
    /// Pops and pushes skipped because their fingerprint was already closed.
    pub duplicates_suppressed: u64,
    /// High-water mark of the frontier size.
    pub frontier_high_water: u64,
    /// Wall-clock time spent in the loop.
    pub elapsed: Duration,
}

/// Result of a successful search.
///
/// `path` runs from the root to the goal inclusive; `actions` has one entry
/// per edge, so `actions.len() == path.len() - 1`. `total_cost` equals the
/// sum of edge costs along the path.
#[derive(Debug, Clone)]
pub struct SearchOutcomeV1<S, A> {
    pub path: Vec<S>,
    pub actions: Vec<A>,
    pub total_cost: Cost,
    pub stats: SearchStats,
}

/// Run weighted A\* from the root state.
///
/// The frontier is keyed by `g + h`; ties break deterministically by depth
/// then creation order. A fingerprint is closed at dequeue time; later pops
/// of the same fingerprint are skipped. The goal test runs on dequeue, so
/// the first goal returned is cost-optimal whenever the space's heuristic
/// is admissible.
///
/// # Errors
///
/// - [`SearchError::Timeout`] when the wall clock passes `policy.timeout`
///   (checked on every dequeue; partial frontier state is discarded),
/// - [`SearchError::FrontierExhausted`] when the open set empties,
/// - [`SearchError::ExpansionBudgetExceeded`] when `policy.max_expansions`
///   expansions have been performed.
pub fn astar<W: SearchSpaceV1>(
    root: W::State,
    space: &W,
    policy: &SearchPolicyV1,
) -> Result<SearchOutcomeV1<W::State, W::Action>, SearchError> {
    let started = Instant::now();

    let mut arena: Vec<SearchNodeV1<W::State, W::Action>> = Vec::new();
    let mut frontier = BestFirstFrontier::new();
    let mut expansions: u64 = 0;
    let mut duplicates_suppressed: u64 = 0;

    let root_fingerprint = space.fingerprint(&root);
    let root_h = space.heuristic(&root);
    arena.push(SearchNodeV1 {
        node_id: 0,
        parent_id: None,
        state: root,
        fingerprint: root_fingerprint,
        depth: 0,
        g_cost: 0,
        h_cost: root_h,
        producing_action: None,
    });
    frontier.push(FrontierKey::from(&arena[0]));

    loop {
        let elapsed = started.elapsed();
        if elapsed >= policy.timeout {
            #[allow(clippy::cast_possible_truncation)]
            return Err(SearchError::Timeout {
                elapsed_ms: elapsed.as_millis() as u64,
            });
        }

        let Some(key) = frontier.pop() else {
            return Err(SearchError::FrontierExhausted);
        };
        let node_id = key.node_id;

        // Close at dequeue; a cheaper route to this state was already taken.
        if !frontier.close(arena[node_id].fingerprint.as_str()) {
            duplicates_suppressed += 1;
            continue;
        }

        if space.is_goal(&arena[node_id].state) {
            let stats = SearchStats {
                expansions,
                duplicates_suppressed,
                frontier_high_water: frontier.high_water(),
                elapsed: started.elapsed(),
            };
            return Ok(build_outcome(&arena, node_id, stats));
        }

        if expansions >= policy.max_expansions {
            return Err(SearchError::ExpansionBudgetExceeded {
                max_expansions: policy.max_expansions,
            });
        }
        expansions += 1;

        let (parent_g, parent_depth) = (arena[node_id].g_cost, arena[node_id].depth);
        for successor in space.successors(&arena[node_id].state) {
            let fingerprint = space.fingerprint(&successor.state);
            if frontier.is_closed(fingerprint.as_str()) {
                duplicates_suppressed += 1;
                continue;
            }
            let h_cost = space.heuristic(&successor.state);
            let child = SearchNodeV1 {
                node_id: arena.len(),
                parent_id: Some(node_id),
                state: successor.state,
                fingerprint,
                depth: parent_depth + 1,
                g_cost: parent_g + successor.cost,
                h_cost,
                producing_action: Some(successor.action),
            };
            frontier.push(FrontierKey::from(&child));
            arena.push(child);
        }
    }
}

/// Reconstruct the path from the root to the goal node by backpointers.
fn build_outcome<S: Clone, A: Clone>(
    arena: &[SearchNodeV1<S, A>],
    goal_id: usize,
    stats: SearchStats,
) -> SearchOutcomeV1<S, A> {
    let mut path = Vec::new();
    let mut actions = Vec::new();
    let mut current = Some(goal_id);
    while let Some(id) = current {
        let node = &arena[id];
        path.push(node.state.clone());
        if let Some(action) = &node.producing_action {
            actions.push(action.clone());
        }
        current = node.parent_id;
    }
    path.reverse();
    actions.reverse();
    SearchOutcomeV1 {
        path,
        actions,
        total_cost: arena[goal_id].g_cost,
        stats,
    }
}
