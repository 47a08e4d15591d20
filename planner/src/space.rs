//! The planning state space: primitive moves under the DNF goal.

use std::collections::BTreeMap;

use shrdlite_search::space::{SearchSpaceV1, SuccessorV1};
use shrdlite_world::fingerprint::{state_fingerprint, StateFingerprint};
use shrdlite_world::moves::{apply, legal_moves, move_cost, Cost, Move};
use shrdlite_world::objects::ObjectSpec;
use shrdlite_world::snapshot::WorldSnapshotV1;
use shrdlite_world::state::WorldStateV1;

use crate::formula::DnfFormula;
use crate::heuristic;

/// A search space over world configurations, parameterised by one goal
/// formula.
pub struct PlannerSpace<'a> {
    objects: &'a BTreeMap<String, ObjectSpec>,
    goal: &'a DnfFormula,
    total_objects: usize,
}

impl<'a> PlannerSpace<'a> {
    #[must_use]
    pub fn new(snapshot: &'a WorldSnapshotV1, goal: &'a DnfFormula) -> Self {
        Self {
            objects: &snapshot.objects,
            goal,
            total_objects: snapshot.present_ids().len(),
        }
    }
}

impl SearchSpaceV1 for PlannerSpace<'_> {
    type State = WorldStateV1;
    type Action = Move;

    fn successors(&self, state: &WorldStateV1) -> Vec<SuccessorV1<WorldStateV1, Move>> {
        legal_moves(state, self.objects)
            .into_iter()
            .filter_map(|mv| {
                let cost = move_cost(state, mv, self.objects, self.total_objects);
                apply(state, mv, self.objects)
                    .ok()
                    .map(|next| SuccessorV1 {
                        state: next,
                        action: mv,
                        cost,
                    })
            })
            .collect()
    }

    fn is_goal(&self, state: &WorldStateV1) -> bool {
        self.goal.is_satisfied(state)
    }

    fn heuristic(&self, state: &WorldStateV1) -> Cost {
        heuristic::estimate(self.goal, state)
    }

    fn fingerprint(&self, state: &WorldStateV1) -> StateFingerprint {
        state_fingerprint(state)
    }
}
