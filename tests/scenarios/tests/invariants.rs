//! Universal invariants: cost accounting, heuristic admissibility,
//! quantifier laws, feasibility symmetry, and CNF→DNF distribution.

use std::time::Duration;

use shrdlite_planner::formula::{cnf_to_dnf, DnfFormula, Literal};
use shrdlite_planner::heuristic;
use shrdlite_planner::interpret::{resolve_entity, InterpretError};
use shrdlite_planner::parse::{Entity, FormPattern, ObjectDescription, Quantifier};
use shrdlite_planner::pipeline::{plan, PlanError};
use shrdlite_planner::space::PlannerSpace;
use shrdlite_search::error::SearchError;
use shrdlite_search::policy::SearchPolicyV1;
use shrdlite_search::search::{astar, SearchOutcomeV1};
use shrdlite_world::moves::{move_cost, Cost, Move};
use shrdlite_world::physics::can_support;
use shrdlite_world::relations::Relation;
use shrdlite_world::state::WorldStateV1;

use serde_json::json;
use shrdlite_scenarios::{parse_command, world_one};

/// Search the example world for a goal formula.
fn search_goal(goal: &DnfFormula) -> SearchOutcomeV1<WorldStateV1, Move> {
    let world = world_one();
    let space = PlannerSpace::new(&world, goal);
    let start = WorldStateV1::from_snapshot(&world);
    astar(start, &space, &SearchPolicyV1::default()).unwrap()
}

/// `holding(m)`: a goal that forces real unstacking work.
fn buried_pyramid_goal() -> DnfFormula {
    DnfFormula::new(vec![vec![Literal::holding("m")]])
}

/// Assert `h(s) ≤ g(goal) − g(s)` for every state on the accepted path.
fn assert_admissible_along_path(
    goal: &DnfFormula,
    outcome: &SearchOutcomeV1<WorldStateV1, Move>,
) {
    let world = world_one();
    let total_objects = world.present_ids().len();
    let mut g: Cost = 0;
    for (index, state) in outcome.path.iter().enumerate() {
        if index > 0 {
            g += move_cost(
                &outcome.path[index - 1],
                outcome.actions[index - 1],
                &world.objects,
                total_objects,
            );
        }
        let remaining = outcome.total_cost - g;
        assert!(
            heuristic::estimate(goal, state) <= remaining,
            "h overestimates at path index {index}"
        );
    }
}

#[test]
fn total_cost_equals_the_sum_of_edge_costs() {
    let world = world_one();
    let goal = buried_pyramid_goal();
    let outcome = search_goal(&goal);
    let total_objects = world.present_ids().len();

    let mut accumulated: Cost = 0;
    for (pair, action) in outcome.path.windows(2).zip(&outcome.actions) {
        accumulated += move_cost(&pair[0], *action, &world.objects, total_objects);
    }
    assert_eq!(accumulated, outcome.total_cost);
}

#[test]
fn heuristic_never_overestimates_along_the_accepted_path() {
    let goal = buried_pyramid_goal();
    let outcome = search_goal(&goal);
    assert_admissible_along_path(&goal, &outcome);
}

#[test]
fn heuristic_never_overestimates_on_spatial_goals() {
    // Each goal drives a full search, so the per-relation estimators are
    // checked against the costs A* actually accumulates.

    // ontop/inside: the white ball must come to rest directly in the
    // covered yellow box, forcing the pyramid and brick out first
    let inside = DnfFormula::new(vec![vec![Literal::related("l", Relation::Inside, "k")]]);
    let outcome = search_goal(&inside);
    assert!(inside.is_satisfied(outcome.path.last().unwrap()));
    assert_admissible_along_path(&inside, &outcome);

    // leftof: the black brick starts in the box's own column and must
    // move past it
    let leftof = DnfFormula::new(vec![vec![Literal::related("f", Relation::LeftOf, "k")]]);
    let outcome = search_goal(&leftof);
    assert!(leftof.is_satisfied(outcome.path.last().unwrap()));
    assert_admissible_along_path(&leftof, &outcome);

    // above: the black brick ends up resting somewhere over the table
    let above = DnfFormula::new(vec![vec![Literal::related("f", Relation::Above, "e")]]);
    let outcome = search_goal(&above);
    assert!(above.is_satisfied(outcome.path.last().unwrap()));
    assert_admissible_along_path(&above, &outcome);

    // under: the flipped reading of the same relation
    let under = DnfFormula::new(vec![vec![Literal::related("e", Relation::Under, "f")]]);
    let outcome = search_goal(&under);
    assert!(under.is_satisfied(outcome.path.last().unwrap()));
    assert_admissible_along_path(&under, &outcome);
}

#[test]
fn the_plan_reaches_a_goal_state() {
    let goal = buried_pyramid_goal();
    let outcome = search_goal(&goal);
    assert!(goal.is_satisfied(outcome.path.last().unwrap()));
    for state in &outcome.path[..outcome.path.len() - 1] {
        assert!(!goal.is_satisfied(state), "goal must be reached exactly once");
    }
}

#[test]
fn definite_descriptions_resolve_uniquely_or_fail() {
    let world = world_one();
    for form in [
        FormPattern::Ball,
        FormPattern::Box,
        FormPattern::Brick,
        FormPattern::Pyramid,
        FormPattern::Table,
        FormPattern::Plank,
    ] {
        let entity = Entity {
            quantifier: Quantifier::The,
            object: ObjectDescription {
                size: None,
                color: None,
                form,
                object: None,
                location: None,
            },
        };
        match resolve_entity(&entity, &world) {
            Ok(candidates) => assert_eq!(candidates.len(), 1),
            Err(InterpretError::Ambiguous { candidates, .. }) => {
                assert!(candidates.len() > 1);
            }
            Err(InterpretError::NoSuchEntity { .. }) => {}
            Err(other) => panic!("unexpected error {other:?}"),
        }
    }
}

#[test]
fn under_and_above_feasibility_are_symmetric() {
    let world = world_one();
    let ids: Vec<&str> = world.objects.keys().map(String::as_str).collect();
    for a in &ids {
        for b in &ids {
            let spec_a = world.spec(a).unwrap();
            let spec_b = world.spec(b).unwrap();
            assert_eq!(
                can_support(spec_a, Relation::Under, spec_b),
                can_support(spec_b, Relation::Above, spec_a),
            );
        }
    }
}

#[test]
fn dnf_distribution_law_holds() {
    let clause = |ids: &[&str]| -> Vec<Literal> {
        ids.iter().map(|id| Literal::holding(*id)).collect()
    };
    let cases: Vec<Vec<Vec<Literal>>> = vec![
        vec![clause(&["a"])],
        vec![clause(&["a", "b"]), clause(&["c"])],
        vec![clause(&["a", "b"]), clause(&["c", "d"]), clause(&["e", "f", "g"])],
    ];
    for clauses in cases {
        let dnf = cnf_to_dnf(&clauses);
        let expected: usize = clauses.iter().map(Vec::len).product();
        assert_eq!(dnf.len(), expected);
        for conjunction in &dnf {
            // a choice function: one literal drawn from every clause
            assert!(clauses
                .iter()
                .all(|clause| clause.iter().any(|l| conjunction.contains(l))));
        }
    }
}

#[test]
fn a_zero_timeout_surfaces_as_no_plan_found() {
    let world = world_one();
    let parses = vec![parse_command(json!({
        "command": "take",
        "entity": {"quantifier": "the", "object": {"form": "pyramid"}}
    }))];
    let policy = SearchPolicyV1 {
        timeout: Duration::ZERO,
        ..SearchPolicyV1::default()
    };
    let error = plan(&parses, &world, &policy).unwrap_err();
    assert!(matches!(
        error,
        PlanError::Search(SearchError::Timeout { .. })
    ));
}
