//! End-to-end scenarios: parsed command trees through interpretation,
//! search, and rendering, with every plan replayed against the successor
//! semantics.

use serde_json::json;

use shrdlite_planner::formula::{GoalAtom, Literal};
use shrdlite_planner::interpret::InterpretError;
use shrdlite_planner::pipeline::{interpretations, plan, PlanError, ALREADY_TRUE};
use shrdlite_search::policy::SearchPolicyV1;
use shrdlite_world::moves::{MAX_PICKUP, MOVE, UNIT};
use shrdlite_world::objects::Form;
use shrdlite_world::relations::Relation;

use shrdlite_scenarios::{
    execute_plan, parse_command, world_one, world_one_holding, world_two_white_balls,
    world_uncovered_box,
};

#[test]
fn take_the_white_ball() {
    let world = world_one();
    let parses = vec![parse_command(json!({
        "command": "take",
        "entity": {
            "quantifier": "the",
            "object": {"form": "ball", "color": "white"}
        }
    }))];

    let goals = interpretations(&parses, &world).unwrap();
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].disjuncts, vec![vec![Literal::holding("l")]]);

    let result = plan(&parses, &world, &SearchPolicyV1::default()).unwrap();
    assert_eq!(result.actions.last().unwrap(), "p");
    // the ball is uncovered one column away: one move, one high pick
    assert_eq!(result.total_cost, MOVE + UNIT + MAX_PICKUP * 6 / 8);

    let final_state = execute_plan(&result.actions, &world);
    assert_eq!(final_state.holding.as_deref(), Some("l"));
    assert!(goals[0].is_satisfied(&final_state));
}

#[test]
fn put_the_held_ball_inside_a_yellow_box() {
    let world = world_uncovered_box();
    let parses = vec![parse_command(json!({
        "command": "put",
        "location": {
            "relation": "inside",
            "entity": {
                "quantifier": "any",
                "object": {"form": "box", "color": "yellow"}
            }
        }
    }))];

    let goals = interpretations(&parses, &world).unwrap();
    assert_eq!(
        goals[0].disjuncts,
        vec![vec![Literal::related("l", Relation::Inside, "k")]]
    );

    let result = plan(&parses, &world, &SearchPolicyV1::default()).unwrap();
    let final_state = execute_plan(&result.actions, &world);
    // the ball sits directly above the box
    let (ball_column, ball_height) = final_state.position("l").unwrap();
    assert_eq!(final_state.stacks[ball_column][ball_height - 1], "k");
    assert!(goals[0].is_satisfied(&final_state));
}

#[test]
fn move_all_balls_inside_a_large_box() {
    let world = world_one();
    let parses = vec![parse_command(json!({
        "command": "move",
        "entity": {
            "quantifier": "all",
            "object": {"form": "ball"}
        },
        "location": {
            "relation": "inside",
            "entity": {
                "quantifier": "any",
                "object": {"form": "box", "size": "large"}
            }
        }
    }))];

    let goals = interpretations(&parses, &world).unwrap();
    // one conjunction per assignment of balls to distinct boxes
    assert_eq!(goals[0].disjuncts.len(), 2);

    let result = plan(&parses, &world, &SearchPolicyV1::default()).unwrap();
    let final_state = execute_plan(&result.actions, &world);
    assert!(goals[0].is_satisfied(&final_state));

    for ball in ["l", "p"] {
        let (column, height) = final_state.position(ball).unwrap();
        assert!(height > 0, "{ball} must not rest on the floor");
        let supporter = &final_state.stacks[column][height - 1];
        let spec = world.objects[supporter];
        assert_eq!(spec.form, Form::Box, "{ball} must sit directly in a box");
        assert_eq!(spec.size, shrdlite_world::objects::Size::Large);
    }
}

#[test]
fn impossible_put_has_no_valid_solution() {
    // holding the large ball, no pyramid can legally sit below it
    let world = world_one_holding("p");
    let parses = vec![parse_command(json!({
        "command": "put",
        "location": {
            "relation": "above",
            "entity": {
                "quantifier": "any",
                "object": {"form": "pyramid"}
            }
        }
    }))];

    let error = plan(&parses, &world, &SearchPolicyV1::default()).unwrap_err();
    assert_eq!(
        error,
        PlanError::Interpret(InterpretError::NoValidSolution)
    );
}

#[test]
fn already_satisfied_goal_renders_the_message() {
    let world = world_one();
    let parses = vec![parse_command(json!({
        "command": "move",
        "entity": {
            "quantifier": "the",
            "object": {"form": "table"}
        },
        "location": {
            "relation": "ontop",
            "entity": {
                "quantifier": "the",
                "object": {"form": "floor"}
            }
        }
    }))];

    let result = plan(&parses, &world, &SearchPolicyV1::default()).unwrap();
    assert_eq!(result.actions, vec![ALREADY_TRUE.to_string()]);
    assert_eq!(result.total_cost, 0);
}

#[test]
fn two_white_balls_make_the_description_ambiguous() {
    let world = world_two_white_balls();
    let parses = vec![parse_command(json!({
        "command": "take",
        "entity": {
            "quantifier": "the",
            "object": {"form": "ball", "color": "white"}
        }
    }))];

    let error = plan(&parses, &world, &SearchPolicyV1::default()).unwrap_err();
    match error {
        PlanError::Interpret(InterpretError::Ambiguous { candidates, .. }) => {
            assert_eq!(candidates, vec!["l".to_string(), "n".to_string()]);
        }
        other => panic!("expected Ambiguous, got {other:?}"),
    }
}

#[test]
fn goal_literals_carry_positive_polarity() {
    let world = world_one();
    let parses = vec![parse_command(json!({
        "command": "take",
        "entity": {"quantifier": "any", "object": {"form": "ball"}}
    }))];
    let goals = interpretations(&parses, &world).unwrap();
    for conjunction in &goals[0].disjuncts {
        for literal in conjunction {
            assert!(literal.polarity);
            assert!(matches!(literal.atom, GoalAtom::Holding(_)));
        }
    }
}
