//! Shared fixtures and a plan replay simulator for the scenario tests.

use std::collections::BTreeMap;

use shrdlite_planner::parse::Command;
use shrdlite_world::moves::{apply, Move};
use shrdlite_world::objects::{Color, Form, ObjectSpec, Size};
use shrdlite_world::snapshot::WorldSnapshotV1;
use shrdlite_world::state::WorldStateV1;

/// The example world `W₁`.
///
/// Columns from the floor upward: `[e] [g l] [k m f] [b p]`, arm over
/// column 0, nothing held.
///
/// | id | form    | size  | color  |
/// |----|---------|-------|--------|
/// | e  | table   | large | blue   |
/// | g  | brick   | large | green  |
/// | l  | ball    | small | white  |
/// | k  | box     | large | yellow |
/// | m  | pyramid | small | red    |
/// | f  | brick   | small | black  |
/// | b  | box     | large | red    |
/// | p  | ball    | large | black  |
#[must_use]
pub fn world_one() -> WorldSnapshotV1 {
    let mut objects = BTreeMap::new();
    for (id, form, size, color) in [
        ("e", Form::Table, Size::Large, Color::Blue),
        ("g", Form::Brick, Size::Large, Color::Green),
        ("l", Form::Ball, Size::Small, Color::White),
        ("k", Form::Box, Size::Large, Color::Yellow),
        ("m", Form::Pyramid, Size::Small, Color::Red),
        ("f", Form::Brick, Size::Small, Color::Black),
        ("b", Form::Box, Size::Large, Color::Red),
        ("p", Form::Ball, Size::Large, Color::Black),
    ] {
        objects.insert(id.to_string(), ObjectSpec { form, size, color });
    }
    WorldSnapshotV1 {
        stacks: vec![
            vec!["e".to_string()],
            vec!["g".to_string(), "l".to_string()],
            vec!["k".to_string(), "m".to_string(), "f".to_string()],
            vec!["b".to_string(), "p".to_string()],
        ],
        holding: None,
        arm: 0,
        objects,
    }
}

/// `W₁` with `id` lifted out of its stack and into the gripper.
///
/// # Panics
///
/// Panics if `id` is not placed in `W₁`.
#[must_use]
pub fn world_one_holding(id: &str) -> WorldSnapshotV1 {
    let mut world = world_one();
    let (column, height) = world.position(id).expect("fixture id must be placed");
    assert_eq!(
        height + 1,
        world.stacks[column].len(),
        "fixture id must be on top of its column"
    );
    world.stacks[column].pop();
    world.holding = Some(id.to_string());
    world
}

/// A spread-out variant with the yellow box uncovered: columns
/// `[e] [g] [k] [b p] [m f]`, the white ball already gripped, arm over
/// column 1.
#[must_use]
pub fn world_uncovered_box() -> WorldSnapshotV1 {
    let mut world = world_one();
    world.stacks = vec![
        vec!["e".to_string()],
        vec!["g".to_string()],
        vec!["k".to_string()],
        vec!["b".to_string(), "p".to_string()],
        vec!["m".to_string(), "f".to_string()],
    ];
    world.holding = Some("l".to_string());
    world.arm = 1;
    world
}

/// `W₁` plus a second small white ball `n` on its own column.
#[must_use]
pub fn world_two_white_balls() -> WorldSnapshotV1 {
    let mut world = world_one();
    world.stacks.push(vec!["n".to_string()]);
    world.objects.insert(
        "n".to_string(),
        ObjectSpec {
            form: Form::Ball,
            size: Size::Small,
            color: Color::White,
        },
    );
    world
}

/// Deserialize a parse-tree fixture through the real wire surface.
///
/// # Panics
///
/// Panics if the fixture does not match the parse-tree shape.
#[must_use]
pub fn parse_command(value: serde_json::Value) -> Command {
    serde_json::from_value(value).expect("command fixture must deserialize")
}

/// Replay a rendered plan under the successor semantics, skipping
/// utterances.
///
/// # Panics
///
/// Panics if a primitive token is not executable, which would mean the
/// planner emitted an illegal plan.
#[must_use]
pub fn execute_plan(actions: &[String], snapshot: &WorldSnapshotV1) -> WorldStateV1 {
    let mut state = WorldStateV1::from_snapshot(snapshot);
    for token in actions {
        let mv = match token.as_str() {
            "l" => Move::Left,
            "r" => Move::Right,
            "p" => Move::Pick,
            "d" => Move::Drop,
            _ => continue, // utterance
        };
        state = apply(&state, mv, &snapshot.objects).expect("plan token must be executable");
    }
    state
}
