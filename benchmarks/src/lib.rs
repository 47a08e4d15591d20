//! Shared helpers for the shrdlite benchmark suites.

use std::collections::BTreeMap;

use shrdlite_planner::parse::Command;
use shrdlite_world::objects::{Color, Form, ObjectSpec, Size};
use shrdlite_world::snapshot::WorldSnapshotV1;

/// The benchmark world: four columns, eight objects, nothing held.
///
/// # Panics
///
/// Never; the fixture is static.
#[must_use]
pub fn benchmark_world() -> WorldSnapshotV1 {
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

/// "take the white ball" — a shallow search.
///
/// # Panics
///
/// Panics if the static fixture fails to deserialize.
#[must_use]
pub fn shallow_command() -> Command {
    serde_json::from_value(serde_json::json!({
        "command": "take",
        "entity": {
            "quantifier": "the",
            "object": {"form": "ball", "color": "white"}
        }
    }))
    .expect("static fixture")
}

/// "move all balls inside a large box" — unstacking work plus a
/// two-conjunction goal.
///
/// # Panics
///
/// Panics if the static fixture fails to deserialize.
#[must_use]
pub fn deep_command() -> Command {
    serde_json::from_value(serde_json::json!({
        "command": "move",
        "entity": {"quantifier": "all", "object": {"form": "ball"}},
        "location": {
            "relation": "inside",
            "entity": {
                "quantifier": "any",
                "object": {"form": "box", "size": "large"}
            }
        }
    }))
    .expect("static fixture")
}
