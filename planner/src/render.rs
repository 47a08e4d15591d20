//! Rendering a search path into the actuator/utterance stream.
//!
//! Consecutive path states are diffed into the primitive tokens `"l"`,
//! `"r"`, `"p"`, `"d"`; utterances announcing the manipulated object are
//! injected before picks and uncovered drops. Any non-token string in the
//! output is a user-facing utterance displayed before the following
//! action.

use std::collections::BTreeMap;

use shrdlite_world::objects::ObjectSpec;
use shrdlite_world::state::WorldStateV1;

use crate::describe::shortest_description;

/// Render the action stream for a path of world states.
///
/// The final pick announces `"Taking the <desc>"`, earlier picks
/// `"Moving the <desc>"`. A drop announces `"Dropping the <desc>"` only
/// when its carry segment emitted no pick message (the path began with the
/// object already gripped). A path with fewer than two states renders to
/// an empty stream.
#[must_use]
pub fn render_plan(path: &[WorldStateV1], objects: &BTreeMap<String, ObjectSpec>) -> Vec<String> {
    let total_picks = path
        .windows(2)
        .filter(|pair| pair[0].holding.is_none() && pair[1].holding.is_some())
        .count();
    let mut picks_seen = 0;
    let mut pick_announced = false;
    let mut stream = Vec::new();

    for pair in path.windows(2) {
        let (previous, next) = (&pair[0], &pair[1]);
        if next.arm != previous.arm {
            stream.push(if next.arm < previous.arm { "l" } else { "r" }.to_string());
            continue;
        }
        match (&previous.holding, &next.holding) {
            (None, Some(id)) => {
                picks_seen += 1;
                let description = shortest_description(id, &previous.stacks, objects);
                let verb = if picks_seen == total_picks {
                    "Taking"
                } else {
                    "Moving"
                };
                stream.push(format!("{verb} the {description}"));
                pick_announced = true;
                stream.push("p".to_string());
            }
            (Some(id), None) => {
                if !pick_announced {
                    let description = shortest_description(id, &previous.stacks, objects);
                    stream.push(format!("Dropping the {description}"));
                }
                pick_announced = false;
                stream.push("d".to_string());
            }
            _ => {}
        }
    }
    stream
}
