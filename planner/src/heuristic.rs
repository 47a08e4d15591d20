//! Admissible goal-distance estimation.
//!
//! The formula estimate is the minimum across disjuncts (achieving any one
//! suffices) of the maximum across a conjunction's literals (the most
//! expensive literal lower-bounds the cost of achieving all of them, while
//! a sum would double-count shared work).
//!
//! Every per-literal estimator counts each physically necessary sub-task
//! (uncovering, re-approaching, carrying) at most once, priced at the
//! minimum the successor model can realise, so `h` never overestimates.

use shrdlite_world::moves::{Cost, CARRY, MOVE, UNIT};
use shrdlite_world::objects::FLOOR_ID;
use shrdlite_world::relations::Relation;
use shrdlite_world::state::WorldStateV1;

use crate::formula::{DnfFormula, GoalAtom, Literal};

/// Estimate the remaining cost to satisfy the formula from this state.
#[must_use]
pub fn estimate(formula: &DnfFormula, state: &WorldStateV1) -> Cost {
    formula
        .disjuncts
        .iter()
        .map(|conjunction| {
            conjunction
                .iter()
                .map(|literal| estimate_literal(literal, state))
                .max()
                .unwrap_or(0)
        })
        .min()
        .unwrap_or(0)
}

/// Lower bound for one literal; 0 when it is satisfied or when an argument
/// is not locatable in the stacks.
#[must_use]
pub fn estimate_literal(literal: &Literal, state: &WorldStateV1) -> Cost {
    if !literal.polarity || literal.satisfied_in(state) {
        return 0;
    }
    match &literal.atom {
        GoalAtom::Holding(id) => {
            let Some((column, height)) = state.position(id) else {
                return 0;
            };
            column_distance(state.arm, column) * MOVE + clear_and_grip_at(state, column, height)
        }
        GoalAtom::Related {
            subject,
            relation,
            object,
        } => match relation {
            // under(s,o) is above(o,s); estimate the flipped literal
            Relation::Under => {
                estimate_relation(state, object, Relation::Above, subject)
            }
            _ => estimate_relation(state, subject, *relation, object),
        },
    }
}

fn estimate_relation(
    state: &WorldStateV1,
    subject: &str,
    relation: Relation,
    object: &str,
) -> Cost {
    if subject == FLOOR_ID {
        return 0;
    }
    let Some((sx, sy)) = state.position(subject) else {
        return 0;
    };
    match relation {
        Relation::OnTop | Relation::Inside => {
            if object == FLOOR_ID {
                return clear_and_grip_at(state, sx, sy);
            }
            let Some((ox, oy)) = state.position(object) else {
                return 0;
            };
            if sx == ox {
                clear_higher(state, (sx, sy), (ox, oy))
            } else {
                stack_transfer(state, (sx, sy), (ox, oy))
            }
        }
        Relation::Above => {
            if object == FLOOR_ID {
                return clear_and_grip_at(state, sx, sy);
            }
            let Some((ox, oy)) = state.position(object) else {
                return 0;
            };
            if sx == ox {
                clear_higher(state, (sx, sy), (ox, oy))
            } else {
                clear_and_grip_at(state, sx, sy) + column_distance(sx, ox) * MOVE + UNIT
            }
        }
        Relation::LeftOf | Relation::RightOf => {
            let Some((ox, oy)) = state.position(object) else {
                return 0;
            };
            // carry distance needed to swap their order
            let gap = column_distance(sx, ox) + 1;
            move_to_closer(state.arm, sx, ox)
                + gap * MOVE
                + clear_and_grip_at(state, sx, sy).min(clear_and_grip_at(state, ox, oy))
        }
        Relation::Beside => {
            let Some((ox, oy)) = state.position(object) else {
                return 0;
            };
            let gap = (column_distance(sx, ox) - 1).abs();
            move_to_closer(state.arm, sx, ox)
                + gap * MOVE
                + clear_and_grip_at(state, sx, sy).min(clear_and_grip_at(state, ox, oy))
        }
        // flipped by the caller
        Relation::Under => 0,
    }
}

/// Cost to uncover and grip the object at `(column, height)`: each item on
/// top must at least be picked, carried one column, and dropped, then the
/// target itself gripped.
fn clear_and_grip_at(state: &WorldStateV1, column: usize, height: usize) -> Cost {
    #[allow(clippy::cast_possible_wrap)]
    let covering = (state.stacks[column].len() - 1 - height) as Cost;
    covering * (MOVE + CARRY + 2 * UNIT) + UNIT
}

/// Same-column misplacement: at least the higher of the two must be
/// uncovered and gripped.
fn clear_higher(state: &WorldStateV1, a: (usize, usize), b: (usize, usize)) -> Cost {
    let (column, height) = if a.1 >= b.1 { a } else { b };
    clear_and_grip_at(state, column, height)
}

/// Different-column restacking: uncover both piles, carry the subject
/// across, and set it down.
fn stack_transfer(state: &WorldStateV1, subject: (usize, usize), object: (usize, usize)) -> Cost {
    let (sx, sy) = subject;
    let (ox, oy) = object;
    #[allow(clippy::cast_possible_wrap)]
    let covering_subject = (state.stacks[sx].len() - 1 - sy) as Cost;
    #[allow(clippy::cast_possible_wrap)]
    let covering_object = (state.stacks[ox].len() - 1 - oy) as Cost;
    (covering_subject + covering_object) * (MOVE + CARRY + 2 * UNIT)
        + column_distance(sx, ox) * MOVE
        + 2 * UNIT
}

fn column_distance(a: usize, b: usize) -> Cost {
    #[allow(clippy::cast_possible_wrap)]
    let (a, b) = (a as i64, b as i64);
    (a - b).abs()
}

/// The arm's distance to the closer of the two columns.
fn move_to_closer(arm: usize, a: usize, b: usize) -> Cost {
    MOVE * column_distance(arm, a).min(column_distance(arm, b))
}
