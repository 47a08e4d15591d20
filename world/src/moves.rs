//! Primitive arm moves: preconditions, application, and the cost model.
//!
//! `apply` never mutates its input; every successor is a fresh copy.
//! Costs are integer fixed-point (1 model unit = [`UNIT`] cost units) so
//! frontier ordering stays total and bit-reproducible.

use std::collections::BTreeMap;

use crate::objects::{Form, ObjectSpec, Size};
use crate::physics::can_support;
use crate::relations::Relation;
use crate::state::WorldStateV1;

/// Integer cost in fixed-point units.
pub type Cost = i64;

/// One model cost unit.
pub const UNIT: Cost = 1_000;
/// Moving the arm one column with an empty hand.
pub const MOVE: Cost = UNIT;
/// Surcharge per column when carrying any object.
pub const CARRY: Cost = 2 * UNIT;
/// Additional surcharge per column when carrying a large object.
pub const CARRY_LARGE: Cost = 2 * UNIT;
/// Maximum surcharge for picking from (or dropping at) floor level.
pub const MAX_PICKUP: Cost = 10 * UNIT;

/// A primitive actuator action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Left,
    Right,
    Pick,
    Drop,
}

impl Move {
    /// The single-letter wire token for this action.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Right => "r",
            Self::Pick => "p",
            Self::Drop => "d",
        }
    }
}

/// Typed failure when a move's precondition does not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The arm is already at the relevant edge.
    ArmAtEdge { arm: usize },
    /// Pick attempted while an object is gripped.
    AlreadyHolding { id: String },
    /// Pick attempted over an empty column.
    EmptyColumn { column: usize },
    /// Drop attempted with an empty gripper.
    NothingHeld,
    /// Dropping `held` onto `top` is physically forbidden.
    UnsupportedDrop { held: String, top: String },
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArmAtEdge { arm } => write!(f, "arm at edge: column {arm}"),
            Self::AlreadyHolding { id } => write!(f, "already holding '{id}'"),
            Self::EmptyColumn { column } => write!(f, "nothing to pick in column {column}"),
            Self::NothingHeld => write!(f, "nothing held to drop"),
            Self::UnsupportedDrop { held, top } => {
                write!(f, "cannot drop '{held}' onto '{top}'")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Whether the held object may be dropped on the arm's current column.
fn drop_allowed(
    state: &WorldStateV1,
    objects: &BTreeMap<String, ObjectSpec>,
    held: &str,
) -> bool {
    let Some(top) = state.top(state.arm) else {
        return true; // empty column: rests on the floor
    };
    let (Some(held_spec), Some(top_spec)) = (objects.get(held), objects.get(top)) else {
        return false;
    };
    let relation = if top_spec.form == Form::Box {
        Relation::Inside
    } else {
        Relation::OnTop
    };
    can_support(held_spec, relation, top_spec)
}

/// Enumerate the legal moves from a state, in fixed order.
///
/// Enumeration is deterministic: same state, same objects, same result.
#[must_use]
pub fn legal_moves(state: &WorldStateV1, objects: &BTreeMap<String, ObjectSpec>) -> Vec<Move> {
    let mut moves = Vec::with_capacity(4);
    if state.arm > 0 {
        moves.push(Move::Left);
    }
    if state.arm + 1 < state.stacks.len() {
        moves.push(Move::Right);
    }
    match &state.holding {
        None => {
            if state.top(state.arm).is_some() {
                moves.push(Move::Pick);
            }
        }
        Some(held) => {
            if drop_allowed(state, objects, held) {
                moves.push(Move::Drop);
            }
        }
    }
    moves
}

/// Apply a move, producing a fresh successor state.
///
/// # Errors
///
/// Returns a [`MoveError`] when the move's precondition does not hold in
/// `state`.
pub fn apply(
    state: &WorldStateV1,
    mv: Move,
    objects: &BTreeMap<String, ObjectSpec>,
) -> Result<WorldStateV1, MoveError> {
    let mut next = state.clone();
    match mv {
        Move::Left => {
            if state.arm == 0 {
                return Err(MoveError::ArmAtEdge { arm: state.arm });
            }
            next.arm -= 1;
        }
        Move::Right => {
            if state.arm + 1 >= state.stacks.len() {
                return Err(MoveError::ArmAtEdge { arm: state.arm });
            }
            next.arm += 1;
        }
        Move::Pick => {
            if let Some(id) = &state.holding {
                return Err(MoveError::AlreadyHolding { id: id.clone() });
            }
            let Some(id) = next.stacks[next.arm].pop() else {
                return Err(MoveError::EmptyColumn { column: next.arm });
            };
            next.holding = Some(id);
        }
        Move::Drop => {
            let Some(held) = state.holding.clone() else {
                return Err(MoveError::NothingHeld);
            };
            if !drop_allowed(state, objects, &held) {
                let top = state.top(state.arm).unwrap_or_default().to_string();
                return Err(MoveError::UnsupportedDrop { held, top });
            }
            next.stacks[next.arm].push(held);
            next.holding = None;
        }
    }
    Ok(next)
}

/// Surcharge for gripper work at a column currently holding `height`
/// objects, out of `total` objects in the world. Floor-level work is the
/// most expensive; a full column puts the target right at the gripper.
fn height_cost(height: usize, total: usize) -> Cost {
    #[allow(clippy::cast_possible_wrap)]
    let n = total.max(1) as i64;
    #[allow(clippy::cast_possible_wrap)]
    let h = height as i64;
    UNIT + MAX_PICKUP * (n - h) / n
}

/// The cost of a move taken from `state`, before it is applied.
#[must_use]
pub fn move_cost(
    state: &WorldStateV1,
    mv: Move,
    objects: &BTreeMap<String, ObjectSpec>,
    total_objects: usize,
) -> Cost {
    match mv {
        Move::Left | Move::Right => match &state.holding {
            None => MOVE,
            Some(held) => {
                let large = objects.get(held).is_some_and(|spec| spec.size == Size::Large);
                if large {
                    MOVE + CARRY + CARRY_LARGE
                } else {
                    MOVE + CARRY
                }
            }
        },
        Move::Pick | Move::Drop => height_cost(state.stacks[state.arm].len(), total_objects),
    }
}
