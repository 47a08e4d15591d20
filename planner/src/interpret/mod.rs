//! Goal interpretation: referring-expression resolution and goal
//! compilation into DNF.

mod compile;
mod resolver;

pub use compile::interpret;
pub use resolver::{find_candidates, resolve_entity};

use crate::formula::DnfFormula;
use crate::parse::Command;
use shrdlite_world::snapshot::WorldSnapshotV1;

/// Typed failure for goal interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpretError {
    /// The command is missing its required entity or location argument.
    NoEntity,
    /// No world object matches the description.
    NoSuchEntity { description: String },
    /// A definite description matched more than one object.
    Ambiguous {
        description: String,
        candidates: Vec<String>,
    },
    /// A `take` resolved to the floor.
    CannotPickUpFloor,
    /// A `put` was issued with an empty gripper.
    NotHolding,
    /// Every candidate goal was filtered as physically impossible.
    NoValidSolution,
    /// `all` used where the single gripper cannot honor it.
    UnsupportedAll { detail: String },
}

impl std::fmt::Display for InterpretError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoEntity => write!(f, "the command is missing an entity"),
            Self::NoSuchEntity { description } => {
                write!(f, "there is no {description} in the world")
            }
            Self::Ambiguous {
                description,
                candidates,
            } => write!(
                f,
                "'the {description}' is ambiguous between {} objects",
                candidates.len()
            ),
            Self::CannotPickUpFloor => write!(f, "the floor cannot be picked up"),
            Self::NotHolding => write!(f, "nothing is being held"),
            Self::NoValidSolution => write!(f, "no physically possible goal remains"),
            Self::UnsupportedAll { detail } => write!(f, "'all' is not supported here: {detail}"),
        }
    }
}

impl std::error::Error for InterpretError {}

/// Interpret every parse, accumulating successes.
///
/// Errors are silently dropped while at least one parse interprets; only
/// if none succeeded is the first encountered error surfaced.
///
/// # Errors
///
/// The first [`InterpretError`] when no parse yields a goal.
pub fn interpret_all(
    parses: &[Command],
    snapshot: &WorldSnapshotV1,
) -> Result<Vec<DnfFormula>, InterpretError> {
    let mut goals = Vec::new();
    let mut first_error = None;
    for command in parses {
        match interpret(command, snapshot) {
            Ok(goal) => goals.push(goal),
            Err(error) => {
                first_error.get_or_insert(error);
            }
        }
    }
    if goals.is_empty() {
        return Err(first_error.unwrap_or(InterpretError::NoEntity));
    }
    Ok(goals)
}
