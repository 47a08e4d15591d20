//! Read-only world snapshot: the external input surface.
//!
//! A snapshot arrives from the embedding UI alongside each parsed
//! utterance. It is consumed read-only; planning never mutates it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::objects::{Form, ObjectSpec, FLOOR_ID, FLOOR_SPEC};

/// The world as seen at the start of planning.
///
/// Invariants (checked by [`WorldSnapshotV1::validate`]):
/// - every identifier in `stacks` or `holding` is defined in `objects`,
/// - no identifier occurs twice (across stacks and the gripper),
/// - `arm` indexes an existing column,
/// - `"floor"` is never stored in a stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSnapshotV1 {
    /// Columns, each ordered from the floor upward.
    pub stacks: Vec<Vec<String>>,
    /// Identifier currently gripped, if any.
    #[serde(default)]
    pub holding: Option<String>,
    /// Column index the arm is positioned over.
    pub arm: usize,
    /// Physical descriptions, keyed by identifier.
    pub objects: BTreeMap<String, ObjectSpec>,
}

/// Typed failure for snapshot validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// An identifier in `stacks` or `holding` has no definition in `objects`.
    UnknownObject { id: String },
    /// An identifier occurs more than once across stacks and the gripper.
    DuplicateObject { id: String },
    /// `arm` does not index an existing column.
    ArmOutOfRange { arm: usize, columns: usize },
    /// The reserved `"floor"` identifier was stored in a stack.
    FloorInStack { column: usize },
    /// An explicit `"floor"` entry in `objects` does not have form `floor`.
    MisdefinedFloor,
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownObject { id } => write!(f, "object '{id}' has no definition"),
            Self::DuplicateObject { id } => write!(f, "object '{id}' occurs more than once"),
            Self::ArmOutOfRange { arm, columns } => {
                write!(f, "arm column {arm} out of range for {columns} columns")
            }
            Self::FloorInStack { column } => {
                write!(f, "reserved 'floor' identifier stored in column {column}")
            }
            Self::MisdefinedFloor => write!(f, "explicit 'floor' entry must have form floor"),
        }
    }
}

impl std::error::Error for SnapshotError {}

impl WorldSnapshotV1 {
    /// Check the structural invariants of §world-snapshot.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.arm >= self.stacks.len() {
            return Err(SnapshotError::ArmOutOfRange {
                arm: self.arm,
                columns: self.stacks.len(),
            });
        }
        let mut seen: Vec<&str> = Vec::new();
        for (column, stack) in self.stacks.iter().enumerate() {
            for id in stack {
                if id == FLOOR_ID {
                    return Err(SnapshotError::FloorInStack { column });
                }
                if !self.objects.contains_key(id) {
                    return Err(SnapshotError::UnknownObject { id: id.clone() });
                }
                if seen.contains(&id.as_str()) {
                    return Err(SnapshotError::DuplicateObject { id: id.clone() });
                }
                seen.push(id);
            }
        }
        if let Some(held) = &self.holding {
            if !self.objects.contains_key(held) {
                return Err(SnapshotError::UnknownObject { id: held.clone() });
            }
            if seen.contains(&held.as_str()) {
                return Err(SnapshotError::DuplicateObject { id: held.clone() });
            }
        }
        if let Some(floor) = self.objects.get(FLOOR_ID) {
            if floor.form != Form::Floor {
                return Err(SnapshotError::MisdefinedFloor);
            }
        }
        Ok(())
    }

    /// Look up the physical description of an identifier.
    ///
    /// `"floor"` always resolves, whether or not the snapshot defines it
    /// explicitly.
    #[must_use]
    pub fn spec(&self, id: &str) -> Option<&ObjectSpec> {
        if let Some(spec) = self.objects.get(id) {
            return Some(spec);
        }
        (id == FLOOR_ID).then_some(&FLOOR_SPEC)
    }

    /// Identifiers placed in the stacks, in column then height order.
    #[must_use]
    pub fn placed_ids(&self) -> Vec<&str> {
        self.stacks
            .iter()
            .flatten()
            .map(String::as_str)
            .collect()
    }

    /// Identifiers present in the world: placed ones, then the held one.
    #[must_use]
    pub fn present_ids(&self) -> Vec<&str> {
        let mut ids = self.placed_ids();
        if let Some(held) = &self.holding {
            ids.push(held.as_str());
        }
        ids
    }

    /// `(column, height)` of a placed identifier, heights counted from the
    /// floor. Held or absent identifiers have no position.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<(usize, usize)> {
        self.stacks.iter().enumerate().find_map(|(x, stack)| {
            stack
                .iter()
                .position(|candidate| candidate == id)
                .map(|y| (x, y))
        })
    }
}
