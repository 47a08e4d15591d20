//! Mutable-by-copy search state.
//!
//! A [`WorldStateV1`] owns its stacks; successor generation deep-copies and
//! never mutates an existing state. Structural equality over
//! `(stacks, holding, arm)` is the identity that drives search dedup.

use crate::snapshot::WorldSnapshotV1;

/// One configuration of the world during search.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorldStateV1 {
    /// Columns, each ordered from the floor upward.
    pub stacks: Vec<Vec<String>>,
    /// Identifier currently gripped, if any.
    pub holding: Option<String>,
    /// Column index the arm is positioned over.
    pub arm: usize,
}

impl WorldStateV1 {
    /// The search start state for a snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: &WorldSnapshotV1) -> Self {
        Self {
            stacks: snapshot.stacks.clone(),
            holding: snapshot.holding.clone(),
            arm: snapshot.arm,
        }
    }

    /// `(column, height)` of a placed identifier. Held identifiers have no
    /// position.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<(usize, usize)> {
        self.stacks.iter().enumerate().find_map(|(x, stack)| {
            stack
                .iter()
                .position(|candidate| candidate == id)
                .map(|y| (x, y))
        })
    }

    /// The identifier on top of the given column.
    #[must_use]
    pub fn top(&self, column: usize) -> Option<&str> {
        self.stacks.get(column).and_then(|stack| {
            stack.last().map(String::as_str)
        })
    }

    /// Number of objects in the world (placed plus held).
    #[must_use]
    pub fn total_objects(&self) -> usize {
        let placed: usize = self.stacks.iter().map(Vec::len).sum();
        placed + usize::from(self.holding.is_some())
    }

    /// Canonical identity bytes for fingerprinting.
    ///
    /// Field and element boundaries use ASCII separator control bytes,
    /// which cannot occur in object identifiers, so distinct states never
    /// serialize to the same bytes.
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        #[allow(clippy::cast_possible_truncation)]
        bytes.extend_from_slice(&(self.arm as u32).to_le_bytes());
        bytes.push(0x1f);
        if let Some(held) = &self.holding {
            bytes.extend_from_slice(held.as_bytes());
        }
        bytes.push(0x1e);
        for stack in &self.stacks {
            for id in stack {
                bytes.extend_from_slice(id.as_bytes());
                bytes.push(0x1d);
            }
            bytes.push(0x1c);
        }
        bytes
    }
}
