//! Spatial relations and the positional relation extensor.

use serde::{Deserialize, Serialize};

use crate::objects::FLOOR_ID;

/// A binary spatial relation between two objects.
///
/// The tags match the upstream parser's relation words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    OnTop,
    Inside,
    Above,
    Under,
    LeftOf,
    RightOf,
    Beside,
}

impl Relation {
    /// The surface word for this relation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OnTop => "ontop",
            Self::Inside => "inside",
            Self::Above => "above",
            Self::Under => "under",
            Self::LeftOf => "leftof",
            Self::RightOf => "rightof",
            Self::Beside => "beside",
        }
    }
}

/// The relation extensor: all identifiers standing in `relation` to the
/// object at `(column, height)`.
///
/// Callers must only pass positions of placed objects; held objects stand
/// in no positional relation. The returned set may contain the reserved
/// `"floor"` identifier for `ontop` (height 0) and `above`.
#[must_use]
pub fn related_ids(
    stacks: &[Vec<String>],
    column: usize,
    height: usize,
    relation: Relation,
) -> Vec<String> {
    match relation {
        Relation::LeftOf => stacks.iter().skip(column + 1).flatten().cloned().collect(),
        Relation::RightOf => stacks.iter().take(column).flatten().cloned().collect(),
        Relation::Beside => {
            let mut ids = Vec::new();
            if column > 0 {
                ids.extend(stacks[column - 1].iter().cloned());
            }
            if column + 1 < stacks.len() {
                ids.extend(stacks[column + 1].iter().cloned());
            }
            ids
        }
        Relation::Inside => {
            // the supporter immediately below, read as "inside" when it is a box
            if height > 0 {
                vec![stacks[column][height - 1].clone()]
            } else {
                Vec::new()
            }
        }
        Relation::OnTop => {
            if height > 0 {
                vec![stacks[column][height - 1].clone()]
            } else {
                vec![FLOOR_ID.to_string()]
            }
        }
        Relation::Under => stacks[column].iter().skip(height + 1).cloned().collect(),
        Relation::Above => {
            let mut ids = vec![FLOOR_ID.to_string()];
            ids.extend(stacks[column].iter().take(height).cloned());
            ids
        }
    }
}
