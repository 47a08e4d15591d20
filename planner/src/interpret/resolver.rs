//! Referring-expression resolution against a world snapshot.

use std::collections::BTreeSet;

use shrdlite_world::objects::FLOOR_ID;
use shrdlite_world::relations::related_ids;
use shrdlite_world::snapshot::WorldSnapshotV1;

use crate::parse::{Entity, FormPattern, Location, ObjectDescription, Quantifier};

use super::InterpretError;

/// Resolve a surface entity to candidate identifiers, applying the
/// definite-description post-check.
///
/// # Errors
///
/// - [`InterpretError::NoSuchEntity`] when nothing matches,
/// - [`InterpretError::Ambiguous`] when `the` matches more than one object.
pub fn resolve_entity(
    entity: &Entity,
    snapshot: &WorldSnapshotV1,
) -> Result<Vec<String>, InterpretError> {
    let candidates = find_candidates(&entity.object, snapshot, None);
    if candidates.is_empty() {
        return Err(InterpretError::NoSuchEntity {
            description: entity.object.to_string(),
        });
    }
    if entity.quantifier == Quantifier::The && candidates.len() > 1 {
        return Err(InterpretError::Ambiguous {
            description: entity.object.to_string(),
            candidates,
        });
    }
    Ok(candidates)
}

/// Collect every present identifier matching the description, in stack
/// order (held identifier last).
///
/// The `"floor"` form is a terminal sentinel resolving to the reserved
/// floor identifier. `restrict`, when supplied, is intersected first.
#[must_use]
pub fn find_candidates(
    description: &ObjectDescription,
    snapshot: &WorldSnapshotV1,
    restrict: Option<&BTreeSet<String>>,
) -> Vec<String> {
    if description.form == FormPattern::Floor {
        let admitted = restrict.map_or(true, |allowed| allowed.contains(FLOOR_ID));
        return if admitted {
            vec![FLOOR_ID.to_string()]
        } else {
            Vec::new()
        };
    }
    snapshot
        .present_ids()
        .into_iter()
        .filter(|id| restrict.map_or(true, |allowed| allowed.contains(*id)))
        .filter(|id| matches_description(description, id, snapshot))
        .map(ToString::to_string)
        .collect()
}

/// Whether one identifier satisfies every constraint of the description,
/// at every nesting level.
fn matches_description(
    description: &ObjectDescription,
    id: &str,
    snapshot: &WorldSnapshotV1,
) -> bool {
    let Some(spec) = snapshot.spec(id) else {
        return false;
    };
    if !description.form.matches(spec.form) {
        return false;
    }
    if description.size.is_some_and(|size| size != spec.size) {
        return false;
    }
    if description.color.is_some_and(|color| color != spec.color) {
        return false;
    }
    if let Some(inner) = &description.object {
        if !matches_description(inner, id, snapshot) {
            return false;
        }
    }
    if let Some(location) = &description.location {
        if !location_holds(location, id, snapshot) {
            return false;
        }
    }
    true
}

/// Whether a locative clause holds for a candidate.
///
/// Held candidates stand in no positional relation and fail every clause.
/// For `any`/`the` the clause holds when some related object matches the
/// inner entity. For `all` the candidate must be related to every placed
/// object matching the inner entity (and at least one must exist).
fn location_holds(location: &Location, candidate: &str, snapshot: &WorldSnapshotV1) -> bool {
    let Some((column, height)) = snapshot.position(candidate) else {
        return false;
    };
    let related: BTreeSet<String> =
        related_ids(&snapshot.stacks, column, height, location.relation)
            .into_iter()
            .collect();
    match location.entity.quantifier {
        Quantifier::The | Quantifier::Any => {
            !find_candidates(&location.entity.object, snapshot, Some(&related)).is_empty()
        }
        Quantifier::All => {
            let placed: BTreeSet<String> = snapshot
                .placed_ids()
                .into_iter()
                .map(ToString::to_string)
                .collect();
            let matching = find_candidates(&location.entity.object, snapshot, Some(&placed));
            !matching.is_empty() && matching.iter().all(|id| related.contains(id))
        }
    }
}
