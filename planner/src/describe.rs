//! Shortest unambiguous object descriptions for utterances.

use std::collections::BTreeMap;

use shrdlite_world::objects::ObjectSpec;

/// Describe `id` with the fewest properties that single it out among the
/// objects currently present in the stacks.
///
/// Property tuples are tried in order `[form]`, `[color, form]`,
/// `[size, form]`; if none is unique the full `[size, color, form]` is
/// used regardless.
#[must_use]
pub fn shortest_description(
    id: &str,
    stacks: &[Vec<String>],
    objects: &BTreeMap<String, ObjectSpec>,
) -> String {
    let Some(target) = objects.get(id) else {
        return id.to_string();
    };
    let others: Vec<&ObjectSpec> = stacks
        .iter()
        .flatten()
        .filter(|other| *other != id)
        .filter_map(|other| objects.get(other))
        .collect();

    if others.iter().all(|o| o.form != target.form) {
        return target.form.as_str().to_string();
    }
    if others
        .iter()
        .all(|o| o.form != target.form || o.color != target.color)
    {
        return format!("{} {}", target.color.as_str(), target.form.as_str());
    }
    if others
        .iter()
        .all(|o| o.form != target.form || o.size != target.size)
    {
        return format!("{} {}", target.size.as_str(), target.form.as_str());
    }
    format!(
        "{} {} {}",
        target.size.as_str(),
        target.color.as_str(),
        target.form.as_str()
    )
}
