//! Goal compilation: from resolved candidates to a feasibility-filtered
//! DNF of goal literals.

use shrdlite_world::objects::FLOOR_ID;
use shrdlite_world::physics::can_support;
use shrdlite_world::relations::Relation;
use shrdlite_world::snapshot::WorldSnapshotV1;

use crate::formula::{cnf_to_dnf, Conjunction, DnfFormula, GoalAtom, Literal};
use crate::parse::{Command, CommandVerb, Entity, Location, Quantifier};

use super::resolver::resolve_entity;
use super::InterpretError;

/// Compile one parsed command into a goal formula.
///
/// # Errors
///
/// See [`InterpretError`]; every kind except `NoValidSolution` is raised
/// before goal construction, `NoValidSolution` after feasibility
/// filtering empties the formula.
pub fn interpret(
    command: &Command,
    snapshot: &WorldSnapshotV1,
) -> Result<DnfFormula, InterpretError> {
    match command.command {
        CommandVerb::Take => {
            let entity = command.entity.as_ref().ok_or(InterpretError::NoEntity)?;
            interpret_take(entity, snapshot)
        }
        CommandVerb::Put => {
            let location = command.location.as_ref().ok_or(InterpretError::NoEntity)?;
            interpret_put(location, snapshot)
        }
        CommandVerb::Move => {
            let entity = command.entity.as_ref().ok_or(InterpretError::NoEntity)?;
            let location = command.location.as_ref().ok_or(InterpretError::NoEntity)?;
            interpret_move(entity, location, snapshot)
        }
    }
}

fn interpret_take(
    entity: &Entity,
    snapshot: &WorldSnapshotV1,
) -> Result<DnfFormula, InterpretError> {
    let candidates = resolve_entity(entity, snapshot)?;
    if candidates.iter().any(|id| id == FLOOR_ID) {
        return Err(InterpretError::CannotPickUpFloor);
    }
    if entity.quantifier == Quantifier::All && candidates.len() > 1 {
        return Err(InterpretError::UnsupportedAll {
            detail: "the arm cannot hold more than one object".into(),
        });
    }
    finish(
        candidates
            .into_iter()
            .map(|id| vec![Literal::holding(id)])
            .collect(),
    )
}

fn interpret_put(
    location: &Location,
    snapshot: &WorldSnapshotV1,
) -> Result<DnfFormula, InterpretError> {
    let held = snapshot
        .holding
        .clone()
        .ok_or(InterpretError::NotHolding)?;
    let destinations = resolve_entity(&location.entity, snapshot)?;
    let sources = vec![held];
    let disjuncts = if location.entity.quantifier == Quantifier::All {
        // the single held object must cover every destination
        cnf_to_dnf(&destination_clauses(&sources, &destinations, location.relation))
    } else {
        pair_disjuncts(&sources, &destinations, location.relation)
    };
    finish(filter_feasible(disjuncts, snapshot))
}

fn interpret_move(
    entity: &Entity,
    location: &Location,
    snapshot: &WorldSnapshotV1,
) -> Result<DnfFormula, InterpretError> {
    let sources = resolve_entity(entity, snapshot)?;
    let destinations = resolve_entity(&location.entity, snapshot)?;
    let relation = location.relation;
    let source_all = entity.quantifier == Quantifier::All;
    let destination_all = location.entity.quantifier == Quantifier::All;

    let disjuncts = if !source_all && !destination_all {
        pair_disjuncts(&sources, &destinations, relation)
    } else {
        let mut clauses = Vec::new();
        if source_all {
            clauses.extend(source_clauses(&sources, &destinations, relation));
        }
        if destination_all {
            clauses.extend(destination_clauses(&sources, &destinations, relation));
        }
        let mut dnf = cnf_to_dnf(&clauses);
        if source_all && destination_all {
            dnf = flatten_to_union(dnf);
        }
        dnf
    };
    finish(filter_feasible(disjuncts, snapshot))
}

/// Cartesian single-literal disjuncts, self-pairs skipped.
fn pair_disjuncts(
    sources: &[String],
    destinations: &[String],
    relation: Relation,
) -> Vec<Conjunction> {
    let mut disjuncts = Vec::new();
    for source in sources {
        for destination in destinations {
            if source != destination {
                disjuncts.push(vec![Literal::related(
                    source.clone(),
                    relation,
                    destination.clone(),
                )]);
            }
        }
    }
    disjuncts
}

/// One clause per source: it must land on some destination.
fn source_clauses(
    sources: &[String],
    destinations: &[String],
    relation: Relation,
) -> Vec<Vec<Literal>> {
    sources
        .iter()
        .map(|source| {
            destinations
                .iter()
                .filter(|destination| *destination != source)
                .map(|destination| {
                    Literal::related(source.clone(), relation, destination.clone())
                })
                .collect()
        })
        .collect()
}

/// One clause per destination: some source must cover it (flipped mode).
fn destination_clauses(
    sources: &[String],
    destinations: &[String],
    relation: Relation,
) -> Vec<Vec<Literal>> {
    destinations
        .iter()
        .map(|destination| {
            sources
                .iter()
                .filter(|source| *source != destination)
                .map(|source| {
                    Literal::related(source.clone(), relation, destination.clone())
                })
                .collect()
        })
        .collect()
}

/// Collapse a DNF into one conjunction holding the deduplicated union of
/// all its literals (the `all`-entity + `all`-destination reading).
fn flatten_to_union(dnf: Vec<Conjunction>) -> Vec<Conjunction> {
    let mut union: Conjunction = Vec::new();
    for conjunction in dnf {
        for literal in conjunction {
            if !union.contains(&literal) {
                union.push(literal);
            }
        }
    }
    if union.is_empty() {
        Vec::new()
    } else {
        vec![union]
    }
}

/// Keep only conjunctions whose every literal is physically feasible and
/// which claim no support twice.
fn filter_feasible(disjuncts: Vec<Conjunction>, snapshot: &WorldSnapshotV1) -> Vec<Conjunction> {
    disjuncts
        .into_iter()
        .filter(|conjunction| {
            conjunction
                .iter()
                .all(|literal| literal_feasible(literal, snapshot))
        })
        .filter(|conjunction| !has_support_conflict(conjunction))
        .collect()
}

/// Physical feasibility of a single literal (§feasibility table plus the
/// floor placement rules: floor only as `ontop`/`above` target and `under`
/// subject).
fn literal_feasible(literal: &Literal, snapshot: &WorldSnapshotV1) -> bool {
    match &literal.atom {
        GoalAtom::Holding(id) => id != FLOOR_ID,
        GoalAtom::Related {
            subject,
            relation,
            object,
        } => {
            if subject == FLOOR_ID {
                return *relation == Relation::Under;
            }
            if object == FLOOR_ID && !matches!(relation, Relation::OnTop | Relation::Above) {
                return false;
            }
            let (Some(subject_spec), Some(object_spec)) =
                (snapshot.spec(subject), snapshot.spec(object))
            else {
                return false;
            };
            can_support(subject_spec, *relation, object_spec)
        }
    }
}

/// Two objects cannot share one support, and one object cannot rest on two
/// supports. The floor is exempt as a target.
fn has_support_conflict(conjunction: &Conjunction) -> bool {
    let mut subjects: Vec<&str> = Vec::new();
    let mut objects: Vec<&str> = Vec::new();
    for literal in conjunction {
        let GoalAtom::Related {
            subject,
            relation,
            object,
        } = &literal.atom
        else {
            continue;
        };
        if !matches!(relation, Relation::OnTop | Relation::Inside) {
            continue;
        }
        if subjects.contains(&subject.as_str()) {
            return true;
        }
        subjects.push(subject);
        if object != FLOOR_ID {
            if objects.contains(&object.as_str()) {
                return true;
            }
            objects.push(object);
        }
    }
    false
}

fn finish(disjuncts: Vec<Conjunction>) -> Result<DnfFormula, InterpretError> {
    if disjuncts.is_empty() {
        return Err(InterpretError::NoValidSolution);
    }
    Ok(DnfFormula::new(disjuncts))
}
