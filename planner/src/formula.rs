//! Goal literals, conjunctions, and DNF formulas over world states.

use std::fmt;

use shrdlite_world::objects::FLOOR_ID;
use shrdlite_world::relations::{related_ids, Relation};
use shrdlite_world::state::WorldStateV1;

/// One relational atom.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum GoalAtom {
    /// The gripper holds the identifier.
    Holding(String),
    /// `subject` stands in `relation` to `object` in the stacks.
    Related {
        subject: String,
        relation: Relation,
        object: String,
    },
}

/// A signed atom.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Literal {
    pub polarity: bool,
    pub atom: GoalAtom,
}

impl Literal {
    /// A positive `holding` literal.
    #[must_use]
    pub fn holding(id: impl Into<String>) -> Self {
        Self {
            polarity: true,
            atom: GoalAtom::Holding(id.into()),
        }
    }

    /// A positive spatial literal.
    #[must_use]
    pub fn related(
        subject: impl Into<String>,
        relation: Relation,
        object: impl Into<String>,
    ) -> Self {
        Self {
            polarity: true,
            atom: GoalAtom::Related {
                subject: subject.into(),
                relation,
                object: object.into(),
            },
        }
    }

    /// Evaluate this literal against a state.
    ///
    /// A held object satisfies no spatial literal as subject: it stands in
    /// no positional relation until it is put down.
    #[must_use]
    pub fn satisfied_in(&self, state: &WorldStateV1) -> bool {
        let truth = match &self.atom {
            GoalAtom::Holding(id) => state.holding.as_deref() == Some(id.as_str()),
            GoalAtom::Related {
                subject,
                relation,
                object,
            } => spatial_holds(state, subject, *relation, object),
        };
        truth == self.polarity
    }
}

fn spatial_holds(state: &WorldStateV1, subject: &str, relation: Relation, object: &str) -> bool {
    if subject == FLOOR_ID {
        // the floor stands under exactly the placed objects
        return relation == Relation::Under && state.position(object).is_some();
    }
    if state.holding.as_deref() == Some(subject) {
        return false;
    }
    let Some((column, height)) = state.position(subject) else {
        return false;
    };
    related_ids(&state.stacks, column, height, relation)
        .iter()
        .any(|id| id == object)
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.polarity {
            f.write_str("!")?;
        }
        match &self.atom {
            GoalAtom::Holding(id) => write!(f, "holding({id})"),
            GoalAtom::Related {
                subject,
                relation,
                object,
            } => write!(f, "{}({subject},{object})", relation.as_str()),
        }
    }
}

/// A conjunction of literals, all required to hold.
pub type Conjunction = Vec<Literal>;

/// A disjunction of conjunctions; satisfied iff any conjunction is.
///
/// The empty formula means "no interpretation" and satisfies no state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnfFormula {
    pub disjuncts: Vec<Conjunction>,
}

impl DnfFormula {
    #[must_use]
    pub fn new(disjuncts: Vec<Conjunction>) -> Self {
        Self { disjuncts }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.disjuncts.is_empty()
    }

    /// The goal test: some conjunction has every literal satisfied.
    #[must_use]
    pub fn is_satisfied(&self, state: &WorldStateV1) -> bool {
        self.disjuncts
            .iter()
            .any(|conjunction| conjunction.iter().all(|literal| literal.satisfied_in(state)))
    }
}

/// Distribute a CNF (conjunction of clauses) into DNF by iterative
/// cross-product.
///
/// Each resulting conjunction is a choice function over the clauses, with
/// duplicate literals within one conjunction collapsed. An empty clause
/// makes the whole CNF unsatisfiable and yields the empty DNF. Worst-case
/// output size is the product of clause sizes; inputs are small by
/// construction.
#[must_use]
pub fn cnf_to_dnf(clauses: &[Vec<Literal>]) -> Vec<Conjunction> {
    let mut current: Vec<Conjunction> = vec![Vec::new()];
    for clause in clauses {
        if clause.is_empty() {
            return Vec::new();
        }
        let mut next = Vec::with_capacity(current.len() * clause.len());
        for conjunction in &current {
            for literal in clause {
                let mut grown = conjunction.clone();
                if !grown.contains(literal) {
                    grown.push(literal.clone());
                }
                next.push(grown);
            }
        }
        current = next;
    }
    current
}
