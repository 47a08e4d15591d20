//! Physical feasibility of relations, independent of current position.

use crate::objects::{Form, ObjectSpec, Size};
use crate::relations::Relation;

/// Whether `lhs` may ever stand in `relation` to `rhs`.
///
/// This is the closed truth table of the world's physics. `false` means the
/// relation is physically forbidden for the pair; it says nothing about the
/// current configuration.
#[must_use]
pub fn can_support(lhs: &ObjectSpec, relation: Relation, rhs: &ObjectSpec) -> bool {
    match relation {
        Relation::OnTop => {
            if matches!(rhs.form, Form::Box | Form::Ball) {
                return false;
            }
            if lhs.form == Form::Ball && rhs.form != Form::Floor {
                return false;
            }
            if lhs.size == Size::Large && rhs.size == Size::Small {
                return false;
            }
            if lhs.form == Form::Box
                && rhs.size == Size::Small
                && matches!(rhs.form, Form::Brick | Form::Pyramid)
            {
                return false;
            }
            if lhs.form == Form::Box && lhs.size == Size::Large && rhs.form == Form::Pyramid {
                return false;
            }
            true
        }
        Relation::Inside => {
            if rhs.form != Form::Box {
                return false;
            }
            if lhs.size == rhs.size && !matches!(lhs.form, Form::Ball | Form::Brick | Form::Table) {
                return false;
            }
            if rhs.size == Size::Small && lhs.size == Size::Large {
                return false;
            }
            true
        }
        Relation::Above => {
            rhs.form != Form::Ball && !(lhs.size == Size::Large && rhs.size == Size::Small)
        }
        Relation::Under => can_support(rhs, Relation::Above, lhs),
        Relation::LeftOf | Relation::RightOf | Relation::Beside => true,
    }
}
