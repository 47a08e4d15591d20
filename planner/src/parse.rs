//! Parse-tree DTOs: the wire surface shared with the upstream grammar
//! parser.
//!
//! The parser delivers one JSON command tree per reading of the utterance.
//! These types mirror that shape exactly; missing optional fields are
//! interpreter errors, not deserialization errors.

use std::fmt;

use serde::{Deserialize, Serialize};

use shrdlite_world::objects::{Color, Form, Size};
use shrdlite_world::relations::Relation;

/// One parsed reading of a user command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub command: CommandVerb,
    #[serde(default)]
    pub entity: Option<Entity>,
    #[serde(default)]
    pub location: Option<Location>,
}

/// The command head word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandVerb {
    Take,
    Put,
    Move,
}

/// A quantified noun phrase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub quantifier: Quantifier,
    pub object: ObjectDescription,
}

/// Determiner semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantifier {
    /// Exactly one referent; more than one match is ambiguous.
    The,
    /// At least one referent.
    Any,
    /// Every matching referent.
    All,
}

/// A (possibly nested) object description.
///
/// A relative clause parses as an outer description carrying only `object`
/// and `location`; scalar constraints accumulate across nesting levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectDescription {
    #[serde(default)]
    pub size: Option<Size>,
    #[serde(default)]
    pub color: Option<Color>,
    pub form: FormPattern,
    #[serde(default)]
    pub object: Option<Box<ObjectDescription>>,
    #[serde(default)]
    pub location: Option<Box<Location>>,
}

/// A form constraint, including the `"anyform"` wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormPattern {
    AnyForm,
    Brick,
    Plank,
    Ball,
    Pyramid,
    Box,
    Table,
    Floor,
}

impl FormPattern {
    /// The concrete form this pattern names, if any.
    #[must_use]
    pub fn as_form(self) -> Option<Form> {
        match self {
            Self::AnyForm => None,
            Self::Brick => Some(Form::Brick),
            Self::Plank => Some(Form::Plank),
            Self::Ball => Some(Form::Ball),
            Self::Pyramid => Some(Form::Pyramid),
            Self::Box => Some(Form::Box),
            Self::Table => Some(Form::Table),
            Self::Floor => Some(Form::Floor),
        }
    }

    /// Whether a concrete form satisfies this pattern.
    #[must_use]
    pub fn matches(self, form: Form) -> bool {
        self.as_form().map_or(true, |wanted| wanted == form)
    }
}

/// A locative modifier: a relation to another quantified entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub relation: Relation,
    pub entity: Entity,
}

impl fmt::Display for ObjectDescription {
    /// A surface rendering for error messages ("small white ball").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut words: Vec<&str> = Vec::new();
        if let Some(size) = self.size {
            words.push(size.as_str());
        }
        if let Some(color) = self.color {
            words.push(color.as_str());
        }
        match self.form.as_form() {
            Some(form) => words.push(form.as_str()),
            None => words.push("object"),
        }
        f.write_str(&words.join(" "))
    }
}
