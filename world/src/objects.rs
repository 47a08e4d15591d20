//! Object taxonomy: forms, sizes, colors, and per-object specifications.

use serde::{Deserialize, Serialize};

/// Reserved identifier for the implicit floor.
///
/// The floor is never stored in any stack; it is the implicit bottom of
/// every column and appears only as a relation argument.
pub const FLOOR_ID: &str = "floor";

/// Specification used whenever the floor participates in a relation.
///
/// `Large` so the size rules of the support table never block placement on
/// the floor; the color is never consulted.
pub const FLOOR_SPEC: ObjectSpec = ObjectSpec {
    form: Form::Floor,
    size: Size::Large,
    color: Color::Black,
};

/// Object form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Form {
    Brick,
    Plank,
    Ball,
    Pyramid,
    Box,
    Table,
    Floor,
}

impl Form {
    /// The surface word for this form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brick => "brick",
            Self::Plank => "plank",
            Self::Ball => "ball",
            Self::Pyramid => "pyramid",
            Self::Box => "box",
            Self::Table => "table",
            Self::Floor => "floor",
        }
    }
}

/// Object size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Large,
}

impl Size {
    /// The surface word for this size.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Large => "large",
        }
    }
}

/// Object color (the palette used by the example worlds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
    Blue,
    Green,
    Yellow,
    Red,
}

impl Color {
    /// The surface word for this color.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }
}

/// The physical description of one object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectSpec {
    pub form: Form,
    pub size: Size,
    pub color: Color,
}
