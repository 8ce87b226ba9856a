//! Visual identities: the (color, shape) pair a token is drawn with.
//!
//! Identities are handed out round-robin by join order. Every color is used
//! once before the shape rotates, so with five colors the sixth joiner gets
//! the first color again with the second shape.

use serde::{Deserialize, Serialize};

/// A named token color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub name: &'static str,
    pub rgb: [u8; 3],
}

/// Token colors in assignment order.
pub const COLORS: [Color; 5] = [
    Color { name: "blue", rgb: [0x00, 0x21, 0x59] },
    Color { name: "green", rgb: [0x00, 0x59, 0x39] },
    Color { name: "purple", rgb: [0x59, 0x00, 0x57] },
    Color { name: "olive", rgb: [0x3e, 0x59, 0x00] },
    Color { name: "yellow", rgb: [0x59, 0x59, 0x00] },
];

/// Token outline shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Circle,
    Square,
}

impl Shape {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Square => "square",
        }
    }
}

/// Token shapes in assignment order.
pub const SHAPES: [Shape; 2] = [Shape::Circle, Shape::Square];

/// Indices into [`COLORS`] and [`SHAPES`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisualIdentity {
    pub color_index: usize,
    pub shape_index: usize,
}

impl VisualIdentity {
    #[must_use]
    pub fn color(self) -> Color {
        COLORS[self.color_index % COLORS.len()]
    }

    #[must_use]
    pub fn shape(self) -> Shape {
        SHAPES[self.shape_index % SHAPES.len()]
    }
}

impl std::fmt::Display for VisualIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color().name, self.shape().name())
    }
}

/// Identity for the player who joins after `joined_before` others, using
/// the built-in palettes.
///
/// ```
/// use snakes_ladders::core::identity_for;
///
/// let sixth = identity_for(5);
/// assert_eq!(sixth.color_index, 0);
/// assert_eq!(sixth.shape_index, 1);
/// ```
#[must_use]
pub fn identity_for(joined_before: usize) -> VisualIdentity {
    identity_in_palette(joined_before, COLORS.len(), SHAPES.len())
}

/// Identity for a palette of `colors` colors and `shapes` shapes.
///
/// Both counts must be non-zero.
#[must_use]
pub fn identity_in_palette(joined_before: usize, colors: usize, shapes: usize) -> VisualIdentity {
    VisualIdentity {
        color_index: joined_before % colors,
        shape_index: (joined_before / colors) % shapes,
    }
}
