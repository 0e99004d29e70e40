//! Rectangle sizes and the ordered problem instance.
//!
//! A [`Problem`] is the fixed set of rectangles a sequence pair places. The
//! order of the vector is the canonical identifier assignment: rectangle `i`
//! is `rectangles[i]`, and every permutation in a
//! [`SequencePair`](crate::SequencePair) ranges over exactly those indices.

use alloc::string::String;
use alloc::vec::Vec;

/// A rectangle to place. Dimensions are positive reals; a non-positive
/// dimension is rejected by [`decode`](crate::SequencePair::decode), not here.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
    /// Optional caller-facing label. Irrelevant to geometry.
    pub name: Option<String>,
}

impl Rectangle {
    /// Create an unnamed rectangle.
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            name: None,
        }
    }

    /// Create a labeled rectangle.
    pub fn named(width: f64, height: f64, name: impl Into<String>) -> Self {
        Self {
            width,
            height,
            name: Some(name.into()),
        }
    }

    /// The same rectangle with width and height swapped.
    ///
    /// This is how 90° rotation is expressed: swap the dimensions before
    /// decoding. There is no rotation transform inside the decoder itself.
    pub fn rotated(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
            name: self.name.clone(),
        }
    }
}

/// An ordered set of rectangles. Position in the vector is the rectangle's
/// identifier.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Problem {
    rectangles: Vec<Rectangle>,
}

impl Problem {
    /// Create a problem from rectangles in identifier order.
    pub fn new(rectangles: Vec<Rectangle>) -> Self {
        Self { rectangles }
    }

    /// Number of rectangles.
    pub fn len(&self) -> usize {
        self.rectangles.len()
    }

    /// Whether the problem has no rectangles.
    pub fn is_empty(&self) -> bool {
        self.rectangles.is_empty()
    }

    /// The rectangles, in identifier order.
    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_is_position() {
        let p = Problem::new(vec![Rectangle::new(1.0, 2.0), Rectangle::new(3.0, 4.0)]);
        assert_eq!(p.len(), 2);
        assert_eq!(p.rectangles()[1].width, 3.0);
    }

    #[test]
    fn rotated_swaps_dimensions() {
        let r = Rectangle::named(2.0, 5.0, "macro-a");
        let rot = r.rotated();
        assert_eq!(rot.width, 5.0);
        assert_eq!(rot.height, 2.0);
        assert_eq!(rot.name.as_deref(), Some("macro-a"));
    }

    #[test]
    fn empty_problem() {
        let p = Problem::default();
        assert!(p.is_empty());
        assert_eq!(p.len(), 0);
    }
}
