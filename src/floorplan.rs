//! The decoded result: per-rectangle positions, bounding box, and area.

use alloc::vec::Vec;

/// One placed rectangle. `(x, y)` is the lower-left corner.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedRect {
    /// Rectangle identifier (index into the problem's rectangle list).
    pub id: usize,
    /// Lower-left x coordinate.
    pub x: f64,
    /// Lower-left y coordinate.
    pub y: f64,
}

/// Extent of the smallest axis-aligned box containing every placed rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Create a bounding box.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Enclosed area, `width * height`.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// A decoded placement. Produced fresh by each
/// [`decode`](crate::SequencePair::decode) call; value equality only, never
/// mutated after return.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floorplan {
    /// Placed rectangles, ordered by identifier.
    pub positions: Vec<PlacedRect>,
    /// Smallest axis-aligned box containing the whole placement.
    pub bounding_box: BoundingBox,
    /// `bounding_box.area()`, precomputed — this is the objective signal an
    /// outer optimizer reads once per candidate.
    pub area: f64,
}

impl Floorplan {
    /// The degenerate floorplan for zero rectangles: no positions, a
    /// zero-size box, zero area.
    pub fn empty() -> Self {
        Self {
            positions: Vec::new(),
            bounding_box: BoundingBox::default(),
            area: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box_area() {
        assert_eq!(BoundingBox::new(11.1, 6.0).area(), 66.6);
        assert_eq!(BoundingBox::default().area(), 0.0);
    }

    #[test]
    fn empty_floorplan_is_degenerate() {
        let fp = Floorplan::empty();
        assert!(fp.positions.is_empty());
        assert_eq!(fp.bounding_box, BoundingBox::new(0.0, 0.0));
        assert_eq!(fp.area, 0.0);
    }
}
