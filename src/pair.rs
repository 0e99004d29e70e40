//! The sequence-pair representation and the decode algorithm.
//!
//! A sequence pair is two permutations `(Gp, Gn)` of the rectangle
//! identifiers `0..n`. For any two distinct rectangles exactly one geometric
//! relation follows from their relative orders:
//!
//! - same order in both permutations ⇒ the earlier one is strictly left of
//!   the later one;
//! - later in `Gp` but earlier in `Gn` ⇒ strictly below.
//!
//! Every pair of rectangles is related on exactly one axis, so decoding a
//! sequence pair always yields a well-defined, non-overlapping placement.
//!
//! [`SequencePair::decode`] resolves those relations into real coordinates
//! with two mirrored longest-path passes over the
//! [`ObliqueGrid`](crate::ObliqueGrid) ranks — `O(n²)` time, one auxiliary
//! array of size `n`, no explicit constraint graph.

use alloc::vec;
use alloc::vec::Vec;

use crate::floorplan::{BoundingBox, Floorplan, PlacedRect};
use crate::grid::ObliqueGrid;
use crate::problem::Problem;

/// Validation error from sequence-pair construction or decoding.
///
/// All three are deterministic input errors detected before any partial
/// result is built; there is nothing to retry. Zero rectangles is not an
/// error — it decodes to [`Floorplan::empty`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SeqPairError {
    /// A supplied sequence is not a bijection on `0..n` (duplicate or
    /// out-of-range identifier), or the two sequences differ in length.
    InvalidPermutation,
    /// The problem's rectangle count does not match the pair's `n`.
    RectangleCountMismatch {
        /// The sequence pair's `n`.
        expected: usize,
        /// Rectangles actually supplied.
        actual: usize,
    },
    /// A rectangle with non-positive width or height reached the decoder.
    InvalidRectangle {
        /// Identifier of the offending rectangle.
        id: usize,
    },
}

impl core::fmt::Display for SeqPairError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Self::InvalidPermutation => {
                write!(f, "sequence pair is not a pair of equal-length permutations")
            }
            Self::RectangleCountMismatch { expected, actual } => {
                write!(f, "problem has {actual} rectangles, sequence pair expects {expected}")
            }
            Self::InvalidRectangle { id } => {
                write!(f, "rectangle {id} has a non-positive dimension")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SeqPairError {}

/// An immutable pair of permutations over rectangle identifiers, with its
/// oblique grid derived eagerly at construction.
///
/// Construction validates both permutations; everything downstream can rely
/// on them being bijections of equal length. Decoding borrows the pair
/// read-only, so one `SequencePair` can serve many concurrent `decode`
/// calls without synchronization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequencePair {
    gp: Vec<usize>,
    gn: Vec<usize>,
    n: usize,
    oblique_grid: ObliqueGrid,
}

impl SequencePair {
    /// Create a sequence pair from the positive and negative loci.
    ///
    /// Fails with [`SeqPairError::InvalidPermutation`] when the sequences
    /// differ in length or either is not a permutation of `0..n`.
    pub fn new(gp: Vec<usize>, gn: Vec<usize>) -> Result<Self, SeqPairError> {
        if gp.len() != gn.len() || !is_permutation(&gp) || !is_permutation(&gn) {
            return Err(SeqPairError::InvalidPermutation);
        }
        let n = gp.len();
        let oblique_grid = ObliqueGrid::from_permutations(&gp, &gn);
        Ok(Self {
            gp,
            gn,
            n,
            oblique_grid,
        })
    }

    /// The positive locus (first permutation).
    pub fn gp(&self) -> &[usize] {
        &self.gp
    }

    /// The negative locus (second permutation).
    pub fn gn(&self) -> &[usize] {
        &self.gn
    }

    /// Both permutations, `(Gp, Gn)`.
    pub fn pair(&self) -> (&[usize], &[usize]) {
        (&self.gp, &self.gn)
    }

    /// Number of rectangles this pair places.
    pub fn n(&self) -> usize {
        self.n
    }

    /// The derived rank grid.
    pub fn oblique_grid(&self) -> &ObliqueGrid {
        &self.oblique_grid
    }

    /// Decode into a concrete placement for `problem`'s rectangle sizes.
    ///
    /// Pure and deterministic: the same pair and problem always produce a
    /// bit-identical [`Floorplan`]. Positions are lower-left corners, the
    /// placement is anchored so the minimum x and minimum y are both `0`,
    /// and no two rectangle interiors overlap.
    ///
    /// Fails with [`SeqPairError::RectangleCountMismatch`] when the problem
    /// does not supply exactly `n` rectangles, or
    /// [`SeqPairError::InvalidRectangle`] when any dimension is not strictly
    /// positive — in both cases before any coordinate is computed.
    pub fn decode(&self, problem: &Problem) -> Result<Floorplan, SeqPairError> {
        let rects = problem.rectangles();
        if rects.len() != self.n {
            return Err(SeqPairError::RectangleCountMismatch {
                expected: self.n,
                actual: rects.len(),
            });
        }
        if let Some(id) = rects
            .iter()
            .position(|r| !(r.width > 0.0) || !(r.height > 0.0))
        {
            return Err(SeqPairError::InvalidRectangle { id });
        }
        if self.n == 0 {
            return Ok(Floorplan::empty());
        }

        let coords = self.oblique_grid.coordinates();

        // Horizontal pass: walk Gp in order, so every rectangle left of the
        // current one is already placed. Its predecessors are exactly the
        // seen rectangles with a smaller y-rank.
        let ranks_y: Vec<usize> = coords.iter().map(|c| c.y).collect();
        let widths: Vec<f64> = rects.iter().map(|r| r.width).collect();
        let xs = longest_reach(&self.gp, &ranks_y, &widths, Window::Below);

        // Vertical pass, mirrored: walk Gn in order; predecessors are the
        // seen rectangles with a larger x-rank (later in Gp, earlier in Gn).
        let ranks_x: Vec<usize> = coords.iter().map(|c| c.x).collect();
        let heights: Vec<f64> = rects.iter().map(|r| r.height).collect();
        let ys = longest_reach(&self.gn, &ranks_x, &heights, Window::Above);

        let positions: Vec<PlacedRect> = (0..self.n)
            .map(|id| PlacedRect {
                id,
                x: xs[id],
                y: ys[id],
            })
            .collect();

        let width = positions
            .iter()
            .map(|p| p.x + rects[p.id].width)
            .fold(0.0_f64, f64::max);
        let height = positions
            .iter()
            .map(|p| p.y + rects[p.id].height)
            .fold(0.0_f64, f64::max);
        let bounding_box = BoundingBox::new(width, height);

        Ok(Floorplan {
            positions,
            area: bounding_box.area(),
            bounding_box,
        })
    }
}

/// Which side of the current rank holds a pass's predecessors.
#[derive(Copy, Clone)]
enum Window {
    /// Ranks `0..rank` (horizontal pass, consulting y-ranks).
    Below,
    /// Ranks `rank+1..n` (vertical pass, consulting x-ranks).
    Above,
}

/// One longest-path accumulation pass.
///
/// Processes identifiers in `order`, which is a topological order of the
/// implicit precedence DAG for the axis being computed. `reach[r]` holds,
/// for the already-processed rectangle at cross-axis rank `r`, its
/// coordinate plus its size — the furthest point a chain through it
/// reaches. Each rectangle starts at the maximum reach over its predecessor
/// window; unseen ranks hold `0.0`, which can never overshoot since all
/// coordinates are non-negative. This is the LCS-style table substitute for
/// an explicit longest-path computation: `O(n²)` time, `O(n)` extra space.
///
/// Ties among equal reach values resolve to the same coordinate regardless
/// of fold order, and the fold itself is left-to-right over ranks, so the
/// result is bit-stable across calls.
fn longest_reach(order: &[usize], ranks: &[usize], sizes: &[f64], window: Window) -> Vec<f64> {
    let n = order.len();
    let mut reach = vec![0.0_f64; n];
    let mut pos = vec![0.0_f64; n];
    for &id in order {
        let rank = ranks[id];
        let predecessors = match window {
            Window::Below => &reach[..rank],
            Window::Above => &reach[rank + 1..],
        };
        let start = predecessors.iter().copied().fold(0.0_f64, f64::max);
        pos[id] = start;
        reach[rank] = start + sizes[id];
    }
    pos
}

fn is_permutation(seq: &[usize]) -> bool {
    let n = seq.len();
    let mut seen = vec![false; n];
    for &id in seq {
        if id >= n || seen[id] {
            return false;
        }
        seen[id] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Rectangle;

    fn problem() -> Problem {
        Problem::new(vec![
            Rectangle::new(4.0, 6.0),
            Rectangle::new(4.0, 4.0),
            Rectangle::new(2.1, 3.2),
            Rectangle::new(1.0, 5.0),
        ])
    }

    // ── construction ────────────────────────────────────────────────────

    #[test]
    fn construction_stores_pair_and_grid() {
        let sp = SequencePair::new(vec![0, 1, 2, 3], vec![0, 1, 2, 3]).unwrap();
        assert_eq!(sp.n(), 4);
        assert_eq!(sp.gp(), &[0, 1, 2, 3]);
        assert_eq!(sp.gn(), &[0, 1, 2, 3]);
        assert_eq!(sp.pair(), (&[0, 1, 2, 3][..], &[0, 1, 2, 3][..]));
        assert_eq!(sp.oblique_grid().at(2, 2), Some(2));
    }

    #[test]
    fn duplicate_identifier_rejected() {
        // Duplicate 1, missing 2.
        assert_eq!(
            SequencePair::new(vec![0, 1, 1], vec![0, 1, 2]),
            Err(SeqPairError::InvalidPermutation)
        );
    }

    #[test]
    fn out_of_range_identifier_rejected() {
        assert_eq!(
            SequencePair::new(vec![0, 3], vec![0, 1]),
            Err(SeqPairError::InvalidPermutation)
        );
    }

    #[test]
    fn length_mismatch_rejected() {
        assert_eq!(
            SequencePair::new(vec![0, 1, 2], vec![0, 1]),
            Err(SeqPairError::InvalidPermutation)
        );
    }

    #[test]
    fn empty_pair_is_valid() {
        let sp = SequencePair::new(vec![], vec![]).unwrap();
        assert_eq!(sp.n(), 0);
    }

    // ── decode validation ───────────────────────────────────────────────

    #[test]
    fn count_mismatch_rejected() {
        let sp = SequencePair::new(vec![0, 1], vec![1, 0]).unwrap();
        assert_eq!(
            sp.decode(&problem()),
            Err(SeqPairError::RectangleCountMismatch {
                expected: 2,
                actual: 4
            })
        );
    }

    #[test]
    fn non_positive_dimension_rejected() {
        let sp = SequencePair::new(vec![0, 1], vec![0, 1]).unwrap();
        let bad = Problem::new(vec![Rectangle::new(2.0, 3.0), Rectangle::new(0.0, 3.0)]);
        assert_eq!(
            sp.decode(&bad),
            Err(SeqPairError::InvalidRectangle { id: 1 })
        );
        let bad = Problem::new(vec![Rectangle::new(-1.0, 3.0), Rectangle::new(2.0, 3.0)]);
        assert_eq!(
            sp.decode(&bad),
            Err(SeqPairError::InvalidRectangle { id: 0 })
        );
    }

    #[test]
    fn zero_rectangles_decode_to_empty() {
        let sp = SequencePair::new(vec![], vec![]).unwrap();
        let fp = sp.decode(&Problem::default()).unwrap();
        assert_eq!(fp, Floorplan::empty());
    }

    // ── decode geometry ─────────────────────────────────────────────────

    #[test]
    fn horizontal_chain() {
        // Same order in both permutations: a single left-to-right chain.
        let sp = SequencePair::new(vec![0, 1, 2, 3], vec![0, 1, 2, 3]).unwrap();
        let fp = sp.decode(&problem()).unwrap();

        let xy: Vec<(f64, f64)> = fp.positions.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(xy, vec![(0.0, 0.0), (4.0, 0.0), (8.0, 0.0), (10.1, 0.0)]);
        assert_eq!(fp.bounding_box, BoundingBox::new(11.1, 6.0));
        assert_eq!(fp.area, 66.6);
    }

    #[test]
    fn vertical_chain() {
        // Reversed Gn: a single column, y decreasing with identifier.
        let sp = SequencePair::new(vec![0, 1, 2, 3], vec![3, 2, 1, 0]).unwrap();
        let fp = sp.decode(&problem()).unwrap();

        let xy: Vec<(f64, f64)> = fp.positions.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(xy, vec![(0.0, 12.2), (0.0, 8.2), (0.0, 5.0), (0.0, 0.0)]);
        assert_eq!(fp.bounding_box, BoundingBox::new(4.0, 18.2));
        assert_eq!(fp.area, 72.8);
    }

    #[test]
    fn single_rectangle() {
        let sp = SequencePair::new(vec![0], vec![0]).unwrap();
        let fp = sp
            .decode(&Problem::new(vec![Rectangle::new(3.5, 2.0)]))
            .unwrap();
        assert_eq!(fp.positions, vec![PlacedRect { id: 0, x: 0.0, y: 0.0 }]);
        assert_eq!(fp.bounding_box, BoundingBox::new(3.5, 2.0));
        assert_eq!(fp.area, 7.0);
    }

    #[test]
    fn mixed_relations() {
        // Gp = [1, 0], Gn = [0, 1]: 1 before 0 in Gp, after in Gn,
        // so rectangle 1 sits above rectangle 0 — same x, stacked y.
        let p = Problem::new(vec![Rectangle::new(2.0, 3.0), Rectangle::new(5.0, 1.0)]);
        let sp = SequencePair::new(vec![1, 0], vec![0, 1]).unwrap();
        let fp = sp.decode(&p).unwrap();
        assert_eq!(fp.positions[0].x, 0.0);
        assert_eq!(fp.positions[0].y, 0.0);
        assert_eq!(fp.positions[1].x, 0.0);
        assert_eq!(fp.positions[1].y, 3.0);
        assert_eq!(fp.bounding_box, BoundingBox::new(5.0, 4.0));
    }

    #[test]
    fn decode_is_deterministic() {
        let sp = SequencePair::new(vec![2, 0, 3, 1], vec![1, 3, 0, 2]).unwrap();
        let a = sp.decode(&problem()).unwrap();
        let b = sp.decode(&problem()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn error_display() {
        let err = SeqPairError::RectangleCountMismatch {
            expected: 4,
            actual: 2,
        };
        assert_eq!(
            alloc::format!("{err}"),
            "problem has 2 rectangles, sequence pair expects 4"
        );
    }
}
