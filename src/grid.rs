//! The oblique grid: discrete rank coordinates derived from a sequence pair.
//!
//! Each rectangle's rank in the first permutation becomes its x-rank and its
//! rank in the second becomes its y-rank. In this skewed coordinate system
//! the sequence-pair geometric relations reduce to plain rank comparisons,
//! which is what makes the decode's longest-path accumulation possible
//! without materializing a constraint graph.

use alloc::vec;
use alloc::vec::Vec;

/// Discrete `(x, y)` rank position of one rectangle, each rank in `0..n`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankCoord {
    /// Rank in the first permutation (Gp).
    pub x: usize,
    /// Rank in the second permutation (Gn).
    pub y: usize,
}

/// The n×n rank matrix and per-identifier coordinate list for one sequence
/// pair. Derived eagerly at [`SequencePair`](crate::SequencePair)
/// construction; read-only afterwards.
///
/// `grid[x][y] == Some(id)` iff `coordinates[id] == RankCoord { x, y }`:
/// rows are indexed by x-rank, cells within a row by y-rank. Every row and
/// every column holds exactly one occupied cell — the grid is a permutation
/// matrix over rectangle identifiers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObliqueGrid {
    grid: Vec<Vec<Option<usize>>>,
    coordinates: Vec<RankCoord>,
}

impl ObliqueGrid {
    /// Build the grid from two validated permutations of `0..n`.
    ///
    /// Callers must have checked both sequences are bijections of equal
    /// length; [`SequencePair::new`](crate::SequencePair::new) does.
    pub(crate) fn from_permutations(gp: &[usize], gn: &[usize]) -> Self {
        let n = gp.len();
        let mut coordinates = vec![RankCoord { x: 0, y: 0 }; n];
        for (rank, &id) in gp.iter().enumerate() {
            coordinates[id].x = rank;
        }
        for (rank, &id) in gn.iter().enumerate() {
            coordinates[id].y = rank;
        }

        let mut grid = vec![vec![None; n]; n];
        for (id, coord) in coordinates.iter().enumerate() {
            grid[coord.x][coord.y] = Some(id);
        }

        Self { grid, coordinates }
    }

    /// The n×n rank matrix, row-major by x-rank. `None` = empty cell.
    pub fn grid(&self) -> &[Vec<Option<usize>>] {
        &self.grid
    }

    /// Rank coordinates indexed by rectangle identifier.
    pub fn coordinates(&self) -> &[RankCoord] {
        &self.coordinates
    }

    /// Occupant of the cell at `(x, y)` ranks, if any.
    pub fn at(&self, x: usize, y: usize) -> Option<usize> {
        self.grid[x][y]
    }
}
