//! Sequence-pair floorplan decoding.
//!
//! Decodes a pair of permutations over rectangle identifiers into a
//! non-overlapping placement with a minimal bounding box. Pure geometry —
//! no I/O, no shared state, `no_std` compatible (requires `alloc`).
//!
//! # Modules
//!
//! - [`pair`] — The sequence-pair representation and the decode algorithm
//! - [`grid`] — The oblique grid: discrete rank coordinates for each rectangle
//! - [`problem`] — Rectangle sizes and the ordered problem instance
//! - [`floorplan`] — The decoded result: positions, bounding box, area
//!
//! # Example
//!
//! ```
//! use seqpair::{Problem, Rectangle, SequencePair};
//!
//! let problem = Problem::new(vec![
//!     Rectangle::new(4.0, 6.0),
//!     Rectangle::new(4.0, 4.0),
//! ]);
//! let pair = SequencePair::new(vec![0, 1], vec![0, 1]).unwrap();
//! let floorplan = pair.decode(&problem).unwrap();
//!
//! // Same order in both permutations: rectangle 0 sits left of rectangle 1.
//! assert_eq!(floorplan.positions[1].x, 4.0);
//! assert_eq!(floorplan.area, 8.0 * 6.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod floorplan;
pub mod grid;
pub mod pair;
pub mod problem;

pub use floorplan::{BoundingBox, Floorplan, PlacedRect};
pub use grid::{ObliqueGrid, RankCoord};
pub use pair::{SeqPairError, SequencePair};
pub use problem::{Problem, Rectangle};
