// src/lib.rs

//! Isoline extraction from 2D scalar fields via marching squares.
//!
//! Given a rectangular grid of scalar samples and an isovalue, the
//! extractor deterministically produces the line segments approximating
//! the contour crossing that threshold in each grid cell. The crate only
//! computes geometry — field generation and rendering belong to the
//! caller.
//!
//! ```
//! use isolines::prelude::*;
//!
//! let grid = ScalarGrid::from_rows(&[
//!     vec![1.0, 0.0],
//!     vec![0.0, 0.0],
//! ])?;
//!
//! for segment in MarchingSquares::isolines(&grid, 0.5, 10.0)? {
//!     println!("{:?} -> {:?}", segment.start, segment.end);
//! }
//! # Ok::<(), isolines::GridError>(())
//! ```

pub mod contour;
pub mod error;
pub mod field;
pub mod marching_squares;
pub mod types;
pub mod utils;

pub use contour::Contour;
pub use error::{GridError, GridResult};
pub use field::{ScalarField2D, ScalarGrid};
pub use marching_squares::{IsolineIter, MarchingSquares};
pub use types::{Point2D, Segment, Vec2};

/// Public API in one import.
pub mod prelude {
    pub use super::{
        contour::Contour,
        error::{GridError, GridResult},
        field::{ScalarField2D, ScalarGrid},
        marching_squares::{Edge, IsolineIter, MarchingSquares},
        types::{Point2D, Segment, Vec2},
    };
}
