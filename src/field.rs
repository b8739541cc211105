// src/field.rs
use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};

/// A two-dimensional scalar field sampled on a regular grid.
///
/// Lets the marching-squares extractor operate over arbitrary field
/// implementations; only the sample dimensions and point lookup are
/// required. Physical spacing is supplied to the extraction call, not
/// stored on the field.
pub trait ScalarField2D {
    /// Width of the field in sample points (columns).
    fn width(&self) -> usize;

    /// Height of the field in sample points (rows).
    fn height(&self) -> usize;

    /// Sample value at grid point `(x, y)`.
    ///
    /// Should return 0.0 (or a suitable default) for out-of-bounds
    /// coordinates rather than panic.
    fn value(&self, x: usize, y: usize) -> f32;
}

/// Row-major scalar sample storage.
///
/// Samples are addressable by `(x, y)` with `0 <= x < width` and
/// `0 <= y < height`. The value range is up to the caller; the extractor
/// only compares samples against an isovalue in the same range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarGrid {
    data: Vec<f32>,
    width: usize,
    height: usize,
}

impl ScalarGrid {
    /// Creates a zero-filled grid. Shape is validated at extraction time,
    /// so degenerate dimensions are representable but yield no contours.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: vec![0.0; width * height],
            width,
            height,
        }
    }

    /// Builds a grid from nested rows (`rows[y][x]`).
    ///
    /// All rows must have the same length; ragged input fails with
    /// [`GridError::RaggedRow`].
    pub fn from_rows(rows: &[Vec<f32>]) -> GridResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        let mut data = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected: width,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Fills a grid from a closure of grid coordinates.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let mut grid = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                grid.data[y * width + x] = f(x, y);
            }
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Sample at `(x, y)`, 0.0 when out of bounds.
    pub fn get(&self, x: usize, y: usize) -> f32 {
        match self.idx(x, y) {
            Some(index) => self.data.get(index).copied().unwrap_or(0.0),
            None => 0.0,
        }
    }

    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        if let Some(index) = self.idx(x, y) {
            if let Some(val_ref) = self.data.get_mut(index) {
                *val_ref = value;
            }
        }
    }

    /// Raw row-major sample slice.
    pub fn data(&self) -> &[f32] {
        &self.data
    }
}

impl ScalarField2D for ScalarGrid {
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
    fn value(&self, x: usize, y: usize) -> f32 {
        self.get(x, y)
    }
}
