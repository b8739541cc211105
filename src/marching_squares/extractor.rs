// src/marching_squares/extractor.rs
use glam::Vec2;

use super::cases::{CASE_TABLE, Edge, cell_case};
use crate::error::{GridError, GridResult};
use crate::field::ScalarField2D;
use crate::types::Segment;
use crate::utils::constants;

/// Interpolated crossings on the four edges of one cell, indexed by
/// [`Edge`]. A crossing exists only where the two endpoint samples
/// straddle the isovalue.
type EdgeCrossings = [Option<Vec2>; 4];

/// Lazy iterator over the isoline segments of a scalar field.
///
/// Cells are visited in a fixed scan order (column index outer, row index
/// inner over `x in 0..width-1`, `y in 0..height-1`); within a cell,
/// segments come out in case-table order. The iterator holds nothing but
/// a borrow of the field, so dropping it early is free, and cloning it
/// restarts nothing — a clone continues from the same position. For a
/// fresh pass, call [`MarchingSquares::isolines`] again.
///
/// Cell computations are mutually independent (no cell reads another
/// cell's output), so callers needing parallelism can partition the cell
/// range freely as long as they re-establish this order afterwards.
pub struct IsolineIter<'a, F: ScalarField2D + ?Sized> {
    field: &'a F,
    isovalue: f32,
    cell_size: f32,
    x: usize,
    y: usize,
    pending: Option<Segment>,
}

impl<F: ScalarField2D + ?Sized> Clone for IsolineIter<'_, F> {
    fn clone(&self) -> Self {
        Self {
            field: self.field,
            isovalue: self.isovalue,
            cell_size: self.cell_size,
            x: self.x,
            y: self.y,
            pending: self.pending,
        }
    }
}

impl<'a, F: ScalarField2D + ?Sized> IsolineIter<'a, F> {
    fn new(field: &'a F, isovalue: f32, cell_size: f32) -> Self {
        Self {
            field,
            isovalue,
            cell_size,
            x: 0,
            y: 0,
            pending: None,
        }
    }

    /// Interpolation parameter along an edge whose endpoint samples are
    /// `f_a` and `f_b`. When the samples are numerically identical the
    /// division would blow up, so the crossing is pinned to the midpoint.
    fn crossing_t(&self, f_a: f32, f_b: f32) -> f32 {
        if (f_a - f_b).abs() < constants::INTERP_EPSILON {
            0.5
        } else {
            (self.isovalue - f_a) / (f_b - f_a)
        }
    }

    #[inline]
    fn straddles(&self, f_a: f32, f_b: f32) -> bool {
        (f_a > self.isovalue) != (f_b > self.isovalue)
    }

    /// Computes the four possible edge crossings of the cell at `(x, y)`,
    /// each independently and only where its endpoint samples straddle
    /// the isovalue. Endpoint order is fixed per edge: top tl→tr,
    /// right tr→br, bottom bl→br, left tl→bl.
    fn edge_crossings(&self, x: usize, y: usize, tl: f32, tr: f32, br: f32, bl: f32) -> EdgeCrossings {
        let size = self.cell_size;
        let origin = Vec2::new(x as f32 * size, y as f32 * size);

        let mut crossings: EdgeCrossings = [None; 4];
        if self.straddles(tl, tr) {
            let t = self.crossing_t(tl, tr);
            crossings[Edge::Top as usize] = Some(origin + Vec2::new(t * size, 0.0));
        }
        if self.straddles(tr, br) {
            let t = self.crossing_t(tr, br);
            crossings[Edge::Right as usize] = Some(origin + Vec2::new(size, t * size));
        }
        if self.straddles(bl, br) {
            let t = self.crossing_t(bl, br);
            crossings[Edge::Bottom as usize] = Some(origin + Vec2::new(t * size, size));
        }
        if self.straddles(tl, bl) {
            let t = self.crossing_t(tl, bl);
            crossings[Edge::Left as usize] = Some(origin + Vec2::new(0.0, t * size));
        }
        crossings
    }

    /// Up to two segments for the cell at `(x, y)`, in case-table order.
    ///
    /// A table entry is emitted only when both of its crossings actually
    /// exist; a missing crossing (floating-point alignment of a corner
    /// with the isovalue) suppresses that segment rather than failing.
    fn cell_segments(&self, x: usize, y: usize) -> [Option<Segment>; 2] {
        let tl = self.field.value(x, y);
        let tr = self.field.value(x + 1, y);
        let bl = self.field.value(x, y + 1);
        let br = self.field.value(x + 1, y + 1);

        let case = cell_case(tl, tr, br, bl, self.isovalue);
        if case == 0 || case == 15 {
            return [None, None];
        }

        let crossings = self.edge_crossings(x, y, tl, tr, br, bl);
        CASE_TABLE[case].map(|entry| {
            let (a, b) = entry?;
            let start = crossings[a as usize]?;
            let end = crossings[b as usize]?;
            Some(Segment::new(start, end))
        })
    }
}

impl<F: ScalarField2D + ?Sized> Iterator for IsolineIter<'_, F> {
    type Item = Segment;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(segment) = self.pending.take() {
            return Some(segment);
        }

        // Both dimensions are >= 2 (validated at construction), so the
        // cell ranges below are non-empty.
        let cols = self.field.width() - 1;
        let rows = self.field.height() - 1;

        while self.x < cols {
            while self.y < rows {
                let (x, y) = (self.x, self.y);
                self.y += 1;

                let [first, second] = self.cell_segments(x, y);
                self.pending = second;
                if first.is_some() {
                    return first;
                }
                if self.pending.is_some() {
                    return self.pending.take();
                }
            }
            self.y = 0;
            self.x += 1;
        }
        None
    }
}

/// Marching-squares isoline extraction over a [`ScalarField2D`].
pub struct MarchingSquares;

impl MarchingSquares {
    /// Extracts the isoline segments of `field` at `isovalue` as a lazy
    /// iterator. `cell_size` is the physical spacing between adjacent
    /// grid points and only scales the output coordinates; it must be
    /// positive and finite. An isovalue outside the sample range is
    /// legal and yields an empty sequence.
    ///
    /// Pure: identical inputs produce identical segment sequences. The
    /// only failure is a field smaller than 2x2 sample points, which
    /// cannot contain a single cell.
    pub fn isolines<F: ScalarField2D + ?Sized>(
        field: &F,
        isovalue: f32,
        cell_size: f32,
    ) -> GridResult<IsolineIter<'_, F>> {
        let (cols, rows) = (field.width(), field.height());
        if cols < 2 || rows < 2 {
            return Err(GridError::TooSmall { cols, rows });
        }

        log::debug!(
            "extracting isolines: {}x{} samples, isovalue {}, cell size {}",
            cols,
            rows,
            isovalue,
            cell_size
        );
        Ok(IsolineIter::new(field, isovalue, cell_size))
    }

    /// Eager variant of [`MarchingSquares::isolines`].
    pub fn extract_segments<F: ScalarField2D + ?Sized>(
        field: &F,
        isovalue: f32,
        cell_size: f32,
    ) -> GridResult<Vec<Segment>> {
        Ok(Self::isolines(field, isovalue, cell_size)?.collect())
    }
}
