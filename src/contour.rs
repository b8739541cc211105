// src/contour.rs
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::types::Segment;
use crate::utils::constants;

/// A contour polyline assembled from extracted isoline segments.
///
/// Closed contours store the first vertex again at the end, so the
/// vertex list always reads as a chain of consecutive edges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contour {
    pub vertices: Vec<Vec2>,
    pub is_closed: bool,
}

impl Contour {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            is_closed: false,
        }
    }

    pub fn add_vertex(&mut self, vertex: Vec2) {
        self.vertices.push(vertex);
    }

    /// Marks the contour as closed. A closed contour needs at least
    /// three distinct vertices.
    pub fn close(&mut self) {
        if self.vertices.len() >= 3 {
            self.is_closed = true;
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Chains loose segments into polylines by matching endpoints within
    /// `tolerance`. Segments whose ends meet nothing stay as two-vertex
    /// open contours. When a chain's ends meet, the loop is snapped shut
    /// and marked closed.
    ///
    /// Marching squares emits per-cell segments whose shared endpoints
    /// coincide only up to floating-point interpolation error, so a
    /// tolerance somewhat above [`constants::EPSILON`] is usually right
    /// for stitching extractor output.
    pub fn stitch(segments: &[Segment], tolerance: f32) -> Vec<Contour> {
        let tol_sq = tolerance * tolerance;
        let mut remaining: Vec<Segment> = segments.to_vec();
        let mut contours = Vec::new();

        while let Some(seed) = remaining.pop() {
            let mut vertices = vec![seed.start, seed.end];

            // Grow at the tail, then at the head, until nothing attaches.
            loop {
                let tail = vertices[vertices.len() - 1];
                match take_adjacent(&mut remaining, tail, tol_sq) {
                    Some(next) => vertices.push(next),
                    None => break,
                }
            }
            loop {
                let head = vertices[0];
                match take_adjacent(&mut remaining, head, tol_sq) {
                    Some(next) => vertices.insert(0, next),
                    None => break,
                }
            }

            let mut contour = Contour {
                vertices,
                is_closed: false,
            };
            let ends_meet = contour.vertices.len() >= 4
                && contour.vertices[0].distance_squared(contour.vertices[contour.len() - 1])
                    <= tol_sq;
            if ends_meet {
                let first = contour.vertices[0];
                let last = contour.len() - 1;
                contour.vertices[last] = first;
                contour.close();
            }
            contours.push(contour);
        }
        contours
    }

    /// Simplifies the contour with Ramer-Douglas-Peucker, keeping closed
    /// contours closed as long as enough vertices survive.
    pub fn simplify_rdp(&self, epsilon: f32) -> Contour {
        if self.vertices.len() <= 2 {
            return self.clone();
        }
        let simplified = rdp_simplify(&self.vertices, epsilon);

        let mut result = Contour {
            vertices: simplified,
            is_closed: false,
        };
        if self.is_closed && result.vertices.len() >= 3 {
            if result.vertices.first() != result.vertices.last() {
                if let Some(first) = result.vertices.first().copied() {
                    result.vertices.push(first);
                }
            }
            result.close();
        }
        result
    }

    /// Enclosed area via the shoelace formula; 0.0 for open contours.
    pub fn area(&self) -> f32 {
        if !self.is_closed || self.vertices.len() < 3 {
            return 0.0;
        }
        let mut area = 0.0;
        for pair in self.vertices.windows(2) {
            let [p1, p2] = pair else { continue };
            area += (p1.x * p2.y) - (p2.x * p1.y);
        }
        (area * 0.5).abs()
    }

    /// Total polyline length.
    pub fn perimeter(&self) -> f32 {
        self.vertices
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .sum()
    }
}

/// Removes and returns the far end of the first remaining segment that
/// touches `point` within the tolerance.
fn take_adjacent(remaining: &mut Vec<Segment>, point: Vec2, tol_sq: f32) -> Option<Vec2> {
    let (index, next) = remaining.iter().enumerate().find_map(|(i, s)| {
        if s.start.distance_squared(point) <= tol_sq {
            Some((i, s.end))
        } else if s.end.distance_squared(point) <= tol_sq {
            Some((i, s.start))
        } else {
            None
        }
    })?;
    remaining.swap_remove(index);
    Some(next)
}

/// Ramer-Douglas-Peucker polyline simplification.
fn rdp_simplify(points: &[Vec2], epsilon: f32) -> Vec<Vec2> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let mut dmax = 0.0;
    let mut index = 0;
    let end = points.len() - 1;

    for i in 1..end {
        let d = perpendicular_distance(points[i], points[0], points[end]);
        if d > dmax {
            index = i;
            dmax = d;
        }
    }

    if dmax > epsilon {
        let mut left = rdp_simplify(&points[0..=index], epsilon);
        let right = rdp_simplify(&points[index..=end], epsilon);

        left.pop(); // drop the shared point
        left.extend(right);
        left
    } else {
        vec![points[0], points[end]]
    }
}

/// Perpendicular distance from a point to the line through a segment.
fn perpendicular_distance(pt: Vec2, line_start: Vec2, line_end: Vec2) -> f32 {
    let dx = line_end.x - line_start.x;
    let dy = line_end.y - line_start.y;

    if dx.abs() < constants::EPSILON && dy.abs() < constants::EPSILON {
        return pt.distance(line_start);
    }

    let num = (dy * pt.x - dx * pt.y + line_end.x * line_start.y - line_end.y * line_start.x).abs();
    let den = (dy * dy + dx * dx).sqrt();
    num / den
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn seg(x1: f32, y1: f32, x2: f32, y2: f32) -> Segment {
        Segment::new(Vec2::new(x1, y1), Vec2::new(x2, y2))
    }

    #[test]
    fn test_stitch_closes_square_loop() {
        let segments = [
            seg(0.0, 0.0, 1.0, 0.0),
            seg(1.0, 0.0, 1.0, 1.0),
            seg(1.0, 1.0, 0.0, 1.0),
            seg(0.0, 1.0, 0.0, 0.0),
        ];
        let contours = Contour::stitch(&segments, 1e-4);
        assert_eq!(contours.len(), 1);

        let contour = &contours[0];
        assert!(contour.is_closed);
        assert_eq!(contour.len(), 5); // 4 corners + closing vertex
        assert_eq!(contour.vertices.first(), contour.vertices.last());
        assert_relative_eq!(contour.area(), 1.0);
        assert_relative_eq!(contour.perimeter(), 4.0);
    }

    #[test]
    fn test_stitch_keeps_disjoint_segments_apart() {
        let segments = [seg(0.0, 0.0, 1.0, 0.0), seg(5.0, 5.0, 6.0, 5.0)];
        let contours = Contour::stitch(&segments, 1e-4);
        assert_eq!(contours.len(), 2);
        assert!(contours.iter().all(|c| !c.is_closed && c.len() == 2));
    }

    #[test]
    fn test_stitch_open_chain() {
        // Mixed segment orientations still chain into one polyline.
        let segments = [
            seg(1.0, 0.0, 2.0, 1.0),
            seg(0.0, 0.0, 1.0, 0.0),
            seg(3.0, 1.0, 2.0, 1.0),
        ];
        let contours = Contour::stitch(&segments, 1e-4);
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].len(), 4);
        assert!(!contours[0].is_closed);
    }

    #[test]
    fn test_stitch_extractor_output_into_ring() {
        use crate::field::ScalarGrid;
        use crate::marching_squares::MarchingSquares;

        // Radial bump: the isoline is a single closed ring well inside
        // the grid. Adjacent cells compute shared edge crossings from the
        // same samples, so stitching reconnects them exactly.
        let grid = ScalarGrid::from_fn(9, 9, |x, y| {
            let dx = x as f32 - 4.0;
            let dy = y as f32 - 4.0;
            10.0 - (dx * dx + dy * dy)
        });
        let segments = MarchingSquares::extract_segments(&grid, 5.0, 1.0).unwrap();
        assert!(!segments.is_empty());

        let contours = Contour::stitch(&segments, 1e-4);
        assert_eq!(contours.len(), 1);
        assert!(contours[0].is_closed);
        // A ring of radius ~sqrt(5) encloses a comparable area.
        let area = contours[0].area();
        assert!(area > 10.0 && area < 20.0, "area {area}");
    }

    #[test]
    fn test_rdp_drops_collinear_points() {
        let mut contour = Contour::new();
        contour.add_vertex(Vec2::new(0.0, 0.0));
        contour.add_vertex(Vec2::new(0.5, 0.001));
        contour.add_vertex(Vec2::new(1.0, 0.0));
        contour.add_vertex(Vec2::new(2.0, 2.0));

        let simplified = contour.simplify_rdp(0.01);
        assert_eq!(simplified.len(), 3);
        assert_eq!(simplified.vertices[0], Vec2::new(0.0, 0.0));
        assert_eq!(simplified.vertices[2], Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_open_contour_has_zero_area() {
        let mut contour = Contour::new();
        contour.add_vertex(Vec2::new(0.0, 0.0));
        contour.add_vertex(Vec2::new(1.0, 0.0));
        contour.add_vertex(Vec2::new(1.0, 1.0));
        assert_eq!(contour.area(), 0.0);
    }

    #[test]
    fn test_close_needs_three_vertices() {
        let mut contour = Contour::new();
        contour.add_vertex(Vec2::new(0.0, 0.0));
        contour.add_vertex(Vec2::new(1.0, 0.0));
        contour.close();
        assert!(!contour.is_closed);
    }
}
