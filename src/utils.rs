// src/utils.rs

/// Numeric constants shared across the crate.
pub mod constants {
    /// General geometric tolerance (point coincidence, RDP, stitching).
    pub const EPSILON: f32 = 1e-6;

    /// Guard for edge interpolation: when the two edge samples differ by
    /// less than this, the crossing parameter is fixed at 0.5 instead of
    /// dividing by a near-zero denominator.
    pub const INTERP_EPSILON: f32 = 1e-5;
}

/// Float comparison helpers with tolerance.
pub mod comparison {
    use super::constants::EPSILON;

    /// Checks whether two floats are (nearly) equal.
    pub fn nearly_equal(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Checks whether a float is (nearly) zero.
    pub fn nearly_zero(a: f32) -> bool {
        a.abs() < EPSILON
    }

    /// Linear interpolation.
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// Inverse linear interpolation; 0.0 when the endpoints coincide.
    pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
        if nearly_equal(a, b) {
            0.0
        } else {
            (value - a) / (b - a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::comparison::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_nearly_equal() {
        assert!(nearly_equal(1.0, 1.0 + 1e-7));
        assert!(!nearly_equal(1.0, 1.001));
        assert!(nearly_zero(-1e-8));
    }

    #[test]
    fn test_lerp_roundtrip() {
        let a = 2.0;
        let b = 6.0;
        let t = 0.25;
        let v = lerp(a, b, t);
        assert_relative_eq!(v, 3.0);
        assert_relative_eq!(inverse_lerp(a, b, v), t);
    }

    #[test]
    fn test_inverse_lerp_degenerate() {
        assert_eq!(inverse_lerp(1.0, 1.0, 5.0), 0.0);
    }
}
