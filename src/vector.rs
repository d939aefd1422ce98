/*
 * Vector Module
 *
 * Thin helpers on top of nannou's `Vec3` for the parts of the simulation that
 * need behaviour glam doesn't give us directly:
 * - Per-component clamping (forces and velocities are clamped per axis, not by length)
 * - Normalization that maps the zero vector to zero
 * - Unit direction between two points that refuses coincident points
 */

pub use nannou::prelude::Vec3;

// Clamp each component of `v` independently to [-limit, limit].
// A negative limit inverts the range: values above `limit` become `limit`, everything else
// becomes `-limit`. Degenerate, but it never panics the way `f32::clamp` does.
#[inline]
pub fn clamp_components(v: Vec3, limit: f32) -> Vec3 {
    Vec3::new(
        clamp_scalar(v.x, limit),
        clamp_scalar(v.y, limit),
        clamp_scalar(v.z, limit),
    )
}

#[inline]
fn clamp_scalar(value: f32, limit: f32) -> f32 {
    if value > limit {
        limit
    } else if value < -limit {
        -limit
    } else {
        value
    }
}

// Normalize, returning zero for a zero-length (or non-finite length) vector
#[inline]
pub fn normalize_or_zero(v: Vec3) -> Vec3 {
    let length = v.length();
    if length > 0.0 && length.is_finite() {
        v / length
    } else {
        Vec3::ZERO
    }
}

// Unit vector pointing from `to` towards `from`, together with the distance between them.
// Returns None when the points coincide.
#[inline]
pub fn direction_between(from: Vec3, to: Vec3) -> Option<(Vec3, f32)> {
    let delta = from - to;
    let distance = delta.length();
    if distance > 0.0 {
        Some((delta / distance, distance))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_components_is_per_axis() {
        let v = Vec3::new(10.0, -10.0, 2.0);
        assert_eq!(clamp_components(v, 5.0), Vec3::new(5.0, -5.0, 2.0));
    }

    #[test]
    fn test_clamp_components_idempotent() {
        let samples = [
            Vec3::new(7.5, -0.25, 3.0),
            Vec3::new(-100.0, 100.0, 0.0),
            Vec3::new(1.0, 2.0, -3.0),
        ];
        for &limit in &[0.5_f32, 1.0, 4.0] {
            for &v in &samples {
                let once = clamp_components(v, limit);
                assert_eq!(clamp_components(once, limit), once);
            }
        }
    }

    #[test]
    fn test_clamp_components_zero_limit() {
        let v = Vec3::new(3.0, -2.0, 0.0);
        assert_eq!(clamp_components(v, 0.0), Vec3::ZERO);
    }

    #[test]
    fn test_clamp_components_negative_limit_does_not_panic() {
        let v = Vec3::new(3.0, -2.0, -1.5);
        let clamped = clamp_components(v, -1.0);
        assert_eq!(clamped, Vec3::new(-1.0, 1.0, 1.0));
    }

    #[test]
    fn test_normalize_or_zero() {
        assert_eq!(normalize_or_zero(Vec3::ZERO), Vec3::ZERO);
        let n = normalize_or_zero(Vec3::new(0.0, 3.0, 4.0));
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!((n.y - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_direction_between() {
        let (dir, distance) = direction_between(Vec3::new(2.0, 0.0, 0.0), Vec3::ZERO).unwrap();
        assert_eq!(dir, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(distance, 2.0);

        assert!(direction_between(Vec3::ONE, Vec3::ONE).is_none());
    }
}
