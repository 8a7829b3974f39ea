use super::*;

//
// Linear algebra
//

pub use na::vector;

pub type Vec2i = na::Vector2<i32>;
pub type Vec2f = na::Vector2<f32>;
pub type Vec3i = na::Vector3<i32>;
pub type Vec3f = na::Vector3<f32>;

//
// Ordering
//

/// Returns `(a, b)` sorted so that the first element is not greater than the second.
#[inline]
pub fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if b < a {
        (b, a)
    } else {
        (a, b)
    }
}

/// Clamps `value` between `a` and `b`, whichever of the two is smaller acting as the lower bound.
#[inline]
pub fn clamp_ordered<T: PartialOrd>(value: T, a: T, b: T) -> T {
    let (lo, hi) = ordered(a, b);
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

#[inline]
pub fn contains_ordered<T: PartialOrd>(value: T, a: T, b: T) -> bool {
    let (lo, hi) = ordered(a, b);
    lo <= value && value <= hi
}

//
// Interpolation
//

#[inline]
pub fn saturate<T: num::Float>(t: T) -> T {
    t.max(T::zero()).min(T::one())
}

/// Interpolates from `a` to `b`. The factor is clamped to `0..=1` first.
///
/// Exact at both ends and on `a == b`. Never forms `b - a`, so finite
/// boundaries further apart than `T::max_value()` still interpolate.
pub fn lerp_scalar<T: num::Float>(a: T, b: T, t: T) -> T {
    let t = saturate(t);
    if t <= T::zero() || a == b {
        a
    } else if t >= T::one() {
        b
    } else {
        a * (T::one() - t) + b * t
    }
}

/// Where `value` lies between `a` and `b`, in `0..=1`. Zero when `a == b`.
pub fn inverse_lerp_scalar<T: num::Float>(a: T, b: T, value: T) -> T {
    if a == b {
        return T::zero();
    }
    saturate((value - a) / (b - a))
}

/// Like [`lerp_scalar`], with the factor eased by `t * t * (3 - 2t)`.
pub fn smooth_step_scalar<T: num::Float>(a: T, b: T, t: T) -> T {
    let t = saturate(t);
    let three = T::one() + T::one() + T::one();
    let two = T::one() + T::one();
    lerp_scalar(a, b, t * t * (three - two * t))
}

//
// Tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_ulps_eq};

    #[test]
    fn test_ordered() {
        assert_eq!(ordered(1, 2), (1, 2));
        assert_eq!(ordered(2, 1), (1, 2));
        assert_eq!(ordered(-3.5, -3.5), (-3.5, -3.5));
    }

    #[test]
    fn test_clamp_ordered() {
        assert_eq!(clamp_ordered(10, 1, 5), 5);
        assert_eq!(clamp_ordered(10, 5, 1), 5);
        assert_eq!(clamp_ordered(-10, 5, 1), 1);
        assert_eq!(clamp_ordered(3, 5, 1), 3);
        assert_ulps_eq!(clamp_ordered(0.25_f32, 1.0, -1.0), 0.25, max_ulps = 1);
    }

    #[test]
    fn test_contains_ordered() {
        assert!(contains_ordered(1, 1, 5));
        assert!(contains_ordered(5, 5, 1));
        assert!(!contains_ordered(0, 5, 1));
        assert!(!contains_ordered(6, 1, 5));
    }

    #[test]
    fn test_lerp_scalar() {
        assert_ulps_eq!(lerp_scalar(0.0, 1.0, 0.0), 0.0, max_ulps = 1);
        assert_ulps_eq!(lerp_scalar(0.0, 1.0, 0.5), 0.5, max_ulps = 1);
        assert_ulps_eq!(lerp_scalar(0.0, 1.0, 1.0), 1.0, max_ulps = 1);
        assert_ulps_eq!(lerp_scalar(0.0, 1.0, -4.0), 0.0, max_ulps = 1);
        assert_ulps_eq!(lerp_scalar(0.0, 1.0, 4.0), 1.0, max_ulps = 1);
        assert_ulps_eq!(lerp_scalar(1.0, 0.0, 0.25), 0.75, max_ulps = 1);
    }

    #[test]
    fn test_lerp_scalar_wide() {
        let (a, b) = (-f32::MAX, f32::MAX);
        assert_eq!(lerp_scalar(a, b, 0.0), a);
        assert_eq!(lerp_scalar(a, b, 1.0), b);
        assert_eq!(lerp_scalar(a, b, 0.5), 0.0);
        assert!(lerp_scalar(a, b, 0.9).is_finite());
        assert_eq!(lerp_scalar(f32::MAX, f32::MAX, 0.3), f32::MAX);
    }

    #[test]
    fn test_inverse_lerp_scalar() {
        assert_ulps_eq!(inverse_lerp_scalar(0.0, 4.0, 1.0), 0.25, max_ulps = 1);
        assert_ulps_eq!(inverse_lerp_scalar(4.0, 0.0, 1.0), 0.75, max_ulps = 1);
        assert_ulps_eq!(inverse_lerp_scalar(0.0, 4.0, 8.0), 1.0, max_ulps = 1);
        assert_ulps_eq!(inverse_lerp_scalar(0.0, 4.0, -8.0), 0.0, max_ulps = 1);
        assert_ulps_eq!(inverse_lerp_scalar(2.0, 2.0, 9.0), 0.0, max_ulps = 1);
    }

    #[test]
    fn test_smooth_step_scalar() {
        assert_ulps_eq!(smooth_step_scalar(0.0, 1.0, 0.0), 0.0, max_ulps = 1);
        assert_ulps_eq!(smooth_step_scalar(0.0, 1.0, 0.5), 0.5, max_ulps = 1);
        assert_ulps_eq!(smooth_step_scalar(0.0, 1.0, 1.0), 1.0, max_ulps = 1);
        assert_abs_diff_eq!(smooth_step_scalar(0.0_f32, 1.0, 0.25), 0.15625, epsilon = 1e-6);
    }
}
