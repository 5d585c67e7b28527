pub mod linalg;
pub mod log;

pub mod gg_float {
    /// Clamps `x` into `[0, 1]`. NaN is passed through unchanged.
    #[must_use]
    pub fn saturate(x: f32) -> f32 {
        x.clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
        from + (to - from) * t
    }

    pub fn is_within(x: f32, eps: f32) -> bool {
        x.abs() <= eps
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::gg_float;

    #[test]
    fn saturate_clamps_into_unit_range() {
        assert_eq!(gg_float::saturate(-128.0), 0.0);
        assert_eq!(gg_float::saturate(128.0), 1.0);
        assert_eq!(gg_float::saturate(0.25), 0.25);
        assert!(gg_float::saturate(f32::NAN).is_nan());
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(gg_float::lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(gg_float::lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(gg_float::lerp(2.0, 6.0, 0.5), 4.0);
        // Not clamped.
        assert_eq!(gg_float::lerp(2.0, 6.0, 2.0), 10.0);
    }

    #[test]
    fn is_within_is_inclusive() {
        assert!(gg_float::is_within(0.5, 0.5));
        assert!(gg_float::is_within(-0.5, 0.5));
        assert!(!gg_float::is_within(0.50001, 0.5));
        assert!(!gg_float::is_within(f32::NAN, 0.5));
    }
}
