use crate::{BYTE_LEVELS, FULL_TURN};

/// Map a byte value onto the circle: `2π · value / 256`.
///
/// Result range: `[0, 2π)`.
#[inline]
pub fn to_angle(value: u8) -> f64 {
    FULL_TURN * (f64::from(value) / BYTE_LEVELS)
}

/// Inverse of [`to_angle`], truncating toward zero.
///
/// Only a conceptual inverse: the division can land a hair below an exact
/// byte boundary, so some bytes come back one lower (e.g. `11 -> 10`).
/// Angles outside `[0, 2π)` are not wrapped; they simply produce values
/// outside `0..=255`, which is why this returns an `i64` rather than a byte.
#[inline]
pub fn from_angle(angle: f64) -> i64 {
    ((angle / FULL_TURN) * BYTE_LEVELS) as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PI;

    #[test]
    fn test_landmarks() {
        assert_eq!(to_angle(0), 0.0);
        assert!((to_angle(64) - PI / 2.0).abs() < 1e-12);
        assert!((to_angle(128) - PI).abs() < 1e-12);
        assert!(to_angle(255) < FULL_TURN);
    }

    #[test]
    fn test_inverse_is_within_one_step() {
        for v in 0..=255u8 {
            let back = from_angle(to_angle(v));
            assert!(back == i64::from(v) || back == i64::from(v) - 1, "byte {} -> {}", v, back);
        }
        assert_eq!(from_angle(to_angle(128)), 128);
        assert_eq!(from_angle(to_angle(11)), 10);
    }

    #[test]
    fn test_out_of_range_is_not_wrapped() {
        assert_eq!(from_angle(FULL_TURN), 256);
        assert_eq!(from_angle(2.0 * FULL_TURN), 512);
        // Truncation toward zero, not floor.
        assert_eq!(from_angle(-0.01), 0);
        assert_eq!(from_angle(-FULL_TURN / 2.0), -128);
    }
}
