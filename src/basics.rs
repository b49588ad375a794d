//! Foundation types and math helpers.
//!
//! Rounding, angle conversion, the generic rectangle type used for cropping
//! regions to image bounds, and 2D point rotation about an arbitrary origin.

// ============================================================================
// Rounding and conversion functions
// ============================================================================

/// Round a double to the nearest integer (round half away from zero).
#[inline]
pub fn iround(v: f64) -> i32 {
    if v < 0.0 {
        (v - 0.5) as i32
    } else {
        (v + 0.5) as i32
    }
}

/// Round a non-negative double to the nearest unsigned integer (round half up).
#[inline]
pub fn uround(v: f64) -> u32 {
    (v + 0.5) as u32
}

// ============================================================================
// Mathematical constants
// ============================================================================

pub const PI: f64 = std::f64::consts::PI;

/// Convert degrees to radians.
#[inline]
pub fn deg2rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees.
#[inline]
pub fn rad2deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

// ============================================================================
// Point rotation
// ============================================================================

/// Rotate `(x, y)` by `theta` radians about `(ox, oy)`.
///
/// Positive `theta` rotates counter-clockwise in a Y-up coordinate system
/// (clockwise in the usual Y-down raster system).
#[inline]
pub fn rotate_point(x: f64, y: f64, ox: f64, oy: f64, theta: f64) -> (f64, f64) {
    let (sin_t, cos_t) = theta.sin_cos();
    let dx = x - ox;
    let dy = y - oy;
    (ox + dx * cos_t - dy * sin_t, oy + dx * sin_t + dy * cos_t)
}

// ============================================================================
// Rect
// ============================================================================

/// A rectangle defined by two corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<T: Copy> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T: Copy + PartialOrd> Rect<T> {
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Normalize so that x1 <= x2 and y1 <= y2, swapping if needed.
    pub fn normalize(&mut self) -> &Self {
        if self.x1 > self.x2 {
            core::mem::swap(&mut self.x1, &mut self.x2);
        }
        if self.y1 > self.y2 {
            core::mem::swap(&mut self.y1, &mut self.y2);
        }
        self
    }

    /// Clip this rectangle to the intersection with `r`.
    /// Returns `true` if the result is a valid (non-empty) rectangle.
    pub fn clip(&mut self, r: &Self) -> bool {
        if self.x2 > r.x2 {
            self.x2 = r.x2;
        }
        if self.y2 > r.y2 {
            self.y2 = r.y2;
        }
        if self.x1 < r.x1 {
            self.x1 = r.x1;
        }
        if self.y1 < r.y1 {
            self.y1 = r.y1;
        }
        self.x1 <= self.x2 && self.y1 <= self.y2
    }

    /// Returns `true` if the rectangle is valid (non-empty).
    pub fn is_valid(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }

    /// Returns `true` if the point (x, y) is inside the rectangle.
    pub fn hit_test(&self, x: T, y: T) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }
}

/// Rectangle with `i32` coordinates (closed on all four edges).
pub type RectI = Rect<i32>;
/// Rectangle with `f64` coordinates.
pub type RectD = Rect<f64>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iround() {
        assert_eq!(iround(0.4), 0);
        assert_eq!(iround(0.5), 1);
        assert_eq!(iround(-0.5), -1);
        assert_eq!(iround(-0.4), 0);
        assert_eq!(iround(2.0), 2);
    }

    #[test]
    fn test_uround() {
        assert_eq!(uround(0.4), 0);
        assert_eq!(uround(0.5), 1);
        assert_eq!(uround(9.7), 10);
    }

    #[test]
    fn test_deg_rad_round_trip() {
        assert!((deg2rad(180.0) - PI).abs() < 1e-12);
        assert!((rad2deg(PI) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_point_quarter_turn() {
        let (x, y) = rotate_point(1.0, 0.0, 0.0, 0.0, PI / 2.0);
        assert!(x.abs() < 1e-12);
        assert!((y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_point_about_self_is_identity() {
        let (x, y) = rotate_point(3.0, 4.0, 3.0, 4.0, 1.234);
        assert!((x - 3.0).abs() < 1e-12);
        assert!((y - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_point_preserves_distance() {
        let (x, y) = rotate_point(7.0, 2.0, 1.0, 1.0, 0.7);
        let d0 = ((7.0f64 - 1.0).powi(2) + (2.0f64 - 1.0).powi(2)).sqrt();
        let d1 = ((x - 1.0).powi(2) + (y - 1.0).powi(2)).sqrt();
        assert!((d0 - d1).abs() < 1e-12);
    }

    #[test]
    fn test_rect_normalize() {
        let mut r = RectI::new(10, 20, 3, 4);
        r.normalize();
        assert_eq!(r, RectI::new(3, 4, 10, 20));
    }

    #[test]
    fn test_rect_clip() {
        let mut r = RectI::new(0, 0, 10, 10);
        assert!(r.clip(&RectI::new(5, 5, 20, 20)));
        assert_eq!(r, RectI::new(5, 5, 10, 10));

        let mut r = RectI::new(0, 0, 10, 10);
        assert!(!r.clip(&RectI::new(20, 20, 30, 30)));
    }

    #[test]
    fn test_rect_hit_test() {
        let r = RectI::new(0, 0, 10, 10);
        assert!(r.hit_test(0, 0));
        assert!(r.hit_test(10, 10));
        assert!(!r.hit_test(11, 5));
    }
}
