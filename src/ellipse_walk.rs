//! Midpoint ellipse stepping.
//!
//! Discrete boundary enumeration for an axis-aligned ellipse: the walker
//! yields the pixel positions of one quadrant, and [`walk_ellipse`] mirrors
//! them into all four quadrants for callers that want the whole boundary.

// ============================================================================
// EllipseWalker
// ============================================================================

/// Midpoint stepper over the first quadrant of an ellipse centered at the
/// origin, from `(0, -ry)` to `(rx, 0)` inclusive.
///
/// Yields pixel positions `(x, y)` with `x >= 0` and `y <= 0`, choosing at
/// each step whichever of the x, y, or diagonal moves keeps the implicit
/// ellipse function closest to zero. Radii must be at least 1.
#[derive(Debug, Clone)]
pub struct EllipseWalker {
    rx2: i32,
    ry2: i32,
    two_rx2: i32,
    two_ry2: i32,
    inc_x: i32,
    inc_y: i32,
    cur_f: i32,
    x: i32,
    y: i32,
    done: bool,
}

impl EllipseWalker {
    pub fn new(rx: i32, ry: i32) -> Self {
        debug_assert!(rx >= 1 && ry >= 1, "degenerate ellipse radius");
        let rx2 = rx * rx;
        let ry2 = ry * ry;
        Self {
            rx2,
            ry2,
            two_rx2: rx2 << 1,
            two_ry2: ry2 << 1,
            inc_x: 0,
            inc_y: -ry * (rx2 << 1),
            cur_f: 0,
            x: 0,
            y: -ry,
            done: false,
        }
    }
}

impl Iterator for EllipseWalker {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.done {
            return None;
        }
        let out = (self.x, self.y);
        if self.y >= 0 {
            self.done = true;
            return Some(out);
        }

        // Candidate moves: x step, y step, diagonal. Take whichever keeps
        // the ellipse function residual smallest in magnitude.
        let fx = self.cur_f + self.inc_x + self.ry2;
        let fy = self.cur_f + self.inc_y + self.rx2;
        let fxy = fx + self.inc_y + self.rx2;

        let mx = fx.abs();
        let my = fy.abs();
        let mxy = fxy.abs();

        if mx.min(my) > mxy {
            self.inc_x += self.two_ry2;
            self.inc_y += self.two_rx2;
            self.cur_f = fxy;
            self.x += 1;
            self.y += 1;
        } else if mx <= my {
            self.inc_x += self.two_ry2;
            self.cur_f = fx;
            self.x += 1;
        } else {
            self.inc_y += self.two_rx2;
            self.cur_f = fy;
            self.y += 1;
        }
        Some(out)
    }
}

/// Enumerate every boundary pixel of the axis-aligned ellipse with radii
/// `(rx, ry)` centered at the origin, invoking `point` with each offset.
///
/// Quadrants are produced by mirroring, so points on the axes are reported
/// more than once. Degenerate radii (`rx == 0` or `ry == 0`) produce the
/// corresponding segment or single point.
pub fn walk_ellipse<F: FnMut(i32, i32)>(rx: i32, ry: i32, mut point: F) {
    let rx = rx.abs();
    let ry = ry.abs();
    if rx == 0 {
        for y in -ry..=ry {
            point(0, y);
        }
        return;
    }
    if ry == 0 {
        for x in -rx..=rx {
            point(x, 0);
        }
        return;
    }
    for (x, y) in EllipseWalker::new(rx, ry) {
        point(x, y);
        point(-x, y);
        point(x, -y);
        point(-x, -y);
    }
}

// ============================================================================
// Tests
// ============================================================================
