//! Bresenham line stepping.
//!
//! Integer line interpolation for boundary enumeration: walks from the
//! origin to `(dx, dy)` emitting one unit step at a time, distributing the
//! rounding error evenly along the dominant axis.

// ============================================================================
// LineWalker
// ============================================================================

/// Integer Bresenham stepper from `(0, 0)` toward `(dx, dy)`.
///
/// Each step moves by `-1`, `0`, or `+1` on each axis (diagonal steps
/// allowed), visiting `max(|dx|, |dy|)` positions after the origin and
/// landing exactly on `(dx, dy)`.
#[derive(Debug, Clone)]
pub struct LineWalker {
    tx: i32,
    ty: i32,
    cx: i32,
    cy: i32,
    adx: i32,
    ady: i32,
    sx: i32,
    sy: i32,
    err: i32,
}

impl LineWalker {
    pub fn new(dx: i32, dy: i32) -> Self {
        let adx = dx.abs();
        let ady = dy.abs();
        Self {
            tx: dx,
            ty: dy,
            cx: 0,
            cy: 0,
            adx,
            ady,
            sx: dx.signum(),
            sy: dy.signum(),
            err: adx - ady,
        }
    }

    /// Number of steps in the dominant axis.
    pub fn num_steps(&self) -> i32 {
        self.adx.max(self.ady)
    }

    /// Current position relative to the start point.
    pub fn position(&self) -> (i32, i32) {
        (self.cx, self.cy)
    }
}

impl Iterator for LineWalker {
    type Item = (i32, i32);

    /// The next unit step `(sx, sy)`, or `None` once the endpoint is reached.
    fn next(&mut self) -> Option<(i32, i32)> {
        if self.cx == self.tx && self.cy == self.ty {
            return None;
        }
        let e2 = 2 * self.err;
        let mut step = (0, 0);
        if e2 > -self.ady && self.cx != self.tx {
            self.err -= self.ady;
            self.cx += self.sx;
            step.0 = self.sx;
        }
        if e2 < self.adx && self.cy != self.ty {
            self.err += self.adx;
            self.cy += self.sy;
            step.1 = self.sy;
        }
        Some(step)
    }
}

/// Walk a line from the origin to `(dx, dy)`, invoking `step` with each unit
/// offset. The start point itself is not reported.
pub fn walk_line<F: FnMut(i32, i32)>(dx: i32, dy: i32, mut step: F) {
    for (sx, sy) in LineWalker::new(dx, dy) {
        step(sx, sy);
    }
}

// ============================================================================
// Tests
// ============================================================================
