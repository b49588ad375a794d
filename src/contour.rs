//! Shape contours.
//!
//! Parametric shape descriptors (ellipse, polygon, rectangle, regular
//! polygon, triangle) that lazily materialize a [`RegionMap`] by walking
//! their boundary and inserting per-row interval endpoints. Transforms
//! (flip, rotate, scale) patch the cached geometry algebraically and
//! invalidate the rasterized content, which is rebuilt on the next read.

use std::collections::BTreeMap;
use std::fmt;

use crate::basics::{iround, rotate_point, PI};
use crate::ellipse_walk::walk_ellipse;
use crate::line_walk::walk_line;
use crate::region_map::RegionMap;

// ============================================================================
// FlipMode
// ============================================================================

/// Mirror axis selection for [`ShapeContour::flip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipMode {
    /// Mirror X about a vertical line through the flip center.
    Horizontal,
    /// Mirror Y about a horizontal line through the flip center.
    Vertical,
    /// Mirror both axes (a half-turn about the flip center).
    Both,
}

// ============================================================================
// ContourError
// ============================================================================

/// Validation failure during shape construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContourError {
    /// A regular polygon needs at least three sides.
    TooFewSides { sides: u32 },
}

impl fmt::Display for ContourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewSides { sides } => {
                write!(f, "regular polygon needs at least 3 sides, got {sides}")
            }
        }
    }
}

impl std::error::Error for ContourError {}

// ============================================================================
// ShapeKind
// ============================================================================

/// Per-kind geometry. Only rasterization differs meaningfully between the
/// kinds; transform logic is shared by [`ShapeContour`].
#[derive(Debug, Clone)]
enum ShapeKind {
    Ellipse {
        rx: f64,
        ry: f64,
        theta: f64,
        /// `rx == ry` at construction or after scaling; a circle rotated
        /// about its own center keeps its rasterized content.
        is_circle: bool,
    },
    /// Arbitrary vertex list, auto-closed (last vertex equals the first).
    Polygon { vertices: Vec<(f64, f64)> },
    Rectangle { vertices: [(f64, f64); 4] },
    RegularPolygon { vertices: Vec<(f64, f64)> },
    Triangle { vertices: [(f64, f64); 3] },
}

// ============================================================================
// ShapeContour
// ============================================================================

/// A parametric shape with lazily materialized region content.
///
/// Content is built on first read and cached until a transform invalidates
/// it: uninitialized, materialized, invalidated, rebuilt. Cloning copies the
/// geometry and whatever content is currently cached.
#[derive(Debug, Clone)]
pub struct ShapeContour {
    origin_x: f64,
    origin_y: f64,
    kind: ShapeKind,
    content: Option<RegionMap>,
}

impl ShapeContour {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Ellipse centered at `(ox, oy)` with radii `(rx, ry)` rotated by
    /// `theta` radians.
    pub fn ellipse(ox: f64, oy: f64, rx: f64, ry: f64, theta: f64) -> Self {
        Self {
            origin_x: ox,
            origin_y: oy,
            kind: ShapeKind::Ellipse {
                rx,
                ry,
                theta,
                is_circle: rx == ry,
            },
            content: None,
        }
    }

    /// Arbitrary polygon from explicit vertices. The outline is auto-closed:
    /// if the last vertex differs from the first, the first is re-appended.
    /// The origin is the vertex centroid.
    pub fn polygon(mut vertices: Vec<(f64, f64)>) -> Self {
        let (ox, oy) = centroid(&vertices);
        if vertices.first() != vertices.last() {
            if let Some(&first) = vertices.first() {
                vertices.push(first);
            }
        }
        Self {
            origin_x: ox,
            origin_y: oy,
            kind: ShapeKind::Polygon { vertices },
            content: None,
        }
    }

    /// Axis-aligned rectangle centered at `(cx, cy)`.
    pub fn rectangle(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        Self {
            origin_x: cx,
            origin_y: cy,
            kind: ShapeKind::Rectangle {
                vertices: [
                    (cx - hw, cy - hh),
                    (cx + hw, cy - hh),
                    (cx + hw, cy + hh),
                    (cx - hw, cy + hh),
                ],
            },
            content: None,
        }
    }

    /// Regular polygon with `sides` vertices on a circle of `radius` around
    /// `(cx, cy)`, the first vertex at angle zero. Fails for `sides < 3`
    /// before any state is built.
    pub fn regular_polygon(
        cx: f64,
        cy: f64,
        radius: f64,
        sides: u32,
    ) -> Result<Self, ContourError> {
        if sides < 3 {
            return Err(ContourError::TooFewSides { sides });
        }
        let vertices = (0..sides)
            .map(|k| {
                let angle = 2.0 * PI * k as f64 / sides as f64;
                (cx + radius * angle.cos(), cy + radius * angle.sin())
            })
            .collect();
        Ok(Self {
            origin_x: cx,
            origin_y: cy,
            kind: ShapeKind::RegularPolygon { vertices },
            content: None,
        })
    }

    /// Triangle from three explicit points. The origin is the centroid.
    pub fn triangle(p1: (f64, f64), p2: (f64, f64), p3: (f64, f64)) -> Self {
        Self {
            origin_x: (p1.0 + p2.0 + p3.0) / 3.0,
            origin_y: (p1.1 + p2.1 + p3.1) / 3.0,
            kind: ShapeKind::Triangle {
                vertices: [p1, p2, p3],
            },
            content: None,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Offset origin `(ox, oy)`.
    pub fn origin(&self) -> (f64, f64) {
        (self.origin_x, self.origin_y)
    }

    /// True while rasterized content is cached (no rebuild pending).
    pub fn is_materialized(&self) -> bool {
        self.content.is_some()
    }

    /// The materialized region, rebuilding it if a transform invalidated the
    /// cache.
    pub fn content(&mut self) -> &RegionMap {
        let region = match self.content.take() {
            Some(cached) => cached,
            None => self.rasterize(),
        };
        self.content.insert(region)
    }

    // ========================================================================
    // Transforms
    // ========================================================================

    /// Mirror the shape about `(cx, cy)` along the axes selected by `mode`.
    ///
    /// A single-axis flip negates an ellipse's stored angle; a both-axes
    /// flip is a half-turn and keeps it.
    pub fn flip(&mut self, cx: f64, cy: f64, mode: FlipMode) {
        let (ox, oy) = mirror(self.origin_x, self.origin_y, cx, cy, mode);
        self.origin_x = ox;
        self.origin_y = oy;
        match &mut self.kind {
            ShapeKind::Ellipse { theta, .. } => {
                if mode != FlipMode::Both {
                    *theta = -*theta;
                }
            }
            kind => {
                for v in kind_vertices_mut(kind) {
                    *v = mirror(v.0, v.1, cx, cy, mode);
                }
            }
        }
        self.content = None;
    }

    /// Rotate the shape by `theta` radians about `(cx, cy)`.
    ///
    /// A true circle rotated about its own center only patches the stored
    /// angle and keeps its cached content; every other case invalidates.
    pub fn rotate(&mut self, cx: f64, cy: f64, theta: f64) {
        let (nx, ny) = rotate_point(self.origin_x, self.origin_y, cx, cy, theta);
        match &mut self.kind {
            ShapeKind::Ellipse {
                theta: angle,
                is_circle,
                ..
            } => {
                let moved = nx != self.origin_x || ny != self.origin_y;
                self.origin_x = nx;
                self.origin_y = ny;
                *angle += theta;
                if *is_circle && !moved {
                    return;
                }
            }
            kind => {
                self.origin_x = nx;
                self.origin_y = ny;
                for v in kind_vertices_mut(kind) {
                    *v = rotate_point(v.0, v.1, cx, cy, theta);
                }
            }
        }
        self.content = None;
    }

    /// Scale the shape by `(sx, sy)` about its own origin.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        match &mut self.kind {
            ShapeKind::Ellipse {
                rx, ry, is_circle, ..
            } => {
                *rx *= sx.abs();
                *ry *= sy.abs();
                *is_circle = rx == ry;
            }
            kind => {
                let (ox, oy) = (self.origin_x, self.origin_y);
                for v in kind_vertices_mut(kind) {
                    v.0 = ox + (v.0 - ox) * sx;
                    v.1 = oy + (v.1 - oy) * sy;
                }
            }
        }
        self.content = None;
    }

    // ========================================================================
    // Rasterization
    // ========================================================================

    fn rasterize(&self) -> RegionMap {
        match &self.kind {
            ShapeKind::Ellipse { rx, ry, theta, .. } => {
                self.rasterize_ellipse(*rx, *ry, *theta)
            }
            ShapeKind::Polygon { vertices } => {
                // auto-closed: skip the duplicated closure vertex
                let open = if vertices.len() > 1 {
                    &vertices[..vertices.len() - 1]
                } else {
                    &vertices[..]
                };
                rasterize_ring(open)
            }
            ShapeKind::Rectangle { vertices } => rasterize_ring(vertices),
            ShapeKind::RegularPolygon { vertices } => rasterize_ring(vertices),
            ShapeKind::Triangle { vertices } => rasterize_ring(vertices),
        }
    }

    fn rasterize_ellipse(&self, rx: f64, ry: f64, theta: f64) -> RegionMap {
        let irx = iround(rx.abs());
        let iry = iround(ry.abs());
        let (ox, oy) = (self.origin_x, self.origin_y);
        let mut spans: BTreeMap<i32, (i32, i32)> = BTreeMap::new();
        walk_ellipse(irx, iry, |x, y| {
            let (wx, wy) = if theta == 0.0 {
                (ox + x as f64, oy + y as f64)
            } else {
                rotate_point(ox + x as f64, oy + y as f64, ox, oy, theta)
            };
            record_span(&mut spans, iround(wx), iround(wy));
        });
        spans_to_region(spans)
    }
}

// ============================================================================
// Shared rasterization helpers
// ============================================================================

/// Walk every edge of an open vertex ring with the line stepper, then fill
/// each touched row from its leftmost to its rightmost boundary pixel.
/// Convexity assumption: concave rings materialize their per-row extent.
fn rasterize_ring(vertices: &[(f64, f64)]) -> RegionMap {
    let mut spans: BTreeMap<i32, (i32, i32)> = BTreeMap::new();
    let n = vertices.len();
    if n == 0 {
        return RegionMap::new();
    }
    for i in 0..n {
        let (x0f, y0f) = vertices[i];
        let (x1f, y1f) = vertices[(i + 1) % n];
        let (x0, y0) = (iround(x0f), iround(y0f));
        let (x1, y1) = (iround(x1f), iround(y1f));
        let mut cx = x0;
        let mut cy = y0;
        record_span(&mut spans, cx, cy);
        walk_line(x1 - x0, y1 - y0, |sx, sy| {
            cx += sx;
            cy += sy;
            record_span(&mut spans, cx, cy);
        });
    }
    spans_to_region(spans)
}

fn record_span(spans: &mut BTreeMap<i32, (i32, i32)>, x: i32, y: i32) {
    spans
        .entry(y)
        .and_modify(|(lo, hi)| {
            if x < *lo {
                *lo = x;
            }
            if x > *hi {
                *hi = x;
            }
        })
        .or_insert((x, x));
}

/// First boundary pixel seeds the interval's left bound, last seeds the
/// right bound.
fn spans_to_region(spans: BTreeMap<i32, (i32, i32)>) -> RegionMap {
    let mut region = RegionMap::new();
    for (y, (lo, hi)) in spans {
        let row = region.row_mut(y);
        row.add_left(lo);
        row.add_right(hi);
    }
    region
}

fn mirror(x: f64, y: f64, cx: f64, cy: f64, mode: FlipMode) -> (f64, f64) {
    match mode {
        FlipMode::Horizontal => (2.0 * cx - x, y),
        FlipMode::Vertical => (x, 2.0 * cy - y),
        FlipMode::Both => (2.0 * cx - x, 2.0 * cy - y),
    }
}

/// Mutable view of a polygon-family kind's vertices.
/// The ellipse kind has no vertex form and yields an empty slice.
fn kind_vertices_mut(kind: &mut ShapeKind) -> &mut [(f64, f64)] {
    match kind {
        ShapeKind::Ellipse { .. } => &mut [],
        ShapeKind::Polygon { vertices } => vertices,
        ShapeKind::Rectangle { vertices } => vertices,
        ShapeKind::RegularPolygon { vertices } => vertices,
        ShapeKind::Triangle { vertices } => vertices,
    }
}

fn centroid(vertices: &[(f64, f64)]) -> (f64, f64) {
    if vertices.is_empty() {
        return (0.0, 0.0);
    }
    let n = vertices.len() as f64;
    let (sx, sy) = vertices
        .iter()
        .fold((0.0, 0.0), |(ax, ay), (x, y)| (ax + x, ay + y));
    (sx / n, sy / n)
}

// ============================================================================
// Tests
// ============================================================================
