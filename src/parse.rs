//! Region extraction from alpha sources.
//!
//! Scans a rectangular pixel source row by row and converts contiguous runs
//! of non-transparent pixels into region coverage. The first non-transparent
//! pixel encountered is reported alongside, so callers can recover a
//! representative fill value without a second pass.

use crate::region_map::RegionMap;

// ============================================================================
// AlphaSource
// ============================================================================

/// Rectangular pixel grid with per-pixel alpha.
///
/// Coordinates are zero-based with `(0, 0)` at the top-left; `alpha` and
/// `pixel` are only called with `x < width()` and `y < height()`.
pub trait AlphaSource {
    type Pixel: Copy;

    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Alpha at `(x, y)`: 0 is fully transparent, 255 fully opaque.
    fn alpha(&self, x: u32, y: u32) -> u8;

    fn pixel(&self, x: u32, y: u32) -> Self::Pixel;
}

// ============================================================================
// parse_alpha
// ============================================================================

/// Build a region from every pixel with non-zero alpha.
///
/// Each row's contiguous non-transparent runs become intervals; rows that
/// are fully transparent get no entry. Also returns the first non-transparent
/// pixel found in scan order (left to right, top to bottom), or `None` when
/// the source is fully transparent.
pub fn parse_alpha<S: AlphaSource>(src: &S) -> (RegionMap, Option<S::Pixel>) {
    let mut region = RegionMap::new();
    let mut first: Option<S::Pixel> = None;
    for y in 0..src.height() {
        let mut run_start: Option<u32> = None;
        for x in 0..src.width() {
            let a = src.alpha(x, y);
            if a > 0 {
                if run_start.is_none() {
                    run_start = Some(x);
                }
                if first.is_none() {
                    first = Some(src.pixel(x, y));
                }
            } else if let Some(start) = run_start.take() {
                region.row_mut(y as i32).union_interval(start as i32, x as i32 - 1);
            }
        }
        if let Some(start) = run_start {
            region
                .row_mut(y as i32)
                .union_interval(start as i32, src.width() as i32 - 1);
        }
    }
    (region, first)
}

// ============================================================================
// Tests
// ============================================================================
