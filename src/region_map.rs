//! Sparse region map.
//!
//! A 2D region as a sparse mapping from row coordinate to [`IntervalRow`].
//! Only rows with coverage are stored; region-level boolean operations
//! delegate to the row algebra, and enumeration yields rows in ascending
//! order for rendering.

use std::collections::BTreeMap;

use crate::basics::RectI;
use crate::interval_row::IntervalRow;

// ============================================================================
// RegionMap
// ============================================================================

/// Sparse mapping from row coordinate to interval row.
///
/// Rows that end up empty after a mutation are dropped, so presence of a key
/// implies at least one interval. Instances are not internally synchronized;
/// clone for a snapshot that can be read while the original mutates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionMap {
    rows: BTreeMap<i32, IntervalRow>,
}

impl RegionMap {
    /// Create an empty region.
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
        }
    }

    /// True if no row has coverage.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows with coverage.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Read-only access to a row. `None` means no coverage on that row.
    pub fn row(&self, y: i32) -> Option<&IntervalRow> {
        self.rows.get(&y)
    }

    /// Mutable access to a row, auto-vivifying an empty one.
    ///
    /// A row left empty by the caller is dropped on the next [`prune`]
    /// (region-level operations prune for themselves).
    ///
    /// [`prune`]: Self::prune
    pub fn row_mut(&mut self, y: i32) -> &mut IntervalRow {
        self.rows.entry(y).or_default()
    }

    /// Replace a row. `None` or an empty row removes the entry.
    pub fn set_row(&mut self, y: i32, row: Option<IntervalRow>) {
        match row {
            Some(r) if !r.is_empty() => {
                self.rows.insert(y, r);
            }
            _ => {
                self.rows.remove(&y);
            }
        }
    }

    /// Enumerate `(row, IntervalRow)` pairs in ascending row order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &IntervalRow)> {
        self.rows.iter().map(|(y, row)| (*y, row))
    }

    /// Drop rows whose coverage has become empty.
    pub fn prune(&mut self) {
        self.rows.retain(|_, row| !row.is_empty());
    }

    /// Tight integer bounds of the covered set, or `None` when empty.
    pub fn bounding_rect(&self) -> Option<RectI> {
        let mut bounds: Option<RectI> = None;
        for (y, row) in self.rows.iter() {
            let Some((lo, hi)) = row.span() else { continue };
            match bounds.as_mut() {
                None => bounds = Some(RectI::new(lo, *y, hi, *y)),
                Some(r) => {
                    r.x1 = r.x1.min(lo);
                    r.x2 = r.x2.max(hi);
                    r.y2 = *y; // ascending iteration
                }
            }
        }
        bounds
    }

    // ========================================================================
    // Boolean operations
    // ========================================================================

    /// Union another region into this one, row by row.
    pub fn union(&mut self, other: &RegionMap) {
        for (y, row) in other.rows.iter() {
            self.rows.entry(*y).or_default().union_row(row);
        }
    }

    /// Subtract another region from this one, row by row. Rows that lose all
    /// coverage are removed.
    pub fn difference(&mut self, other: &RegionMap) {
        for (y, row) in other.rows.iter() {
            if let Some(mine) = self.rows.get_mut(y) {
                mine.subtract_row(row);
                if mine.is_empty() {
                    self.rows.remove(y);
                }
            }
        }
    }

    /// Produce a new region with every row key shifted by `dy` and every
    /// row's intervals shifted by `dx`.
    pub fn offset(&self, dx: i32, dy: i32) -> RegionMap {
        let mut out = RegionMap::new();
        for (y, row) in self.rows.iter() {
            let mut shifted = row.clone();
            shifted.offset(dx);
            out.rows.insert(y + dy, shifted);
        }
        out
    }

    /// Clip the region to a rectangle (closed on all edges), removing rows
    /// outside its vertical extent and cropping the rest horizontally.
    pub fn crop(&mut self, rect: &RectI) {
        if !rect.is_valid() {
            self.rows.clear();
            return;
        }
        self.rows.retain(|y, row| {
            if *y < rect.y1 || *y > rect.y2 {
                return false;
            }
            row.crop(rect.x1, rect.x2);
            !row.is_empty()
        });
    }
}

// ============================================================================
// Tests
// ============================================================================
