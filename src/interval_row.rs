//! Interval row container.
//!
//! One scanline's coverage, stored as an ordered sequence of integer boundary
//! values. Consecutive pairs `(a0,b0,a1,b1,...)` denote closed intervals
//! `[a,b]`. The sequence is always even in length, strictly increasing, and
//! keeps a gap of at least one integer between intervals: two intervals that
//! touch (`b + 1 == a_next`) are coalesced into one. All boolean operations
//! mutate in place and preserve those invariants.

use smallvec::SmallVec;

/// Inline capacity for a row's boundary values. Most rows produced by shape
/// rasterization hold one or two intervals, which stay off the heap.
const INLINE_BOUNDS: usize = 8;

// ============================================================================
// IntervalRow
// ============================================================================

/// A scanline region: sorted, disjoint, non-touching closed integer intervals.
///
/// Created empty, mutated in place by every operation, deep-copied by
/// `clone`. Instances are not internally synchronized; callers share
/// snapshots by cloning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalRow {
    bounds: SmallVec<[i32; INLINE_BOUNDS]>,
}

impl IntervalRow {
    /// Create an empty row (no coverage).
    pub fn new() -> Self {
        Self {
            bounds: SmallVec::new(),
        }
    }

    /// Create a row covering the single interval `[lo, hi]`.
    /// Reversed arguments are swapped.
    pub fn from_interval(lo: i32, hi: i32) -> Self {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let mut bounds = SmallVec::new();
        bounds.extend_from_slice(&[lo, hi]);
        Self { bounds }
    }

    /// True if the row covers nothing.
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Number of disjoint intervals.
    pub fn num_intervals(&self) -> usize {
        self.bounds.len() / 2
    }

    /// Raw boundary values, in order.
    pub fn bounds(&self) -> &[i32] {
        &self.bounds
    }

    /// Iterate over the raw boundary values.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.bounds.iter().copied()
    }

    /// Iterate over `(lo, hi)` interval pairs in ascending order.
    pub fn intervals(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.bounds.chunks_exact(2).map(|p| (p[0], p[1]))
    }

    /// Leftmost and rightmost covered columns, if any.
    pub fn span(&self) -> Option<(i32, i32)> {
        if self.bounds.is_empty() {
            None
        } else {
            Some((self.bounds[0], self.bounds[self.bounds.len() - 1]))
        }
    }

    /// Remove all coverage.
    pub fn clear(&mut self) {
        self.bounds.clear();
    }

    /// True if column `x` lies inside any interval.
    pub fn contains(&self, x: i32) -> bool {
        for pair in self.bounds.chunks_exact(2) {
            if x < pair[0] {
                return false;
            }
            if x <= pair[1] {
                return true;
            }
        }
        false
    }

    // ========================================================================
    // Boundary scans
    // ========================================================================

    /// Forward scan: index of the first boundary `>= x` starting at `from`,
    /// and whether it equals `x` exactly. Returns `(len, false)` when every
    /// boundary is below `x`.
    fn left_index_ge(&self, x: i32, from: usize) -> (usize, bool) {
        let mut i = from.min(self.bounds.len());
        while i < self.bounds.len() && self.bounds[i] < x {
            i += 1;
        }
        (i, i < self.bounds.len() && self.bounds[i] == x)
    }

    /// Reverse scan: index of the last boundary `<= x` and whether it equals
    /// `x` exactly. `None` when every boundary is above `x`.
    fn right_index_le(&self, x: i32) -> Option<(usize, bool)> {
        let mut i = self.bounds.len();
        while i > 0 && self.bounds[i - 1] > x {
            i -= 1;
        }
        if i == 0 {
            None
        } else {
            Some((i - 1, self.bounds[i - 1] == x))
        }
    }

    // ========================================================================
    // Point insertion
    // ========================================================================

    /// Insert `x` as a left-side boundary point.
    ///
    /// Below all coverage, the leftmost interval's start becomes `x`. In a
    /// gap between intervals, `x` merges into whichever neighbor it touches,
    /// collapses both neighbors into one interval when it exactly bridges
    /// them, and otherwise becomes a new single-point interval in sorted
    /// position. Covered points are a no-op.
    pub fn add_left(&mut self, x: i32) {
        if self.bounds.is_empty() {
            self.bounds.extend_from_slice(&[x, x]);
            return;
        }
        let (idx, exact) = self.left_index_ge(x, 0);
        if exact {
            return;
        }
        if idx == self.bounds.len() {
            // above all coverage
            let last = self.bounds.len() - 1;
            if self.bounds[last] + 1 == x {
                self.bounds[last] = x;
            } else {
                self.bounds.extend_from_slice(&[x, x]);
            }
            self.check_invariants();
            return;
        }
        if idx % 2 == 1 {
            return; // strictly inside an interval
        }
        if idx == 0 {
            // below all coverage: extend the leftmost interval down to x
            self.bounds[0] = x;
            return;
        }
        let touches_prev = self.bounds[idx - 1] + 1 == x;
        let touches_next = x + 1 == self.bounds[idx];
        match (touches_prev, touches_next) {
            // x bridges two intervals: collapse them into one
            (true, true) => {
                self.bounds.drain(idx - 1..=idx);
            }
            (false, true) => self.bounds[idx] = x,
            (true, false) => self.bounds[idx - 1] = x,
            (false, false) => self.bounds.insert_from_slice(idx, &[x, x]),
        }
        self.check_invariants();
    }

    /// Insert `x` as a right-side boundary point.
    ///
    /// Mirror of [`add_left`](Self::add_left): above all coverage the
    /// rightmost interval's end becomes `x`; gap handling is identical.
    pub fn add_right(&mut self, x: i32) {
        if self.bounds.is_empty() {
            self.bounds.extend_from_slice(&[x, x]);
            return;
        }
        let Some((idx, exact)) = self.right_index_le(x) else {
            // below all coverage
            if x + 1 == self.bounds[0] {
                self.bounds[0] = x;
            } else {
                self.bounds.insert_from_slice(0, &[x, x]);
            }
            self.check_invariants();
            return;
        };
        if exact {
            return;
        }
        if idx == self.bounds.len() - 1 {
            // above all coverage: extend the rightmost interval up to x
            self.bounds[idx] = x;
            return;
        }
        if idx % 2 == 0 {
            return; // strictly inside an interval
        }
        let touches_prev = self.bounds[idx] + 1 == x;
        let touches_next = x + 1 == self.bounds[idx + 1];
        match (touches_prev, touches_next) {
            (true, true) => {
                self.bounds.drain(idx..=idx + 1);
            }
            (true, false) => self.bounds[idx] = x,
            (false, true) => self.bounds[idx + 1] = x,
            (false, false) => self.bounds.insert_from_slice(idx + 1, &[x, x]),
        }
        self.check_invariants();
    }

    // ========================================================================
    // Union
    // ========================================================================

    /// Union `[lo, hi]` into the row. Reversed arguments are swapped.
    pub fn union_interval(&mut self, lo: i32, hi: i32) {
        self.union_with_cursor(lo, hi, 0);
    }

    /// Union `[lo, hi]` into the row, scanning from `cursor` and returning
    /// the cursor for the next (ascending) interval in a batch.
    ///
    /// Exact adjacency counts as overlap: an existing interval ending at
    /// `lo - 1` or starting at `hi + 1` is coalesced into the result. This
    /// keeps the interval count from growing along nearly-continuous
    /// boundaries such as a pen stamped step by step along a stroke.
    pub fn union_with_cursor(&mut self, lo: i32, hi: i32, cursor: usize) -> usize {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let len = self.bounds.len();
        // Widened comparisons so adjacency probes cannot wrap at the i32 rim.
        let mut min_idx = cursor.min(len);
        while min_idx < len && (self.bounds[min_idx] as i64) < lo as i64 - 1 {
            min_idx += 1;
        }
        let mut max_idx = min_idx;
        while max_idx < len && (self.bounds[max_idx] as i64) <= hi as i64 + 1 {
            max_idx += 1;
        }
        if min_idx % 2 == 1 && max_idx == min_idx {
            // already inside a stored interval
            return min_idx - 1;
        }
        let start = if min_idx % 2 == 1 { min_idx - 1 } else { min_idx };
        let end = if max_idx % 2 == 1 { max_idx + 1 } else { max_idx };
        let new_lo = if min_idx % 2 == 1 {
            self.bounds[min_idx - 1]
        } else if min_idx < max_idx {
            lo.min(self.bounds[min_idx])
        } else {
            lo
        };
        let new_hi = if max_idx % 2 == 1 {
            self.bounds[max_idx]
        } else if max_idx > min_idx {
            hi.max(self.bounds[max_idx - 1])
        } else {
            hi
        };
        if end > start {
            self.bounds[start] = new_lo;
            self.bounds[start + 1] = new_hi;
            if end > start + 2 {
                self.bounds.drain(start + 2..end);
            }
        } else {
            self.bounds.insert_from_slice(start, &[new_lo, new_hi]);
        }
        self.check_invariants();
        start
    }

    /// Union every interval of `other` into the row. Amortized O(n + m) via
    /// cursor threading.
    pub fn union_row(&mut self, other: &IntervalRow) {
        let mut cursor = 0;
        for k in (0..other.bounds.len()).step_by(2) {
            cursor = self.union_with_cursor(other.bounds[k], other.bounds[k + 1], cursor);
        }
    }

    // ========================================================================
    // Intersection
    // ========================================================================

    /// Trim the row so only coverage inside `[lo, hi]` survives. Intervals
    /// fully outside are dropped; straddlers are clipped at the boundary.
    /// Reversed arguments are swapped.
    pub fn intersect_interval(&mut self, lo: i32, hi: i32) {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let mut i = 0;
        while i < self.bounds.len() && self.bounds[i] < lo {
            i += 1;
        }
        if i == self.bounds.len() {
            self.bounds.clear();
            return;
        }
        if i % 2 == 1 {
            // straddles lo: clip the interval's start
            self.bounds[i - 1] = lo;
            self.bounds.drain(..i - 1);
        } else {
            self.bounds.drain(..i);
        }
        let mut j = self.bounds.len();
        while j > 0 && self.bounds[j - 1] > hi {
            j -= 1;
        }
        if j == 0 {
            self.bounds.clear();
            return;
        }
        if j < self.bounds.len() && (j - 1) % 2 == 0 {
            // straddles hi: clip the interval's end
            self.bounds[j] = hi;
            self.bounds.truncate(j + 1);
        } else {
            self.bounds.truncate(j);
        }
        self.check_invariants();
    }

    /// Clip the row to lie within `[lo, hi]` (alias used when clipping a
    /// contour to an image boundary).
    pub fn crop(&mut self, lo: i32, hi: i32) {
        self.intersect_interval(lo, hi);
    }

    /// Intersect with another row: only coverage present in both survives.
    /// Two-pointer sweep, O(n + m).
    pub fn intersect_row(&mut self, other: &IntervalRow) {
        let mut out: SmallVec<[i32; INLINE_BOUNDS]> = SmallVec::new();
        let mut i = 0;
        let mut j = 0;
        while i < self.bounds.len() && j < other.bounds.len() {
            let (a1, b1) = (self.bounds[i], self.bounds[i + 1]);
            let (a2, b2) = (other.bounds[j], other.bounds[j + 1]);
            let lo = a1.max(a2);
            let hi = b1.min(b2);
            if lo <= hi {
                out.push(lo);
                out.push(hi);
            }
            if b1 < b2 {
                i += 2;
            } else {
                j += 2;
            }
        }
        self.bounds = out;
        self.check_invariants();
    }

    // ========================================================================
    // Difference
    // ========================================================================

    /// Carve `[lo, hi]` out of the row. Reversed arguments are swapped.
    pub fn subtract_interval(&mut self, lo: i32, hi: i32) {
        self.subtract_with_cursor(lo, hi, 0);
    }

    /// Carve `[lo, hi]` out of the row, scanning from `cursor` and returning
    /// the cursor for the next (ascending) interval in a batch.
    ///
    /// An interval straddling both boundaries is split in two; this is the
    /// only operation that can increase the interval count.
    pub fn subtract_with_cursor(&mut self, lo: i32, hi: i32, cursor: usize) -> usize {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let len = self.bounds.len();
        let mut min_idx = cursor.min(len);
        while min_idx < len && self.bounds[min_idx] < lo {
            min_idx += 1;
        }
        let mut max_idx = min_idx;
        while max_idx < len && self.bounds[max_idx] <= hi {
            max_idx += 1;
        }
        if min_idx == max_idx {
            if min_idx % 2 == 1 {
                // [lo, hi] strictly inside one interval: split into
                // [a, lo-1] and [hi+1, b]
                self.bounds.insert_from_slice(min_idx, &[lo - 1, hi + 1]);
                self.check_invariants();
                return min_idx + 1;
            }
            return min_idx; // falls in a gap, nothing covered
        }
        let mut start = min_idx;
        let mut end = max_idx;
        if min_idx % 2 == 1 {
            // straddles lo: truncate to [a, lo-1]
            self.bounds[min_idx] = lo - 1;
            start = min_idx + 1;
        }
        if max_idx % 2 == 1 {
            // straddles hi: truncate to [hi+1, b]
            self.bounds[max_idx - 1] = hi + 1;
            end = max_idx - 1;
        }
        if end > start {
            self.bounds.drain(start..end);
        }
        self.check_invariants();
        start
    }

    /// Subtract every interval of `other` from the row. Amortized O(n + m)
    /// via cursor threading.
    pub fn subtract_row(&mut self, other: &IntervalRow) {
        let mut cursor = 0;
        for k in (0..other.bounds.len()).step_by(2) {
            cursor = self.subtract_with_cursor(other.bounds[k], other.bounds[k + 1], cursor);
        }
    }

    // ========================================================================
    // Symmetric difference
    // ========================================================================

    /// Replace the row with `(self ∪ other) \ (self ∩ other)`.
    /// `other` is never mutated.
    pub fn symmetric_difference_row(&mut self, other: &IntervalRow) {
        let mut overlap = self.clone();
        overlap.intersect_row(other);
        self.union_row(other);
        self.subtract_row(&overlap);
    }

    // ========================================================================
    // Offset
    // ========================================================================

    /// Shift every boundary by `dx`. Order-preserving, no re-merge needed.
    pub fn offset(&mut self, dx: i32) {
        for b in self.bounds.iter_mut() {
            *b += dx;
        }
    }

    // ========================================================================
    // Invariant check
    // ========================================================================

    /// Fail fast (debug builds) if the boundary sequence is corrupt: odd
    /// length, non-increasing pair, or two intervals without a gap.
    #[inline]
    fn check_invariants(&self) {
        debug_assert!(self.bounds.len() % 2 == 0, "odd boundary count");
        #[cfg(debug_assertions)]
        for k in (0..self.bounds.len()).step_by(2) {
            debug_assert!(self.bounds[k] <= self.bounds[k + 1], "reversed interval");
            if k + 2 < self.bounds.len() {
                debug_assert!(
                    (self.bounds[k + 1] as i64) + 1 < self.bounds[k + 2] as i64,
                    "touching intervals not merged"
                );
            }
        }
    }
}

impl core::ops::Index<usize> for IntervalRow {
    type Output = i32;

    /// Raw boundary value at `index`.
    fn index(&self, index: usize) -> &i32 {
        &self.bounds[index]
    }
}

impl core::ops::IndexMut<usize> for IntervalRow {
    /// Raw boundary write. The caller is responsible for keeping the
    /// sequence sorted and gapped; debug builds verify on the next mutation.
    fn index_mut(&mut self, index: usize) -> &mut i32 {
        &mut self.bounds[index]
    }
}

// ============================================================================
// Tests
// ============================================================================
