//! Property tests for the interval row algebra and region maps.
//!
//! Every operation is checked against a naive model: a row is just a set of
//! covered integers, and the boundary encoding must agree with plain set
//! arithmetic while keeping its structural invariants intact.

use std::collections::BTreeSet;

use proptest::prelude::*;
use sparse_region::{IntervalRow, RegionMap};

// ============================================================================
// Model helpers
// ============================================================================

/// Structural invariants of the boundary encoding: even length, strictly
/// increasing, and a gap of at least one integer between intervals.
fn assert_well_formed(row: &IntervalRow) {
    let bounds = row.bounds();
    assert_eq!(bounds.len() % 2, 0, "odd boundary count: {bounds:?}");
    for pair in bounds.chunks_exact(2) {
        assert!(pair[0] <= pair[1], "reversed interval: {bounds:?}");
    }
    for w in bounds.chunks_exact(2).collect::<Vec<_>>().windows(2) {
        assert!(
            w[0][1] + 1 < w[1][0],
            "touching intervals not merged: {bounds:?}"
        );
    }
}

/// The covered set a row encodes, expanded pixel by pixel.
fn covered(row: &IntervalRow) -> BTreeSet<i32> {
    row.intervals().flat_map(|(lo, hi)| lo..=hi).collect()
}

fn row_from_model(model: &BTreeSet<i32>) -> IntervalRow {
    let mut row = IntervalRow::new();
    for &x in model {
        row.union_interval(x, x);
    }
    row
}

#[derive(Debug, Clone)]
enum RowOp {
    Union(i32, i32),
    Subtract(i32, i32),
    Intersect(i32, i32),
    AddLeft(i32),
    AddRight(i32),
    Offset(i32),
}

fn arb_op() -> impl Strategy<Value = RowOp> {
    let coord = -60i32..60;
    prop_oneof![
        (coord.clone(), coord.clone()).prop_map(|(a, b)| RowOp::Union(a, b)),
        (coord.clone(), coord.clone()).prop_map(|(a, b)| RowOp::Subtract(a, b)),
        (coord.clone(), coord.clone()).prop_map(|(a, b)| RowOp::Intersect(a, b)),
        coord.clone().prop_map(RowOp::AddLeft),
        coord.clone().prop_map(RowOp::AddRight),
        (-10i32..10).prop_map(RowOp::Offset),
    ]
}

fn arb_intervals() -> impl Strategy<Value = Vec<(i32, i32)>> {
    prop::collection::vec((-60i32..60, 0i32..12), 0..8)
        .prop_map(|v| v.into_iter().map(|(lo, len)| (lo, lo + len)).collect())
}

fn row_from_intervals(intervals: &[(i32, i32)]) -> IntervalRow {
    let mut row = IntervalRow::new();
    for &(lo, hi) in intervals {
        row.union_interval(lo, hi);
    }
    row
}

// ============================================================================
// Row properties
// ============================================================================

proptest! {
    /// Arbitrary operation sequences never corrupt the boundary encoding.
    #[test]
    fn row_stays_well_formed(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut row = IntervalRow::new();
        for op in ops {
            match op {
                RowOp::Union(a, b) => row.union_interval(a, b),
                RowOp::Subtract(a, b) => row.subtract_interval(a, b),
                RowOp::Intersect(a, b) => row.intersect_interval(a, b),
                RowOp::AddLeft(x) => row.add_left(x),
                RowOp::AddRight(x) => row.add_right(x),
                RowOp::Offset(dx) => row.offset(dx),
            }
            assert_well_formed(&row);
        }
    }

    /// Union, subtraction, and intersection agree with plain set arithmetic.
    #[test]
    fn ops_match_set_model(
        base in arb_intervals(),
        lo in -60i32..60,
        len in 0i32..15,
    ) {
        let hi = lo + len;
        let model: BTreeSet<i32> = row_from_intervals(&base)
            .intervals()
            .flat_map(|(a, b)| a..=b)
            .collect();

        let mut unioned = row_from_intervals(&base);
        unioned.union_interval(lo, hi);
        let mut expect = model.clone();
        expect.extend(lo..=hi);
        prop_assert_eq!(covered(&unioned), expect);

        let mut subtracted = row_from_intervals(&base);
        subtracted.subtract_interval(lo, hi);
        let expect: BTreeSet<i32> =
            model.iter().copied().filter(|x| *x < lo || *x > hi).collect();
        prop_assert_eq!(covered(&subtracted), expect);

        let mut clipped = row_from_intervals(&base);
        clipped.intersect_interval(lo, hi);
        let expect: BTreeSet<i32> =
            model.iter().copied().filter(|x| *x >= lo && *x <= hi).collect();
        prop_assert_eq!(covered(&clipped), expect);
    }

    /// Row union is commutative on the covered set.
    #[test]
    fn union_row_commutes(a in arb_intervals(), b in arb_intervals()) {
        let ra = row_from_intervals(&a);
        let rb = row_from_intervals(&b);

        let mut ab = ra.clone();
        ab.union_row(&rb);
        let mut ba = rb.clone();
        ba.union_row(&ra);
        prop_assert_eq!(ab, ba);
    }

    /// Row union is associative on the covered set.
    #[test]
    fn union_row_associates(
        a in arb_intervals(),
        b in arb_intervals(),
        c in arb_intervals(),
    ) {
        let ra = row_from_intervals(&a);
        let rb = row_from_intervals(&b);
        let rc = row_from_intervals(&c);

        let mut left = ra.clone();
        left.union_row(&rb);
        left.union_row(&rc);

        let mut bc = rb.clone();
        bc.union_row(&rc);
        let mut right = ra.clone();
        right.union_row(&bc);

        prop_assert_eq!(left, right);
    }

    /// Intersection keeps exactly the pixels present in both rows.
    #[test]
    fn intersect_row_matches_model(a in arb_intervals(), b in arb_intervals()) {
        let ra = row_from_intervals(&a);
        let rb = row_from_intervals(&b);
        let expect: BTreeSet<i32> =
            covered(&ra).intersection(&covered(&rb)).copied().collect();

        let mut out = ra.clone();
        out.intersect_row(&rb);
        assert_well_formed(&out);
        prop_assert_eq!(covered(&out), expect);
    }

    /// Symmetric difference keeps pixels covered by exactly one row, and
    /// leaves the other row untouched.
    #[test]
    fn symmetric_difference_matches_model(a in arb_intervals(), b in arb_intervals()) {
        let ra = row_from_intervals(&a);
        let rb = row_from_intervals(&b);
        let expect: BTreeSet<i32> = covered(&ra)
            .symmetric_difference(&covered(&rb))
            .copied()
            .collect();

        let mut out = ra.clone();
        let rb_before = rb.clone();
        out.symmetric_difference_row(&rb);
        assert_well_formed(&out);
        prop_assert_eq!(covered(&out), expect);
        prop_assert_eq!(rb, rb_before);
    }

    /// Subtracting a row and unioning it back restores every pixel the
    /// subtrahend covered within the original.
    #[test]
    fn subtract_then_union_restores(a in arb_intervals(), b in arb_intervals()) {
        let ra = row_from_intervals(&a);
        let rb = row_from_intervals(&b);

        let mut out = ra.clone();
        out.subtract_row(&rb);
        out.union_row(&rb);
        let expect: BTreeSet<i32> =
            covered(&ra).union(&covered(&rb)).copied().collect();
        prop_assert_eq!(covered(&out), expect);
    }

    /// `contains` agrees with the expanded set for every probed column.
    #[test]
    fn contains_matches_model(a in arb_intervals(), probe in -80i32..80) {
        let row = row_from_intervals(&a);
        prop_assert_eq!(row.contains(probe), covered(&row).contains(&probe));
    }

    /// Point inserts agree with single-pixel union on the covered set.
    #[test]
    fn point_inserts_cover_the_point(a in arb_intervals(), x in -60i32..60) {
        let base = row_from_intervals(&a);

        let mut left = base.clone();
        left.add_left(x);
        let mut right = base.clone();
        right.add_right(x);

        let mut expect = covered(&base);
        expect.insert(x);
        prop_assert_eq!(covered(&left), expect.clone());
        prop_assert_eq!(covered(&right), expect);
    }

    /// The boundary encoding of a covered set is canonical: any construction
    /// order yields the same row.
    #[test]
    fn encoding_is_canonical(a in arb_intervals()) {
        let row = row_from_intervals(&a);
        let rebuilt = row_from_model(&covered(&row));
        prop_assert_eq!(row, rebuilt);
    }
}

// ============================================================================
// Region properties
// ============================================================================

fn arb_region() -> impl Strategy<Value = Vec<(i32, i32, i32)>> {
    prop::collection::vec((-8i32..8, -40i32..40, 0i32..10), 0..12)
}

fn region_from(cells: &[(i32, i32, i32)]) -> RegionMap {
    let mut map = RegionMap::new();
    for &(y, lo, len) in cells {
        map.row_mut(y).union_interval(lo, lo + len);
    }
    map
}

fn region_covered(map: &RegionMap) -> BTreeSet<(i32, i32)> {
    map.iter()
        .flat_map(|(y, row)| {
            row.intervals()
                .flat_map(move |(lo, hi)| (lo..=hi).map(move |x| (x, y)))
                .collect::<Vec<_>>()
        })
        .collect()
}

proptest! {
    /// Region union covers exactly the union of both pixel sets.
    #[test]
    fn region_union_matches_model(a in arb_region(), b in arb_region()) {
        let ra = region_from(&a);
        let rb = region_from(&b);
        let expect: BTreeSet<(i32, i32)> = region_covered(&ra)
            .union(&region_covered(&rb))
            .copied()
            .collect();

        let mut out = ra.clone();
        out.union(&rb);
        prop_assert_eq!(region_covered(&out), expect);
        for (_, row) in out.iter() {
            assert_well_formed(row);
        }
    }

    /// Region difference removes exactly the other region's pixels and never
    /// leaves an empty row behind.
    #[test]
    fn region_difference_matches_model(a in arb_region(), b in arb_region()) {
        let ra = region_from(&a);
        let rb = region_from(&b);
        let to_remove = region_covered(&rb);
        let expect: BTreeSet<(i32, i32)> = region_covered(&ra)
            .into_iter()
            .filter(|p| !to_remove.contains(p))
            .collect();

        let mut out = ra.clone();
        out.difference(&rb);
        prop_assert_eq!(region_covered(&out), expect);
        for (_, row) in out.iter() {
            prop_assert!(!row.is_empty());
        }
    }

    /// Offsetting translates every covered pixel and nothing else.
    #[test]
    fn region_offset_translates(a in arb_region(), dx in -20i32..20, dy in -5i32..5) {
        let ra = region_from(&a);
        let expect: BTreeSet<(i32, i32)> = region_covered(&ra)
            .into_iter()
            .map(|(x, y)| (x + dx, y + dy))
            .collect();
        prop_assert_eq!(region_covered(&ra.offset(dx, dy)), expect);
    }
}
