//! # sparse-region
//!
//! Planar region algebra over sparse rows of integer intervals.
//!
//! A region is a set of integer pixels stored row by row: each covered row
//! holds an even, strictly increasing boundary sequence encoding disjoint
//! closed intervals, and a region maps row coordinates to those interval
//! rows. The crate provides:
//!
//! - Boolean set operations (union, intersection, difference, symmetric
//!   difference) on rows and whole regions
//! - Cursor-threaded batch insertion for sorted interval streams
//! - Parametric shape contours (ellipse, polygon, rectangle, regular
//!   polygon, triangle) with lazy region materialization
//! - Bresenham line and midpoint ellipse boundary walkers
//! - Region extraction from alpha-channel pixel sources
//!
//! ## Architecture
//!
//! Shapes feed boundary pixels through the walkers into per-row endpoint
//! inserts; the resulting [`region_map::RegionMap`] composes with others
//! through the row algebra in [`interval_row`].

// Foundation types & math
pub mod basics;

// Interval algebra
pub mod interval_row;
pub mod region_map;

// Boundary walkers
pub mod ellipse_walk;
pub mod line_walk;

// Shapes & extraction
pub mod contour;
pub mod parse;

pub use basics::{RectD, RectI};
pub use contour::{ContourError, FlipMode, ShapeContour};
pub use interval_row::IntervalRow;
pub use parse::{parse_alpha, AlphaSource};
pub use region_map::RegionMap;
