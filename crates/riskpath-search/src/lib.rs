//! Best-first pathfinding over weighted grids.
//!
//! This crate computes minimum-cost paths between cells of a rectangular
//! grid of non-negative entry costs, using a best-first search ordered by
//! `cumulative cost + distance-to-goal estimate`:
//!
//! - [`Search`] owns reusable query state and runs [`Search::find_path`].
//! - The [`Pather`] / [`WeightedPather`] / [`BestFirstPather`] traits
//!   describe the searched graph; `riskpath_core::CostGrid` implements all
//!   three with 4-way adjacency and a Euclidean estimate.
//!
//! An unreachable goal is a normal result (`None`), never an error. The
//! search never reconsiders a finalized cell: stale frontier entries are
//! discarded when popped rather than updated in place.

mod distance;
mod grid_pather;
mod neighbors;
mod search;
mod traits;

pub use distance::{euclidean, manhattan};
pub use neighbors::Neighbors;
pub use search::Search;
pub use traits::{BestFirstPather, Pather, WeightedPather};
