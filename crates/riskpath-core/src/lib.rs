//! **riskpath-core** — foundational types for weighted-grid pathfinding.
//!
//! This crate provides the geometry primitives ([`Point`], [`Range`]) and
//! the immutable cost grid ([`CostGrid`]) shared by the riskpath crates.

pub mod geom;
pub mod grid;

pub use geom::{Point, Range};
pub use grid::{CostGrid, GridError};
