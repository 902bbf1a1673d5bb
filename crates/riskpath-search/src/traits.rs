use riskpath_core::Point;

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (non-negative cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be ≥ 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// Pather with a distance-to-goal estimate for best-first ordering.
pub trait BestFirstPather: WeightedPather {
    /// Heuristic estimate of the remaining cost from `from` to `to`.
    ///
    /// When cell costs can exceed 1, a straight-line estimate is not
    /// guaranteed admissible, so the search is best-first rather than
    /// strict A*. Returning 0 reduces it to Dijkstra, which is optimal.
    fn estimate(&self, from: Point, to: Point) -> f64;
}
