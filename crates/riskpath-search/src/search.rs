use std::collections::BinaryHeap;

use riskpath_core::{Point, Range};

use crate::traits::BestFirstPather;

// ---------------------------------------------------------------------------
// Internal search-node arena
// ---------------------------------------------------------------------------

/// A partial path ending at `pos`: cumulative cost plus a handle to the
/// predecessor node in the arena. `usize::MAX` marks the path root.
#[derive(Clone, Copy)]
struct SearchNode {
    pos: Point,
    g: i32,
    parent: usize,
}

/// Entry in the frontier heap: an arena handle ordered by estimated total
/// cost `f = g + estimate`.
#[derive(Clone, Copy)]
struct FrontierRef {
    node: usize,
    f: f64,
}

impl PartialEq for FrontierRef {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f
    }
}

impl Eq for FrontierRef {}

impl Ord for FrontierRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first. Ties are
        // broken by heap order, which is not deterministic across inserts.
        other.f.total_cmp(&self.f)
    }
}

impl PartialOrd for FrontierRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Reusable state for best-first path searches over a grid rectangle.
///
/// `Search` owns the node arena and the visited map so that repeated
/// queries reuse their allocations. The visited map is generation-stamped:
/// starting a new query invalidates the previous one without clearing.
pub struct Search {
    rng: Range,
    width: usize,
    visited: Vec<u32>,
    generation: u32,
    arena: Vec<SearchNode>,
    nbuf: Vec<Point>,
}

impl Search {
    /// Create a new `Search` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let w = rng.width().max(0) as usize;
        Self {
            rng,
            width: w,
            visited: vec![0; rng.len()],
            generation: 0,
            arena: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying range, reallocating the visited map only when
    /// the new rectangle exceeds existing capacity.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;
        if new_len > self.visited.len() {
            self.visited.clear();
            self.visited.resize(new_len, 0);
            self.generation = 0;
        }
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Compute a minimum-cost path from `from` to `to` using best-first
    /// search ordered by `g + estimate`.
    ///
    /// Returns the full path (including both endpoints) or `None` if `to`
    /// is unreachable or either endpoint lies outside the range. A cell,
    /// once expanded, is never reconsidered; stale frontier entries for it
    /// are discarded when popped. The start cell's own entry cost is never
    /// part of the total, since costs are charged on the step *onto* a cell.
    pub fn find_path<P: BestFirstPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        self.idx(from)?;
        self.idx(to)?;

        if from == to {
            return Some(vec![from]);
        }

        // Bump generation to lazily invalidate the visited map.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        self.arena.clear();
        self.arena.push(SearchNode {
            pos: from,
            g: 0,
            parent: usize::MAX,
        });

        let mut frontier: BinaryHeap<FrontierRef> = BinaryHeap::new();
        frontier.push(FrontierRef {
            node: 0,
            f: pather.estimate(from, to),
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expanded = 0usize;

        let found = 'search: loop {
            let Some(current) = frontier.pop() else {
                break 'search None;
            };

            let node = self.arena[current.node];
            let Some(ci) = self.idx(node.pos) else {
                continue;
            };

            // Discard stale duplicates for an already-finalized cell.
            if self.visited[ci] == cur_gen {
                continue;
            }

            if node.pos == to {
                break 'search Some(current.node);
            }

            // Finalize and expand.
            self.visited[ci] = cur_gen;
            expanded += 1;

            nbuf.clear();
            pather.neighbors(node.pos, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.visited[ni] == cur_gen {
                    continue;
                }
                let g = node.g + pather.cost(node.pos, np);
                let f = f64::from(g) + pather.estimate(np, to);
                let handle = self.arena.len();
                self.arena.push(SearchNode {
                    pos: np,
                    g,
                    parent: current.node,
                });
                frontier.push(FrontierRef { node: handle, f });
            }
        };

        self.nbuf = nbuf;

        let goal = found?;
        log::debug!(
            "path found: cost {}, {} cells expanded, {} nodes allocated",
            self.arena[goal].g,
            expanded,
            self.arena.len()
        );

        // Reconstruct by walking parent handles back to the root.
        let mut path = Vec::new();
        let mut ni = goal;
        while ni != usize::MAX {
            path.push(self.arena[ni].pos);
            ni = self.arena[ni].parent;
        }
        path.reverse();
        Some(path)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Search {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rng.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Search {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rng = Range::deserialize(deserializer)?;
        Ok(Search::new(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riskpath_core::CostGrid;

    const REFERENCE: &str = "\
1163751742
1381373672
2136511328
3694931569
7463417111
1319128137
1359912421
3125421639
1293138521
2311944581";

    fn corner_path(input: &str) -> (CostGrid, Vec<Point>) {
        let grid: CostGrid = input.parse().unwrap();
        let mut search = Search::new(grid.range());
        let goal = Point::new(grid.width() - 1, grid.height() - 1);
        let path = search
            .find_path(&grid, Point::ZERO, goal)
            .expect("corner-to-corner path must exist on a dense grid");
        (grid, path)
    }

    fn assert_adjacent(path: &[Point]) {
        for w in path.windows(2) {
            let d = w[1] - w[0];
            assert_eq!(d.x.abs() + d.y.abs(), 1, "{} -> {} not adjacent", w[0], w[1]);
        }
    }

    #[test]
    fn reference_grid_cost_40() {
        let (grid, path) = corner_path(REFERENCE);
        assert_adjacent(&path);
        assert_eq!(path[0], Point::ZERO);
        assert_eq!(path[path.len() - 1], Point::new(9, 9));
        assert_eq!(grid.path_cost(&path), 40);
    }

    #[test]
    fn two_by_two_cost_2() {
        let (grid, path) = corner_path("11\n11");
        assert_eq!(path.len(), 3);
        assert_eq!(grid.path_cost(&path), 2);
    }

    #[test]
    fn single_row_cost_10() {
        let (grid, path) = corner_path("555");
        assert_eq!(
            path,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
        assert_eq!(grid.path_cost(&path), 10);
    }

    #[test]
    fn degenerate_single_cell() {
        let grid: CostGrid = "7".parse().unwrap();
        let mut search = Search::new(grid.range());
        let path = search.find_path(&grid, Point::ZERO, Point::ZERO).unwrap();
        assert_eq!(path, vec![Point::ZERO]);
        assert_eq!(grid.path_cost(&path), 0);
    }

    #[test]
    fn start_equals_goal_non_corner() {
        let grid: CostGrid = "123\n456\n789".parse().unwrap();
        let mut search = Search::new(grid.range());
        let p = Point::new(1, 1);
        assert_eq!(search.find_path(&grid, p, p), Some(vec![p]));
    }

    #[test]
    fn arbitrary_endpoints() {
        let grid: CostGrid = "191\n111\n191".parse().unwrap();
        let mut search = Search::new(grid.range());
        // Right edge to left edge, forced through the middle row.
        let path = search
            .find_path(&grid, Point::new(2, 0), Point::new(0, 2))
            .unwrap();
        assert_adjacent(&path);
        assert_eq!(grid.path_cost(&path), 4);
    }

    #[test]
    fn out_of_range_endpoints_not_found() {
        let grid: CostGrid = "11\n11".parse().unwrap();
        let mut search = Search::new(grid.range());
        assert!(search.find_path(&grid, Point::new(-1, 0), Point::ZERO).is_none());
        assert!(search.find_path(&grid, Point::ZERO, Point::new(5, 5)).is_none());
    }

    #[test]
    fn cost_is_idempotent_across_runs() {
        let grid: CostGrid = REFERENCE.parse().unwrap();
        let mut search = Search::new(grid.range());
        let goal = Point::new(9, 9);
        let first = search.find_path(&grid, Point::ZERO, goal).unwrap();
        let second = search.find_path(&grid, Point::ZERO, goal).unwrap();
        // Paths may differ on ties; the cost reflects a true minimum.
        assert_eq!(grid.path_cost(&first), grid.path_cost(&second));
    }

    #[test]
    fn raising_a_cost_never_lowers_the_optimum() {
        let base: CostGrid = "19\n11".parse().unwrap();
        let mut search = Search::new(base.range());
        let goal = Point::new(1, 1);
        let before = base.path_cost(&search.find_path(&base, Point::ZERO, goal).unwrap());

        // Bump the cheap lower-left cell.
        let raised = CostGrid::new(2, 2, vec![1, 9, 9, 1]).unwrap();
        let after = raised.path_cost(&search.find_path(&raised, Point::ZERO, goal).unwrap());
        assert!(after >= before);
    }

    #[test]
    fn detour_beats_expensive_direct_route() {
        // Along the top row costs 9 + 9 + 1; along the bottom row costs 3.
        let grid: CostGrid = "199\n111".parse().unwrap();
        let mut search = Search::new(grid.range());
        let path = search
            .find_path(&grid, Point::ZERO, Point::new(2, 1))
            .unwrap();
        assert_adjacent(&path);
        assert_eq!(grid.path_cost(&path), 3);
    }

    #[test]
    fn search_reuse_after_set_range() {
        let small: CostGrid = "11\n11".parse().unwrap();
        let big: CostGrid = "111\n111\n111".parse().unwrap();
        let mut search = Search::new(small.range());
        assert!(search.find_path(&small, Point::ZERO, Point::new(1, 1)).is_some());

        search.set_range(big.range());
        assert_eq!(search.range(), big.range());
        let path = search.find_path(&big, Point::ZERO, Point::new(2, 2)).unwrap();
        assert_eq!(big.path_cost(&path), 4);
    }

    #[test]
    fn zero_estimate_agrees_on_cost() {
        use crate::traits::{Pather, WeightedPather};

        // A zero estimate reduces the search to Dijkstra; the minimum cost
        // must come out the same.
        struct Dijkstra<'a>(&'a CostGrid);
        impl Pather for Dijkstra<'_> {
            fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
                self.0.neighbors(p, buf);
            }
        }
        impl WeightedPather for Dijkstra<'_> {
            fn cost(&self, from: Point, to: Point) -> i32 {
                self.0.cost(from, to)
            }
        }
        impl BestFirstPather for Dijkstra<'_> {
            fn estimate(&self, _from: Point, _to: Point) -> f64 {
                0.0
            }
        }

        let grid: CostGrid = REFERENCE.parse().unwrap();
        let mut search = Search::new(grid.range());
        let goal = Point::new(9, 9);
        let best_first = search.find_path(&grid, Point::ZERO, goal).unwrap();
        let dijkstra = search
            .find_path(&Dijkstra(&grid), Point::ZERO, goal)
            .unwrap();
        assert_eq!(grid.path_cost(&best_first), grid.path_cost(&dijkstra));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn search_round_trip_keeps_range() {
        let rng = Range::new(1, 2, 10, 20);
        let search = Search::new(rng);
        let json = serde_json::to_string(&search).unwrap();
        let back: Search = serde_json::from_str(&json).unwrap();
        // Query state is rebuilt fresh, only the range persists.
        assert_eq!(back.range(), rng);
        assert_eq!(back.generation, 0);
        assert_eq!(back.visited.len(), rng.len());
    }
}
