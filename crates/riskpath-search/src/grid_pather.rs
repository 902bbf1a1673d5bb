//! Pather implementations for [`CostGrid`].

use riskpath_core::{CostGrid, Point};

use crate::distance::euclidean;
use crate::traits::{BestFirstPather, Pather, WeightedPather};

impl Pather for CostGrid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.contains(n) {
                buf.push(n);
            }
        }
    }
}

impl WeightedPather for CostGrid {
    /// The cost of a step is the entry cost of the cell stepped onto. The
    /// origin cell of the step contributes nothing, which is what makes a
    /// path's total cost exclude its starting cell.
    fn cost(&self, _from: Point, to: Point) -> i32 {
        self.at(to).unwrap_or(0)
    }
}

impl BestFirstPather for CostGrid {
    fn estimate(&self, from: Point, to: Point) -> f64 {
        euclidean(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_clipped_at_corner() {
        let g: CostGrid = "12\n34".parse().unwrap();
        let mut buf = Vec::new();
        g.neighbors(Point::new(0, 0), &mut buf);
        buf.sort();
        assert_eq!(buf, vec![Point::new(1, 0), Point::new(0, 1)]);
    }

    #[test]
    fn neighbors_interior() {
        let g: CostGrid = "111\n111\n111".parse().unwrap();
        let mut buf = Vec::new();
        g.neighbors(Point::new(1, 1), &mut buf);
        assert_eq!(buf.len(), 4);
    }

    #[test]
    fn cost_is_destination_entry_cost() {
        let g: CostGrid = "12\n34".parse().unwrap();
        assert_eq!(g.cost(Point::new(0, 0), Point::new(1, 0)), 2);
        assert_eq!(g.cost(Point::new(1, 0), Point::new(0, 0)), 1);
    }

    #[test]
    fn estimate_is_euclidean() {
        let g: CostGrid = "12\n34".parse().unwrap();
        assert_eq!(g.estimate(Point::new(0, 0), Point::new(0, 1)), 1.0);
    }
}
