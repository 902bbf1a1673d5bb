use riskpath_core::Point;

/// Euclidean (straight-line) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    (dx * dx + dy * dy).sqrt()
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_axis_aligned() {
        let a = Point::new(0, 0);
        assert_eq!(euclidean(a, Point::new(3, 0)), 3.0);
        assert_eq!(euclidean(a, Point::new(0, 4)), 4.0);
    }

    #[test]
    fn euclidean_diagonal() {
        assert_eq!(euclidean(Point::new(0, 0), Point::new(3, 4)), 5.0);
    }

    #[test]
    fn euclidean_symmetric() {
        let a = Point::new(2, 7);
        let b = Point::new(-4, 1);
        assert_eq!(euclidean(a, b), euclidean(b, a));
    }

    #[test]
    fn manhattan_basic() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(3, 4)), 7);
        assert_eq!(manhattan(Point::new(2, 2), Point::new(2, 2)), 0);
    }
}
