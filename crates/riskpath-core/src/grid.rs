//! An immutable grid of cell entry costs.
//!
//! [`CostGrid`] is a rectangular, row-major array of non-negative `i32`
//! costs. Each value is the cost of *stepping onto* that cell; the cell a
//! path starts on contributes nothing (see [`CostGrid::path_cost`]).

use std::fmt;
use std::str::FromStr;

use crate::geom::{Point, Range};

/// A rectangular grid of non-negative entry costs.
///
/// The grid is immutable once constructed. Costs are stored as plain `i32`
/// values; the digit-line parser only produces 0–9, but nothing in the type
/// assumes that upper bound.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostGrid {
    width: i32,
    height: i32,
    costs: Vec<i32>,
}

impl CostGrid {
    /// Create a grid from row-major cost values.
    ///
    /// Fails with [`GridError::Empty`] if either dimension is zero or
    /// `costs` does not hold `width * height` values, and with
    /// [`GridError::NegativeCost`] if any cost is below zero.
    pub fn new(width: i32, height: i32, costs: Vec<i32>) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 || costs.len() != (width as usize) * (height as usize) {
            return Err(GridError::Empty);
        }
        for (i, &c) in costs.iter().enumerate() {
            if c < 0 {
                let p = Point::new(i as i32 % width, i as i32 / width);
                return Err(GridError::NegativeCost { cost: c, pos: p });
            }
        }
        Ok(Self {
            width,
            height,
            costs,
        })
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The rectangle covered by the grid: `[(0,0), (width,height))`.
    #[inline]
    pub fn range(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.range().contains(p)
    }

    /// The entry cost of `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<i32> {
        if !self.contains(p) {
            return None;
        }
        Some(self.costs[(p.y * self.width + p.x) as usize])
    }

    /// Total cost of a path: the sum of the entry costs of every cell
    /// except the first.
    ///
    /// Entering the starting cell is never paid for, so a one-cell path
    /// costs 0. Every path cell must lie inside the grid; an out-of-bounds
    /// cell panics in debug builds and contributes nothing otherwise.
    pub fn path_cost(&self, path: &[Point]) -> i32 {
        path.iter()
            .skip(1)
            .map(|&p| {
                debug_assert!(self.contains(p), "path cell {p} out of bounds");
                self.at(p).unwrap_or(0)
            })
            .sum()
    }

    /// Render the grid as digit lines with the path cells marked `X`.
    ///
    /// Diagnostic output only; cells with costs above 9 still render as a
    /// single character (`#`) to keep columns aligned.
    pub fn render_path(&self, path: &[Point]) -> String {
        let on_path: std::collections::HashSet<Point> = path.iter().copied().collect();
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                let p = Point::new(x, y);
                if on_path.contains(&p) {
                    out.push('X');
                } else {
                    let c = self.costs[(y * self.width + x) as usize];
                    match char::from_digit(c as u32, 10) {
                        Some(ch) => out.push(ch),
                        None => out.push('#'),
                    }
                }
            }
            out.push('\n');
        }
        out
    }
}

impl FromStr for CostGrid {
    type Err = GridError;

    /// Parse a grid from equal-length lines of decimal digits, one digit
    /// per cell. Dimensions are inferred; no header, no delimiters.
    ///
    /// Trailing blank lines are tolerated; a blank line anywhere else is a
    /// ragged row.
    fn from_str(s: &str) -> Result<Self, GridError> {
        let mut lines: Vec<&str> = s.lines().map(str::trim_end).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }

        let mut width: Option<i32> = None;
        let mut costs = Vec::new();

        for (y, line) in lines.iter().enumerate() {
            let mut row_len = 0i32;
            for (x, ch) in line.chars().enumerate() {
                let Some(d) = ch.to_digit(10) else {
                    return Err(GridError::InvalidDigit {
                        ch,
                        pos: Point::new(x as i32, y as i32),
                    });
                };
                costs.push(d as i32);
                row_len += 1;
            }
            match width {
                None => width = Some(row_len),
                Some(w) if w != row_len => {
                    return Err(GridError::RaggedRow { line: y });
                }
                Some(_) => {}
            }
        }

        let Some(width) = width else {
            return Err(GridError::Empty);
        };
        Self::new(width, lines.len() as i32, costs)
    }
}

/// Errors that can occur when constructing a [`CostGrid`].
///
/// These are fatal input errors; a grid with no path between two points is
/// *not* an error here (the search reports that as an absent result).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, no columns, or a cost buffer of the wrong length.
    Empty,
    /// A line with a length different from the first line's.
    RaggedRow { line: usize },
    /// A character outside `0`–`9` in the input.
    InvalidDigit { ch: char, pos: Point },
    /// A negative entry cost passed to [`CostGrid::new`].
    NegativeCost { cost: i32, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid is empty or has mismatched dimensions"),
            Self::RaggedRow { line } => {
                write!(f, "grid line {} has a different length", line + 1)
            }
            Self::InvalidDigit { ch, pos } => {
                write!(f, "invalid digit \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::NegativeCost { cost, pos } => {
                write!(f, "negative cost {cost} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g: CostGrid = "12\n34".parse().unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: CostGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
