//! riskpath — minimum-cost paths through digit grids.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use riskpath_core::{CostGrid, Point};
use riskpath_search::Search;

/// Find the minimum-cost path through a grid of digit entry costs.
///
/// The input is a text file of equal-length lines of decimal digits, one
/// digit per cell; each digit is the cost of stepping onto that cell. The
/// cost of the start cell is never counted. Prints the total path cost.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to the input file.
    input: PathBuf,

    /// Also print the grid with the path cells marked `X`.
    #[arg(short, long)]
    render: bool,

    /// Start coordinate as `x,y` (default: top-left corner).
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    start: Option<Point>,

    /// Goal coordinate as `x,y` (default: bottom-right corner).
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    goal: Option<Point>,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got {s:?}"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y: {e}"))?;
    Ok(Point::new(x, y))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let grid: CostGrid = text.parse().context("parsing input grid")?;
    log::debug!("parsed {}x{} grid", grid.width(), grid.height());

    let start = cli.start.unwrap_or(Point::ZERO);
    let goal = cli
        .goal
        .unwrap_or_else(|| Point::new(grid.width() - 1, grid.height() - 1));
    for (name, p) in [("start", start), ("goal", goal)] {
        if !grid.contains(p) {
            bail!(
                "{name} {p} is outside the {}x{} grid",
                grid.width(),
                grid.height()
            );
        }
    }

    let mut search = Search::new(grid.range());
    let Some(path) = search.find_path(&grid, start, goal) else {
        bail!("no path from {start} to {goal}");
    };
    log::debug!("path of {} cells found", path.len());

    if cli.render {
        print!("{}", grid.render_path(&path));
    }
    println!("{}", grid.path_cost(&path));
    Ok(())
}
