#![cfg_attr(feature="clippy", feature(plugin))]
#![cfg_attr(feature="clippy", plugin(clippy))]

use docopt::Docopt;
use log::warn;
use serde_derive::Deserialize;
use meltmaze::{
    cells::Cartesian2DCoordinate,
    generators::MazeBuilder,
    grid::MazeGrid,
    grid_displays::RouteOverlay,
    pathing,
    units::{Height, Width},
};
use std::{
    io,
    io::prelude::*,
    fs::File,
};

const USAGE: &str = "Meltmaze

Usage:
    meltmaze_driver -h | --help
    meltmaze_driver generate (dfs|prim) [--grid-width=<w> --grid-height=<h>] [--seed=<n>] [--temperature=<t>] [--show-route [--start-x=<x> --start-y=<y>] [--end-x=<e1> --end-y=<e2>]] [--text-out=<path>]

Options:
    -h --help            Show this screen.
    --grid-width=<w>     The grid width in cells, forced odd [default: 41].
    --grid-height=<h>    The grid height in cells, forced odd [default: 41].
    --seed=<n>           Seed for the maze random source, fixed per session so the same size and method regenerate the same maze [default: 42].
    --temperature=<t>    Temperature in °C (30, 100 or 300) melting open 4%, 8% or 16% of the interior walls.
    --show-route         Overlay the shortest route between the start and end cells, after normalizing any melted walls.
    --start-x=<x>        x coordinate of the route start [default: 1].
    --start-y=<y>        y coordinate of the route start [default: 1].
    --end-x=<e1>         x coordinate of the route end. Defaults to the south east room cell.
    --end-y=<e2>         y coordinate of the route end. Defaults to the south east room cell.
    --text-out=<path>    Output file path for the textual rendering of the maze.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    cmd_dfs: bool,
    cmd_prim: bool,
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_seed: u64,
    flag_temperature: Option<i32>,
    flag_show_route: bool,
    flag_start_x: u32,
    flag_start_y: u32,
    flag_end_x: Option<u32>,
    flag_end_y: Option<u32>,
    flag_text_out: String,
}

// We'll put our errors in an `errors` module, and other modules in
// this crate will `use errors::*;` to get access to everything
// `error_chain!` creates.
mod errors {
    // Create the Error, ErrorKind, ResultExt, and Result types
    // Result is a typedef of std `Result` with the error type our own `Error`
    // Defines the From conversions that let try! and ? work for our `Error`.
    // ResultExt adds the `chain_err` trait method.
    use error_chain::*;
    error_chain! {

        links {
            Maze(::meltmaze::errors::Error, ::meltmaze::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let method = if args.cmd_prim { "prim" } else { "dfs" };
    let mut builder = MazeBuilder::new(args.flag_seed);
    let mut maze = builder.build(
        method,
        Width(args.flag_grid_width),
        Height(args.flag_grid_height),
    )?;

    if let Some(celsius) = args.flag_temperature {
        builder.apply_temperature(&mut maze, celsius);
    }

    let rendering = if args.flag_show_route {
        // Melted walls count as floor for the route.
        maze.normalize_opened_walls();

        let (start, end) = route_end_points(&args, &maze);
        let route = pathing::find_route(&maze, start, end);
        if route.is_empty() && start != end {
            warn!("no route exists between {:?} and {:?}", start, end);
        }

        format!("{}", RouteOverlay::new(&maze, &route))
    } else {
        format!("{}", maze)
    };

    if args.flag_text_out.is_empty() {
        println!("{}", rendering);
    } else {
        write_text_to_file(&rendering, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    Ok(())
}

/// The route start comes from the arguments; the end falls back to the room
/// cell just inside the south east corner when not fully specified.
fn route_end_points(
    maze_args: &MazeArgs,
    maze: &MazeGrid,
) -> (Cartesian2DCoordinate, Cartesian2DCoordinate) {
    let start = Cartesian2DCoordinate::new(maze_args.flag_start_x, maze_args.flag_start_y);

    let default_end_x = maze.width().0 as u32 - 2;
    let default_end_y = maze.height().0 as u32 - 2;
    let end = Cartesian2DCoordinate::new(
        maze_args.flag_end_x.unwrap_or(default_end_x),
        maze_args.flag_end_y.unwrap_or(default_end_y),
    );

    (start, end)
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
