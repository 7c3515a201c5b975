//! **meltmaze** is a maze generation, wall melting and route finding library.

#![cfg_attr(feature="clippy", feature(plugin))]
#![cfg_attr(feature="clippy", plugin(clippy))]

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod openings;
pub mod pathing;
pub mod units;
