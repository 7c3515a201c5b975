use fnv::FnvHashSet;
use log::{info, warn};
use rand::{Rng, XorShiftRng};

use crate::cells::{Cartesian2DCoordinate, CellCode, Temperature};
use crate::grid::MazeGrid;

/// Melt open a temperature-dependent fraction of the maze's interior walls,
/// tagging each opened cell with the level it was melted at.
///
/// Candidates are every interior cell still coded `Wall` - corridor
/// separators and untouched rock alike. `floor(candidates × ratio)` distinct
/// cells are drawn uniformly without replacement and become
/// `OpenedWall(level)`. Returns the number of cells opened.
///
/// An unrecognised `celsius` value is not an error: the grid is left
/// untouched, a warning is logged and 0 comes back.
pub fn apply_temperature(grid: &mut MazeGrid, celsius: i32, rng: &mut XorShiftRng) -> usize {
    let level = match Temperature::from_celsius(celsius) {
        Some(level) => level,
        None => {
            warn!("unsupported temperature {}°C: maze left unchanged", celsius);
            return 0;
        }
    };

    let candidates: Vec<Cartesian2DCoordinate> = grid
        .interior_coordinates()
        .filter(|&coord| grid.cell(coord) == Some(CellCode::Wall))
        .collect();
    let num_to_open = (candidates.len() as f64 * level.open_ratio()) as usize;

    // Without-replacement draw by rejecting repeated indices. The ratios top
    // out at 16% of the candidate set, so rejections stay rare.
    let mut chosen =
        FnvHashSet::with_capacity_and_hasher(num_to_open, Default::default());
    while chosen.len() < num_to_open {
        let index = rng.gen_range(0, candidates.len());
        if chosen.insert(index) {
            grid.set(candidates[index], CellCode::OpenedWall(level));
        }
    }

    info!(
        "temperature {}°C opened {} of {} interior walls",
        celsius,
        num_to_open,
        candidates.len()
    );
    num_to_open
}
