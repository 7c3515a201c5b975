use std::fmt;

use fnv::FnvHashSet;

use crate::cells::Cartesian2DCoordinate;
use crate::grid::{self, MazeGrid};

const ROUTE_GLYPH: char = '•';

/// Renders a grid with the cells of a found route marked on top of the
/// usual wall/path glyphs.
pub struct RouteOverlay<'a> {
    grid: &'a MazeGrid,
    on_route_coordinates: FnvHashSet<Cartesian2DCoordinate>,
}

impl<'a> RouteOverlay<'a> {
    pub fn new(grid: &'a MazeGrid, route: &[Cartesian2DCoordinate]) -> RouteOverlay<'a> {
        RouteOverlay {
            grid,
            on_route_coordinates: route.iter().cloned().collect(),
        }
    }
}

impl<'a> fmt::Display for RouteOverlay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (width, height) = (self.grid.width().0, self.grid.height().0);
        let mut output = String::with_capacity((width + 1) * height);

        for y in 0..height {
            for x in 0..width {
                let coord = Cartesian2DCoordinate::new(x as u32, y as u32);
                if self.on_route_coordinates.contains(&coord) {
                    output.push(ROUTE_GLYPH);
                } else {
                    let code = self
                        .grid
                        .cell(coord)
                        .expect("render coordinate within the grid dimensions");
                    output.push(grid::glyph(code));
                }
            }
            output.push('\n');
        }

        f.write_str(&output)
    }
}
