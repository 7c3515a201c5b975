use std::fmt;

use itertools::Itertools;
use smallvec::SmallVec;

use crate::cells::{Cartesian2DCoordinate, CellCode};
use crate::units::{ColumnIndex, Height, RowIndex, Width};

const WALL_GLYPH: char = '█';
const PATH_GLYPH: char = ' ';
const OPENED_GLYPH: char = '▒';

/// A `height × width` lattice of cell codes, stored row major.
///
/// Freshly allocated grids are solid `Wall`; the generators carve `Path`
/// corridors into them and the opening pass later melts some walls into
/// `OpenedWall` cells. Reads are by coordinate, mutation is limited to
/// carving, the opening pass and opened wall normalization.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MazeGrid {
    width: Width,
    height: Height,
    cells: Vec<CellCode>,
}

impl MazeGrid {
    pub fn new(width: Width, height: Height) -> MazeGrid {
        MazeGrid {
            width,
            height,
            cells: vec![CellCode::default(); width.0 * height.0],
        }
    }

    #[inline(always)]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> Height {
        self.height
    }

    /// Total cell count of the grid.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        (coord.x as usize) < self.width.0 && (coord.y as usize) < self.height.0
    }

    /// True when the coordinate is inside the grid and not on the outer
    /// border. Only these cells may ever be carved or melted.
    pub fn is_strictly_interior(&self, coord: Cartesian2DCoordinate) -> bool {
        let (x, y) = (coord.x as usize, coord.y as usize);
        x > 0 && y > 0 && x + 1 < self.width.0 && y + 1 < self.height.0
    }

    pub fn cell(&self, coord: Cartesian2DCoordinate) -> Option<CellCode> {
        self.cell_index(coord).map(|index| self.cells[index])
    }

    /// Read access by (row, column) rather than coordinate.
    pub fn cell_at(&self, row: RowIndex, col: ColumnIndex) -> Option<CellCode> {
        let (RowIndex(y), ColumnIndex(x)) = (row, col);
        self.cell(Cartesian2DCoordinate::new(x as u32, y as u32))
    }

    pub(crate) fn set(&mut self, coord: Cartesian2DCoordinate, code: CellCode) {
        let index = self
            .cell_index(coord)
            .expect("cell write outside the grid dimensions");
        self.cells[index] = code;
    }

    /// The in-bounds 4-connected neighbours of a coordinate, in the fixed
    /// south, north, east, west order.
    pub fn neighbours(&self, coord: Cartesian2DCoordinate) -> SmallVec<[Cartesian2DCoordinate; 4]> {
        const STEPS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

        STEPS
            .iter()
            .filter_map(|&(dx, dy)| coord.offset(dx, dy))
            .filter(|&neighbour| self.is_valid_coordinate(neighbour))
            .collect()
    }

    /// Every coordinate strictly inside the border, row by row.
    pub fn interior_coordinates(&self) -> impl Iterator<Item = Cartesian2DCoordinate> {
        let (Width(width), Height(height)) = (self.width, self.height);

        (1..height.saturating_sub(1))
            .cartesian_product(1..width.saturating_sub(1))
            .map(|(y, x)| Cartesian2DCoordinate::new(x as u32, y as u32))
    }

    /// Convert every `OpenedWall` to a plain `Path` so that opened walls
    /// become traversable by the path finder. Returns how many changed.
    pub fn normalize_opened_walls(&mut self) -> usize {
        let mut converted = 0;
        for cell in &mut self.cells {
            if let CellCode::OpenedWall(_) = *cell {
                *cell = CellCode::Path;
                converted += 1;
            }
        }
        converted
    }

    #[inline]
    fn cell_index(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.y as usize * self.width.0 + coord.x as usize)
        } else {
            None
        }
    }
}

pub(crate) fn glyph(code: CellCode) -> char {
    match code {
        CellCode::Wall => WALL_GLYPH,
        CellCode::Path => PATH_GLYPH,
        CellCode::OpenedWall(_) => OPENED_GLYPH,
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut output = String::with_capacity((self.width.0 + 1) * self.height.0);

        for y in 0..self.height.0 {
            for x in 0..self.width.0 {
                let code = self
                    .cell(Cartesian2DCoordinate::new(x as u32, y as u32))
                    .expect("render coordinate within the grid dimensions");
                output.push(glyph(code));
            }
            output.push('\n');
        }

        f.write_str(&output)
    }
}
