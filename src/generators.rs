use std::str::FromStr;

use rand::{Rng, SeedableRng, XorShiftRng};

use crate::cells::{Cartesian2DCoordinate, CellCode};
use crate::errors::{ErrorKind, Result};
use crate::grid::MazeGrid;
use crate::openings;
use crate::units::{Height, Width};

/// The four 2-step jumps between room cells of the odd lattice. Carving a
/// jump also carves the single-step cell between the two rooms.
const CARVE_STEPS: [(i32, i32); 4] = [(2, 0), (-2, 0), (0, 2), (0, -2)];

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GenerationMethod {
    DepthFirst,
    Prim,
}

impl FromStr for GenerationMethod {
    type Err = crate::errors::Error;

    fn from_str(name: &str) -> Result<GenerationMethod> {
        match name {
            "dfs" => Ok(GenerationMethod::DepthFirst),
            "prim" => Ok(GenerationMethod::Prim),
            other => Err(ErrorKind::UnknownGenerationMethod(other.to_owned()).into()),
        }
    }
}

/// Builds perfect mazes and melts walls open, with all randomness drawn from
/// one owned, explicitly seeded generator: the same seed, method and size
/// always reproduce the same maze bit for bit.
///
/// The builder is single threaded state; callers wanting parallel builds
/// own one builder per thread.
pub struct MazeBuilder {
    rng: XorShiftRng,
}

impl MazeBuilder {
    pub fn new(seed: u64) -> MazeBuilder {
        // The generator's own unseeded constants, with the caller's seed
        // mixed into each word. No seed value can zero all four words,
        // which the xorshift state must never be.
        const SEED_WORDS: [u32; 4] = [0x193a6754, 0xa8a7d469, 0x97830e05, 0x113ba7bb];

        let lo = seed as u32;
        let hi = (seed >> 32) as u32;
        let words = [
            SEED_WORDS[0] ^ lo,
            SEED_WORDS[1] ^ hi,
            SEED_WORDS[2] ^ lo.rotate_left(16),
            SEED_WORDS[3] ^ hi.rotate_left(16),
        ];

        MazeBuilder { rng: XorShiftRng::from_seed(words) }
    }

    /// Build a maze with the method named by `method` ("dfs" or "prim").
    /// Anything else fails with `UnknownGenerationMethod` and no grid.
    pub fn build(&mut self, method: &str, width: Width, height: Height) -> Result<MazeGrid> {
        let method = method.parse::<GenerationMethod>()?;
        Ok(self.build_with(method, width, height))
    }

    /// Build a maze from an already resolved method. Even measures lose a
    /// cell so both extents are odd and the lattice is carvable.
    pub fn build_with(
        &mut self,
        method: GenerationMethod,
        width: Width,
        height: Height,
    ) -> MazeGrid {
        let mut grid = MazeGrid::new(width.clamped_odd(), height.clamped_odd());

        match method {
            GenerationMethod::DepthFirst => depth_first(&mut grid, &mut self.rng),
            GenerationMethod::Prim => prim(&mut grid, &mut self.rng),
        }

        grid
    }

    /// Run the wall opening pass with this builder's random source, as one
    /// session's build and open calls share a single seeded generator.
    pub fn apply_temperature(&mut self, grid: &mut MazeGrid, celsius: i32) -> usize {
        openings::apply_temperature(grid, celsius, &mut self.rng)
    }
}

// One suspended carve position: the directions still to try from this cell,
// shuffled once when the cell was first reached.
struct CarveFrame {
    cell: Cartesian2DCoordinate,
    directions: [(i32, i32); 4],
    cursor: usize,
}

impl CarveFrame {
    fn enter(cell: Cartesian2DCoordinate, rng: &mut XorShiftRng) -> CarveFrame {
        let mut directions = CARVE_STEPS;
        rng.shuffle(&mut directions);
        CarveFrame { cell, directions, cursor: 0 }
    }

    fn next_direction(&mut self) -> Option<(i32, i32)> {
        let direction = self.directions.get(self.cursor).cloned();
        self.cursor += 1;
        direction
    }
}

/// Apply the randomized depth-first carving algorithm to a solid-wall grid.
/// From a random room cell it repeatedly tries the 2-step directions in a
/// freshly shuffled order, carving any still-walled target (plus the cell
/// between) and descending into it, backtracking when every direction is
/// spent. The long, twisty corridors come from always extending the most
/// recent cell first.
///
/// The carve stack is an explicit `Vec` of frames rather than call
/// recursion: a w×h maze suspends up to w·h/4 positions, which would be
/// real stack frames on large grids.
pub fn depth_first(grid: &mut MazeGrid, rng: &mut XorShiftRng) {
    let start = random_room_cell(grid, rng);
    grid.set(start, CellCode::Path);

    let mut stack = vec![CarveFrame::enter(start, rng)];

    loop {
        let step = match stack.last_mut() {
            Some(frame) => (frame.cell, frame.next_direction()),
            None => break,
        };

        match step {
            (_, None) => {
                stack.pop();
            }
            (cell, Some((dx, dy))) => {
                if let Some(target) = carvable_target(grid, cell, dx, dy) {
                    let between = cell
                        .offset(dx / 2, dy / 2)
                        .expect("midpoint of an in-grid jump is in the grid");

                    grid.set(target, CellCode::Path);
                    grid.set(between, CellCode::Path);
                    stack.push(CarveFrame::enter(target, rng));
                }
            }
        }
    }
}

/// Apply the randomized Prim growth algorithm to a solid-wall grid.
/// A frontier of (wall cell, room it was seen from) pairs grows outward
/// from a random room cell; each round removes a uniformly random entry and,
/// when its target is still walled, carves it plus the connecting cell and
/// extends the frontier from there. Picking uniformly over the whole
/// frontier gives shorter, bushier branches than the depth-first carve,
/// though both produce perfect mazes.
pub fn prim(grid: &mut MazeGrid, rng: &mut XorShiftRng) {
    let start = random_room_cell(grid, rng);
    grid.set(start, CellCode::Path);

    let mut frontier: Vec<(Cartesian2DCoordinate, Cartesian2DCoordinate)> = Vec::new();
    extend_frontier(grid, start, &mut frontier);

    while !frontier.is_empty() {
        let index = rng.gen_range(0, frontier.len());
        let (target, grown_from) = frontier.swap_remove(index);

        if grid.cell(target) == Some(CellCode::Wall) {
            let between = midpoint(grown_from, target);

            grid.set(target, CellCode::Path);
            grid.set(between, CellCode::Path);
            extend_frontier(grid, target, &mut frontier);
        }
    }
}

fn extend_frontier(
    grid: &MazeGrid,
    from: Cartesian2DCoordinate,
    frontier: &mut Vec<(Cartesian2DCoordinate, Cartesian2DCoordinate)>,
) {
    for &(dx, dy) in &CARVE_STEPS {
        if let Some(target) = carvable_target(grid, from, dx, dy) {
            frontier.push((target, from));
        }
    }
}

// A 2-step jump target that is strictly inside the border and still walled,
// if there is one in that direction.
fn carvable_target(
    grid: &MazeGrid,
    from: Cartesian2DCoordinate,
    dx: i32,
    dy: i32,
) -> Option<Cartesian2DCoordinate> {
    from.offset(dx, dy)
        .filter(|&target| grid.is_strictly_interior(target))
        .filter(|&target| grid.cell(target) == Some(CellCode::Wall))
}

fn midpoint(a: Cartesian2DCoordinate, b: Cartesian2DCoordinate) -> Cartesian2DCoordinate {
    Cartesian2DCoordinate::new((a.x + b.x) / 2, (a.y + b.y) / 2)
}

fn random_room_cell(grid: &MazeGrid, rng: &mut XorShiftRng) -> Cartesian2DCoordinate {
    let x = random_odd_index(grid.width().0, rng);
    let y = random_odd_index(grid.height().0, rng);
    Cartesian2DCoordinate::new(x as u32, y as u32)
}

// A random odd index in [1, limit), nudging an even draw to its nearest odd
// neighbour that stays in range.
fn random_odd_index(limit: usize, rng: &mut XorShiftRng) -> usize {
    let index = rng.gen_range(1, limit);
    if index % 2 == 0 {
        if index == limit - 1 { index - 1 } else { index + 1 }
    } else {
        index
    }
}

#[cfg(test)]
mod tests {

    use quickcheck::{quickcheck, TestResult};

    use super::*;
    use crate::pathing::Distances;

    fn gc(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x, y)
    }

    // Every path cell must be reachable from the (1,1) room cell through
    // path cells only, and the whole border must still be wall.
    fn assert_perfect_lattice(grid: &MazeGrid) {
        let (Width(width), Height(height)) = (grid.width(), grid.height());

        for x in 0..width {
            assert_eq!(grid.cell(gc(x as u32, 0)), Some(CellCode::Wall));
            assert_eq!(grid.cell(gc(x as u32, (height - 1) as u32)), Some(CellCode::Wall));
        }
        for y in 0..height {
            assert_eq!(grid.cell(gc(0, y as u32)), Some(CellCode::Wall));
            assert_eq!(grid.cell(gc((width - 1) as u32, y as u32)), Some(CellCode::Wall));
        }

        let distances =
            Distances::<u32>::new(grid, gc(1, 1)).expect("(1,1) is always a valid coordinate");
        for y in 0..height {
            for x in 0..width {
                let coord = gc(x as u32, y as u32);
                if grid.cell(coord) == Some(CellCode::Path) {
                    assert!(
                        distances.distance_from_start_to(coord).is_some(),
                        "path cell {:?} unreachable from (1,1)",
                        coord
                    );
                }
            }
        }
    }

    #[test]
    fn depth_first_mazes_are_perfect() {
        let mut builder = MazeBuilder::new(42);
        let grid = builder
            .build("dfs", Width(21), Height(15))
            .expect("dfs is a known method");

        assert_eq!(grid.width(), Width(21));
        assert_eq!(grid.height(), Height(15));
        assert_perfect_lattice(&grid);
    }

    #[test]
    fn prim_mazes_are_perfect() {
        let mut builder = MazeBuilder::new(42);
        let grid = builder
            .build("prim", Width(21), Height(15))
            .expect("prim is a known method");

        assert_perfect_lattice(&grid);
    }

    #[test]
    fn even_measures_lose_one_cell() {
        let mut builder = MazeBuilder::new(7);
        let grid = builder
            .build("dfs", Width(10), Height(8))
            .expect("dfs is a known method");

        assert_eq!(grid.width(), Width(9));
        assert_eq!(grid.height(), Height(7));
    }

    #[test]
    fn unknown_methods_are_rejected() {
        let mut builder = MazeBuilder::new(1);
        let err = builder
            .build("zigzag", Width(9), Height(9))
            .expect_err("zigzag is not a method");

        assert_eq!(
            format!("{}", err),
            "unknown maze generation method: 'zigzag'"
        );
    }

    #[test]
    fn method_names_parse() {
        assert_eq!("dfs".parse::<GenerationMethod>().ok(), Some(GenerationMethod::DepthFirst));
        assert_eq!("prim".parse::<GenerationMethod>().ok(), Some(GenerationMethod::Prim));
        assert!("DFS".parse::<GenerationMethod>().is_err());
    }

    #[test]
    fn same_seed_rebuilds_the_same_maze() {
        for method in &["dfs", "prim"] {
            let first = MazeBuilder::new(97)
                .build(method, Width(41), Height(41))
                .expect("known method");
            let second = MazeBuilder::new(97)
                .build(method, Width(41), Height(41))
                .expect("known method");

            assert_eq!(first, second);
        }
    }

    #[test]
    fn different_seeds_differ() {
        let first = MazeBuilder::new(1)
            .build("dfs", Width(41), Height(41))
            .expect("known method");
        let second = MazeBuilder::new(2)
            .build("dfs", Width(41), Height(41))
            .expect("known method");

        assert_ne!(first, second);
    }

    #[test]
    fn a_zero_seed_is_usable() {
        let grid = MazeBuilder::new(0)
            .build("dfs", Width(9), Height(9))
            .expect("known method");
        assert_perfect_lattice(&grid);
    }

    #[test]
    fn quickcheck_lattices_are_perfect_at_any_size() {
        fn property(width: usize, height: usize, use_prim: bool) -> TestResult {
            if width < 3 || height < 3 || width > 31 || height > 31 {
                return TestResult::discard();
            }

            let method = if use_prim {
                GenerationMethod::Prim
            } else {
                GenerationMethod::DepthFirst
            };
            let grid = MazeBuilder::new(11).build_with(method, Width(width), Height(height));

            assert_perfect_lattice(&grid);
            TestResult::passed()
        }

        quickcheck(property as fn(usize, usize, bool) -> TestResult);
    }
}
