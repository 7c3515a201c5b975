use std::collections::VecDeque;
use std::fmt::Debug;

use fnv::{FnvHashMap, FnvHashSet};
use num::traits::{One, Unsigned, Zero};

use crate::cells::{Cartesian2DCoordinate, CellCode};
use crate::grid::MazeGrid;

/// An ordered sequence of coordinates from start to end inclusive, each
/// adjacent pair one unit step apart, no coordinate repeated. An empty route
/// means the end is unreachable - it is a normal result, not an error.
pub type Route = Vec<Cartesian2DCoordinate>;

/// The fixed breadth-first expansion order: south, north, east, west.
/// Any order finds a shortest route; fixing one keeps the winner of ties
/// stable, which reproducible tests rely on.
const EXPANSION_ORDER: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Find a shortest route between two coordinates by breadth-first search
/// over cells coded exactly `Path`.
///
/// Opened walls are not traversed: callers normalize them to `Path` first
/// (`MazeGrid::normalize_opened_walls`) when melted walls should count.
/// When start equals end the route is that single coordinate.
pub fn find_route(
    grid: &MazeGrid,
    start: Cartesian2DCoordinate,
    end: Cartesian2DCoordinate,
) -> Route {
    let mut visited: FnvHashSet<Cartesian2DCoordinate> =
        FnvHashSet::with_capacity_and_hasher(grid.size(), Default::default());
    let mut parents: FnvHashMap<Cartesian2DCoordinate, Cartesian2DCoordinate> =
        FnvHashMap::with_capacity_and_hasher(grid.size(), Default::default());

    let mut queue = VecDeque::new();
    queue.push_back(start);
    visited.insert(start);

    while let Some(current) = queue.pop_front() {
        if current == end {
            break;
        }

        for &(dx, dy) in &EXPANSION_ORDER {
            let next = match current.offset(dx, dy) {
                Some(next) => next,
                None => continue,
            };

            if grid.cell(next) == Some(CellCode::Path) && visited.insert(next) {
                parents.insert(next, current);
                queue.push_back(next);
            }
        }
    }

    // Walk the parent chain back from the end. A missing parent before
    // reaching the start means the end was never expanded into.
    let mut route = vec![end];
    let mut current = end;
    while current != start {
        match parents.get(&current) {
            Some(&parent) => {
                route.push(parent);
                current = parent;
            }
            None => return Route::new(),
        }
    }
    route.reverse();
    route
}

// Trait used purely as a generic parameter alias because it is ugly to type
// the full bound list out each time. Note generic parameter type aliases are
// not in the language; `type X = Y;` only works with concrete types.
pub trait MaxDistance: Zero + One + Unsigned + Debug + Copy + Ord {}
impl<T: Zero + One + Unsigned + Debug + Copy + Ord> MaxDistance for T {}

/// Flood-fill distances from a start coordinate to every `Path` cell
/// reachable from it, by breadth-first search. Cells absent from the map are
/// unreachable.
///
/// This is an independent oracle for route lengths: a shortest route covers
/// `distance + 1` coordinates.
#[derive(Debug, Clone)]
pub struct Distances<MaxDistanceT = u32> {
    start_coordinate: Cartesian2DCoordinate,
    distances: FnvHashMap<Cartesian2DCoordinate, MaxDistanceT>,
    max_distance: MaxDistanceT,
}

impl<MaxDistanceT> Distances<MaxDistanceT>
where
    MaxDistanceT: MaxDistance,
{
    pub fn new(grid: &MazeGrid, start_coordinate: Cartesian2DCoordinate) -> Option<Distances<MaxDistanceT>> {
        if !grid.is_valid_coordinate(start_coordinate) {
            return None;
        }

        let mut distances: FnvHashMap<Cartesian2DCoordinate, MaxDistanceT> =
            FnvHashMap::with_capacity_and_hasher(grid.size(), Default::default());
        distances.insert(start_coordinate, Zero::zero());
        let mut max: MaxDistanceT = Zero::zero();

        // Every step costs one, so the first time a cell is reached its
        // shortest distance is known and never needs revisiting. The
        // distances map doubles as the visited set.
        let mut frontier = vec![start_coordinate];
        while !frontier.is_empty() {
            let mut new_frontier = vec![];

            for &cell_coord in &frontier {
                let distance_to_cell = distances[&cell_coord];
                if distance_to_cell > max {
                    max = distance_to_cell;
                }

                for &neighbour in &*grid.neighbours(cell_coord) {
                    if grid.cell(neighbour) == Some(CellCode::Path)
                        && !distances.contains_key(&neighbour)
                    {
                        distances.insert(neighbour, distance_to_cell + One::one());
                        new_frontier.push(neighbour);
                    }
                }
            }
            frontier = new_frontier;
        }

        Some(Distances {
            start_coordinate,
            distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> Cartesian2DCoordinate {
        self.start_coordinate
    }

    #[inline(always)]
    pub fn max(&self) -> MaxDistanceT {
        self.max_distance
    }

    #[inline(always)]
    pub fn distance_from_start_to(&self, coord: Cartesian2DCoordinate) -> Option<MaxDistanceT> {
        self.distances.get(&coord).cloned()
    }
}
