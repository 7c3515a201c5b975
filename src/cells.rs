use std::convert::From;

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}

impl Cartesian2DCoordinate {
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }

    /// A new `Cartesian2DCoordinate` offset (dx, dy) cells away.
    /// Returns None if the offset coordinate is not representable.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Cartesian2DCoordinate> {
        let x = i64::from(self.x) + i64::from(dx);
        let y = i64::from(self.y) + i64::from(dy);

        if x < 0 || y < 0 {
            None
        } else {
            Some(Cartesian2DCoordinate::new(x as u32, y as u32))
        }
    }
}

impl From<(u32, u32)> for Cartesian2DCoordinate {
    fn from(x_y_pair: (u32, u32)) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

/// How hot the maze is run at, which controls what fraction of the interior
/// walls the opening pass melts through.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Temperature {
    Low,
    Medium,
    High,
}

impl Temperature {
    /// The level matching a temperature in °C. Anything other than the three
    /// supported values is unrecognised and maps to None.
    pub fn from_celsius(celsius: i32) -> Option<Temperature> {
        match celsius {
            30 => Some(Temperature::Low),
            100 => Some(Temperature::Medium),
            300 => Some(Temperature::High),
            _ => None,
        }
    }

    pub fn celsius(self) -> i32 {
        match self {
            Temperature::Low => 30,
            Temperature::Medium => 100,
            Temperature::High => 300,
        }
    }

    /// Fraction of the interior wall cells that this level opens.
    pub fn open_ratio(self) -> f64 {
        match self {
            Temperature::Low => 0.04,
            Temperature::Medium => 0.08,
            Temperature::High => 0.16,
        }
    }
}

/// The state of one grid cell.
/// An `OpenedWall` stays distinct from a carved `Path` until a caller
/// normalizes it for traversal - see `MazeGrid::normalize_opened_walls`.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CellCode {
    Wall,
    Path,
    OpenedWall(Temperature),
}

impl Default for CellCode {
    fn default() -> CellCode {
        CellCode::Wall
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn supported_temperatures() {
        assert_eq!(Temperature::from_celsius(30), Some(Temperature::Low));
        assert_eq!(Temperature::from_celsius(100), Some(Temperature::Medium));
        assert_eq!(Temperature::from_celsius(300), Some(Temperature::High));
    }

    #[test]
    fn unsupported_temperatures() {
        assert_eq!(Temperature::from_celsius(0), None);
        assert_eq!(Temperature::from_celsius(-30), None);
        assert_eq!(Temperature::from_celsius(999), None);
    }

    #[test]
    fn celsius_tags_round_trip() {
        for &level in &[Temperature::Low, Temperature::Medium, Temperature::High] {
            assert_eq!(Temperature::from_celsius(level.celsius()), Some(level));
        }
    }

    #[test]
    fn open_ratios_grow_with_the_temperature() {
        assert!(Temperature::Low.open_ratio() < Temperature::Medium.open_ratio());
        assert!(Temperature::Medium.open_ratio() < Temperature::High.open_ratio());
    }

    #[test]
    fn offset_coordinates() {
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);
        assert_eq!(gc(1, 1).offset(2, 0), Some(gc(3, 1)));
        assert_eq!(gc(1, 1).offset(0, -2), None);
        assert_eq!(gc(1, 1).offset(-1, -1), Some(gc(0, 0)));
    }

    #[test]
    fn cells_default_to_walls() {
        assert_eq!(CellCode::default(), CellCode::Wall);
    }
}
