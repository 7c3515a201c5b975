#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Width(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Height(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowIndex(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnIndex(pub usize);

impl Width {
    /// The largest odd width no bigger than this one, raised to the minimum
    /// carvable lattice extent when too small.
    pub fn clamped_odd(self) -> Width {
        Width(clamp_odd(self.0))
    }
}

impl Height {
    /// The largest odd height no bigger than this one, raised to the minimum
    /// carvable lattice extent when too small.
    pub fn clamped_odd(self) -> Height {
        Height(clamp_odd(self.0))
    }
}

// Room cells live at odd indices, so an even measure loses one cell and
// anything below a 3 cell extent has no interior to carve.
fn clamp_odd(extent: usize) -> usize {
    let odd = if extent % 2 == 0 {
        extent.saturating_sub(1)
    } else {
        extent
    };

    if odd < 3 { 3 } else { odd }
}
