use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Nominal table width, as advertised to the user.
pub const TABLE_SIZE_X: i32 = 5;

/// Nominal table depth, as advertised to the user.
pub const TABLE_SIZE_Y: i32 = 5;

/// A cell on the table. `x` grows to the east, `y` grows to the north.
pub type Position = IVec2;

/// The square table the robot walks on.
///
/// Valid cells run from `(0, 0)` up to and including `(TABLE_SIZE_X, TABLE_SIZE_Y)`.
/// The upper bound is inclusive of the nominal size, so a "5x5" table
/// actually accepts six values per axis. Existing transcripts depend on this,
/// so it is kept as is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Lowest valid coordinate on each axis.
    pub lower: Position,

    /// Highest valid coordinate on each axis (inclusive).
    pub upper: Position,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            lower: IVec2::ZERO,
            upper: IVec2::new(TABLE_SIZE_X, TABLE_SIZE_Y),
        }
    }
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `position` is a cell the robot may occupy.
    pub fn contains(&self, position: Position) -> bool {
        position.cmpge(self.lower).all() && position.cmple(self.upper).all()
    }
}
