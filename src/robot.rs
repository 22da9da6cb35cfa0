//! Robot state and headings.

use crate::table::Position;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four compass directions the robot can face.
///
/// Clockwise order is `North -> East -> South -> West -> North`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All headings in clockwise order, starting at north.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Heading after a 90 degree counter-clockwise turn.
    pub fn left(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// Heading after a 90 degree clockwise turn.
    pub fn right(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Unit displacement of a single step in this heading.
    pub fn step(self) -> IVec2 {
        match self {
            Heading::North => IVec2::Y,
            Heading::East => IVec2::X,
            Heading::South => IVec2::NEG_Y,
            Heading::West => IVec2::NEG_X,
        }
    }

    /// Uppercase name used on the command line and in reports.
    pub fn name(self) -> &'static str {
        match self {
            Heading::North => "NORTH",
            Heading::East => "EAST",
            Heading::South => "SOUTH",
            Heading::West => "WEST",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a token is not one of the four heading names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownHeading(pub String);

impl FromStr for Heading {
    type Err = UnknownHeading;

    /// Matches the uppercase names exactly; `"north"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Heading::ALL
            .into_iter()
            .find(|h| h.name() == s)
            .ok_or_else(|| UnknownHeading(s.to_owned()))
    }
}

/// The mutable state of the robot.
///
/// `position` and `heading` only mean something once `placed` is true.
/// Turning an unplaced robot is allowed and leaves `heading` as `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotState {
    /// Whether a PLACE command has succeeded yet.
    pub placed: bool,

    /// Current cell. Always on the table while `placed` is true.
    pub position: Position,

    /// Direction the robot is facing, `None` until first placed.
    pub heading: Option<Heading>,
}

impl RobotState {
    /// Puts the robot on `position` facing `heading`, replacing any previous placement.
    pub fn place(&mut self, position: Position, heading: Heading) {
        self.placed = true;
        self.position = position;
        self.heading = Some(heading);
    }

    pub fn turn_left(&mut self) {
        self.heading = self.heading.map(Heading::left);
    }

    pub fn turn_right(&mut self) {
        self.heading = self.heading.map(Heading::right);
    }
}
