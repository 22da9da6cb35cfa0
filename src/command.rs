//! Parsing of operator text into [`Command`]s.
//!
//! Input is expected to be trimmed and uppercased already (see [`crate::console`]).
//! Anything that does not parse comes back as the [`CommandError`] the operator
//! should see, so the interpreter only ever dispatches well-formed commands.

use crate::error::CommandError;
use crate::robot::Heading;
use crate::table::Position;
use std::str::FromStr;

const PLACE: &str = "PLACE";
const MOVE: &str = "MOVE";
const LEFT: &str = "LEFT";
const RIGHT: &str = "RIGHT";
const REPORT: &str = "REPORT";

/// A single well-formed robot command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Put the robot on the table (`PLACE X,Y,F`). Bounds are checked when executed.
    Place { position: Position, heading: Heading },
    /// Step one cell forward (`MOVE`).
    Move,
    /// Turn 90 degrees counter-clockwise (`LEFT`).
    Left,
    /// Turn 90 degrees clockwise (`RIGHT`).
    Right,
    /// Print position and heading (`REPORT`).
    Report,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.split(' ').next() == Some(PLACE) {
            return parse_place(text);
        }

        match text {
            MOVE => Ok(Command::Move),
            LEFT => Ok(Command::Left),
            RIGHT => Ok(Command::Right),
            REPORT => Ok(Command::Report),
            _ => Err(CommandError::UnrecognizedCommand),
        }
    }
}

/// Parses `PLACE X,Y,F`.
///
/// Every comma and every space is a separator and runs are not collapsed, so
/// `PLACE 1, 2,EAST` yields an empty token and fails the argument count.
/// The heading is only looked at once both coordinates are numbers.
fn parse_place(text: &str) -> Result<Command, CommandError> {
    let tokens: Vec<&str> = text.split([',', ' ']).collect();
    let [_, x, y, heading] = tokens[..] else {
        return Err(CommandError::PlaceWrongArgumentCount);
    };

    let x = parse_coordinate(x);
    let y = parse_coordinate(y);
    let (Some(x), Some(y)) = (x, y) else {
        return Err(CommandError::PlaceNonNumericCoordinate);
    };

    let heading = heading
        .parse::<Heading>()
        .map_err(|_| CommandError::PlaceInvalidHeading)?;

    Ok(Command::Place {
        position: Position::new(x, y),
        heading,
    })
}

fn parse_coordinate(token: &str) -> Option<i32> {
    token.trim().parse().ok()
}
