//! Errors reported back to the operator instead of a command's output.

use crate::table::{TABLE_SIZE_X, TABLE_SIZE_Y};
use thiserror::Error;

/// Why a command was ignored.
///
/// The `Display` text of each variant is what the operator sees, and is kept
/// byte-for-byte compatible with existing transcripts (including the typo in
/// [`CommandError::PlaceNonNumericCoordinate`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Command ignored: robot not placed yet")]
    NotPlacedYet,

    #[error(
        "Command ignored: out of bounds, maximum table size is {x}x{y}, where X,Y > -1)",
        x = TABLE_SIZE_X,
        y = TABLE_SIZE_Y
    )]
    OutOfBounds,

    #[error(
        "Command ignored: this command is not valid. Valid commands are:\nPLACE X,Y,F\nMOVE\nLEFT\nRIGHT\nREPORT"
    )]
    UnrecognizedCommand,

    #[error(
        "Command ignored: valid PLACE command can only accept 3 parameters: PLACE X,Y,DIRECTION"
    )]
    PlaceWrongArgumentCount,

    #[error("Command ignored: first 2 arameters for 'PLACE' command must be numbers")]
    PlaceNonNumericCoordinate,

    #[error(
        "Command ignored: DIRECTION parameter for 'PLACE' command is not valid. Valid values are: NORTH, SOUTH, EAST, WEST"
    )]
    PlaceInvalidHeading,

    /// Something that should be impossible happened while running a command.
    #[error("Command failed: {0}")]
    InternalFault(String),
}
