//! Interpreter that runs operator commands against a single robot.
//!
//! The entry point is [`CommandInterpreter`]. Feed it one normalized line at a
//! time with [`CommandInterpreter::execute`]; it answers with the text to show
//! the operator. Typed callers can use [`CommandInterpreter::apply`] instead and
//! get a [`Result`] back.

use crate::command::Command;
use crate::error::CommandError;
use crate::robot::{Heading, RobotState};
use crate::table::{Position, Table};
use log::{debug, warn};

/// Owns the robot and the table it stands on.
#[derive(Clone, Debug, Default)]
pub struct CommandInterpreter {
    table: Table,
    robot: RobotState,
}

impl CommandInterpreter {
    /// Creates an interpreter with an unplaced robot on the standard table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current robot state.
    pub fn state(&self) -> &RobotState {
        &self.robot
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Runs one line of operator input and returns the text to print.
    ///
    /// Successful commands return an empty string, except `REPORT` which
    /// returns `X,Y,HEADING`. Rejected commands return the error message.
    /// This never panics, whatever the input.
    pub fn execute(&mut self, text: &str) -> String {
        match text.parse::<Command>().and_then(|cmd| self.apply(cmd)) {
            Ok(output) => output,
            Err(err) => {
                if let CommandError::InternalFault(detail) = &err {
                    warn!("command {text:?} hit an internal fault: {detail}");
                } else {
                    debug!("command {text:?} ignored: {err:?}");
                }
                err.to_string()
            }
        }
    }

    /// Applies an already-parsed command.
    ///
    /// A rejected command leaves the robot exactly as it was.
    pub fn apply(&mut self, command: Command) -> Result<String, CommandError> {
        debug!("applying {command:?}");
        match command {
            Command::Place { position, heading } => {
                self.place(position, heading)?;
                Ok(String::new())
            }
            Command::Move => {
                self.advance()?;
                Ok(String::new())
            }
            Command::Left => {
                self.robot.turn_left();
                Ok(String::new())
            }
            Command::Right => {
                self.robot.turn_right();
                Ok(String::new())
            }
            Command::Report => self.report(),
        }
    }

    fn place(&mut self, position: Position, heading: Heading) -> Result<(), CommandError> {
        if !self.table.contains(position) {
            return Err(CommandError::OutOfBounds);
        }
        self.robot.place(position, heading);
        debug!("placed at {position} facing {heading}");
        Ok(())
    }

    fn advance(&mut self) -> Result<(), CommandError> {
        if !self.robot.placed {
            return Err(CommandError::NotPlacedYet);
        }
        let heading = self.placed_heading()?;

        let step = heading.step();
        let current = self.robot.position;
        let target = current
            .x
            .checked_add(step.x)
            .zip(current.y.checked_add(step.y))
            .map(|(x, y)| Position::new(x, y))
            .ok_or_else(|| {
                CommandError::InternalFault(format!("moving {heading} from {current} overflows"))
            })?;

        if !self.table.contains(target) {
            return Err(CommandError::OutOfBounds);
        }
        self.robot.position = target;
        debug!("moved to {target}");
        Ok(())
    }

    fn report(&self) -> Result<String, CommandError> {
        if !self.robot.placed {
            return Err(CommandError::NotPlacedYet);
        }
        let heading = self.placed_heading()?;
        let Position { x, y } = self.robot.position;
        Ok(format!("{x},{y},{heading}"))
    }

    fn placed_heading(&self) -> Result<Heading, CommandError> {
        self.robot
            .heading
            .ok_or_else(|| CommandError::InternalFault("placed robot has no heading".into()))
    }
}
