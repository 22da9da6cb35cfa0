//! # toy-robot
//!
//! A toy robot simulator: a single robot on a small square table, driven by
//! textual commands (`PLACE X,Y,F`, `MOVE`, `LEFT`, `RIGHT`, `REPORT`).
//!
//! The core is [`CommandInterpreter`], which takes one normalized command line
//! and returns the text to show the operator. [`console::run`] wraps it in a
//! read loop for interactive or piped use.

pub mod command;
pub mod console;
pub mod error;
pub mod interpreter;
pub mod robot;
pub mod table;

pub use command::*;
pub use error::*;
pub use interpreter::*;
pub use robot::*;
pub use table::*;
