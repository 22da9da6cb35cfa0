//! Line-oriented front end: reads operator input, feeds the interpreter, prints answers.

use crate::interpreter::CommandInterpreter;
use log::{debug, info};
use std::io::{self, BufRead, Write};

/// Settings for [`run`].
#[derive(Clone, Debug)]
pub struct ConsoleConfig {
    /// Input line that ends the session. Compared after trimming and uppercasing.
    pub quit_sentinel: String,
    /// Printed (after a blank line) before every read. `None` disables prompts
    /// and the closing farewell, which suits piped scripts.
    pub prompt: Option<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            quit_sentinel: "X".to_owned(),
            prompt: Some("Enter a command for Robot ('X' to quit):".to_owned()),
        }
    }
}

impl ConsoleConfig {
    /// Same sentinel, no prompt or farewell.
    pub fn quiet() -> Self {
        Self {
            prompt: None,
            ..Self::default()
        }
    }
}

/// Trims surrounding whitespace and uppercases, as the interpreter expects.
pub fn normalize(line: &str) -> String {
    line.trim().to_uppercase()
}

/// Runs the read loop until the quit sentinel or end of input.
///
/// Every command's result is written followed by a newline, so silent
/// successes show up as blank lines. Only I/O failures are returned as errors.
pub fn run<R: BufRead, W: Write>(
    interpreter: &mut CommandInterpreter,
    mut input: R,
    output: &mut W,
    config: &ConsoleConfig,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        if let Some(prompt) = &config.prompt {
            writeln!(output, "\n{prompt}")?;
            output.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input");
            break;
        }

        let command = normalize(&line);
        if command == config.quit_sentinel {
            break;
        }

        writeln!(output, "{}", interpreter.execute(&command))?;
    }

    info!("session finished, robot state: {:?}", interpreter.state());
    if config.prompt.is_some() {
        writeln!(output, "Exited.")?;
    }
    output.flush()
}
