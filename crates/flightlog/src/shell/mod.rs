//! Interactive command session.
//!
//! A [`Session`] owns the flight log for its lifetime and drives it from
//! lines read off an input stream. Tables and prompts go to the output
//! stream; unknown commands and recovered errors go to the error stream.
//!
//! # Example
//!
//! ```
//! use flightlog::config::Config;
//! use flightlog::shell::Session;
//!
//! let input = "add\nMoscow\n101\nBoeing\nlist\nexit\n";
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//!
//! let mut session = Session::new(input.as_bytes(), &mut out, &mut err, &Config::default());
//! session.run().unwrap();
//! assert_eq!(session.log().len(), 1);
//! ```

mod command;

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::config::Config;
use crate::display;
use crate::error::{Error, Result};
use crate::persistence;
use crate::query;
use crate::record::Record;
use crate::store::FlightLog;

pub use command::{parse_integer, Command, HELP};

/// Where the session stands after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Waiting for the next command.
    Running,
    /// The session is over.
    Exited,
}

/// An interactive session over arbitrary input and output streams.
#[derive(Debug)]
pub struct Session<R, W, E> {
    input: R,
    out: W,
    err: E,
    log: FlightLog,
    prompt: String,
    empty_message: String,
    strict: bool,
}

impl<R, W, E> Session<R, W, E>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    /// Create a session with an empty flight log.
    #[must_use]
    pub fn new(input: R, out: W, err: E, config: &Config) -> Self {
        Self {
            input,
            out,
            err,
            log: FlightLog::new(),
            prompt: config.session.prompt.clone(),
            empty_message: config.display.empty_message.clone(),
            strict: config.session.strict,
        }
    }

    /// Start from an existing flight log instead of an empty one.
    #[must_use]
    pub fn with_log(mut self, log: FlightLog) -> Self {
        self.log = log;
        self
    }

    /// Override strict mode.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// The flight log as it currently stands.
    #[must_use]
    pub fn log(&self) -> &FlightLog {
        &self.log
    }

    /// Consume the session and return its flight log.
    #[must_use]
    pub fn into_log(self) -> FlightLog {
        self.log
    }

    /// Read and execute commands until `exit` or end of input.
    ///
    /// A failing command is reported on the error stream and the session
    /// carries on, unless strict mode is set.
    ///
    /// # Errors
    ///
    /// In strict mode, returns the first error any command produces. In
    /// either mode, returns an error if the terminal streams fail.
    pub fn run(&mut self) -> Result<()> {
        info!(strict = self.strict, "Session started");
        loop {
            match self.step() {
                Ok(State::Running) => {}
                Ok(State::Exited) => break,
                Err(e) if self.strict || matches!(e, Error::Io(_)) => return Err(e),
                Err(e) => {
                    debug!("Command failed: {e}");
                    writeln!(self.err, "error: {e}")?;
                }
            }
        }
        info!(records = self.log.len(), "Session ended");
        Ok(())
    }

    /// Prompt for, read and execute a single command.
    ///
    /// # Errors
    ///
    /// Returns any error raised while parsing or executing the command.
    pub fn step(&mut self) -> Result<State> {
        let prompt = self.prompt.clone();
        let Some(line) = self.read_line(&prompt)? else {
            debug!("End of input, leaving session");
            return Ok(State::Exited);
        };
        let command = Command::parse(&line)?;
        self.execute(command)
    }

    /// Execute a parsed command.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the command.
    pub fn execute(&mut self, command: Command) -> Result<State> {
        debug!(?command, "Executing command");
        match command {
            Command::Exit => return Ok(State::Exited),
            Command::Add => {
                let record = self.prompt_record()?;
                self.log.add(record);
            }
            Command::List => {
                display::display(&mut self.out, self.log.records(), &self.empty_message)?;
            }
            Command::Select { period } => {
                let selected = query::select_by_age(self.log.records(), period);
                debug!(period, matched = selected.len(), "Selected flights");
                display::display(&mut self.out, selected, &self.empty_message)?;
            }
            Command::Save { path } => {
                persistence::save(&path, self.log.records())?;
            }
            Command::Load { path } => {
                let records = persistence::load(&path)?;
                self.log.replace(records);
            }
            Command::Help => {
                self.out.write_all(HELP.as_bytes())?;
                self.out.flush()?;
            }
            Command::Unknown(line) => {
                writeln!(self.err, "unknown command {line}")?;
            }
        }
        Ok(State::Running)
    }

    /// Ask for the three fields of a new flight.
    fn prompt_record(&mut self) -> Result<Record> {
        let point = self.require_line("Destination? ", "destination")?;
        let number = self.require_line("Flight number? ", "flight number")?;
        let number = parse_integer("flight number", &number)?;
        let kind = self.require_line("Aircraft type? ", "aircraft type")?;
        Ok(Record::new(point, number, kind))
    }

    fn require_line(&mut self, prompt: &str, what: &'static str) -> Result<String> {
        self.read_line(prompt)?.ok_or(Error::UnexpectedEof { what })
    }

    /// Print `prompt` and read one line without its terminator. Returns
    /// `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.out.write_all(prompt.as_bytes())?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
