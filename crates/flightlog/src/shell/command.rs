//! Parsing of interactive command lines.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Static command summary printed by `help`.
pub const HELP: &str = "\
Commands:

add - add a flight;
list - list all flights;
select <period> - list flights in service for at least <period> years;
help - show this help;
load <path> - load flights from a JSON file;
save <path> - save flights to a JSON file;
exit - quit the program.
";

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// End the session.
    Exit,
    /// Prompt for a flight and add it.
    Add,
    /// Show every flight.
    List,
    /// Show flights at least `period` years old.
    Select {
        /// Minimum age in years.
        period: i64,
    },
    /// Write flights to a file.
    Save {
        /// Destination file.
        path: PathBuf,
    },
    /// Replace flights with the contents of a file.
    Load {
        /// Source file.
        path: PathBuf,
    },
    /// Show the command summary.
    Help,
    /// Anything not recognized, kept as typed.
    Unknown(String),
}

impl Command {
    /// Parse one line of input.
    ///
    /// The line is split at the first whitespace into a keyword and an
    /// argument. Only the keyword is case-insensitive; the argument is kept
    /// as typed so file names retain their case. Keywords that take no
    /// argument but are given one parse as [`Command::Unknown`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInteger`] if the `select` period is not an
    /// integer, or [`Error::MissingArgument`] if `select`, `save` or `load`
    /// has no argument.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        let command = match (keyword.to_lowercase().as_str(), rest.is_empty()) {
            ("exit", true) => Self::Exit,
            ("add", true) => Self::Add,
            ("list", true) => Self::List,
            ("help", true) => Self::Help,
            ("select", false) => Self::Select {
                period: parse_integer("period", rest)?,
            },
            ("save", false) => Self::Save {
                path: PathBuf::from(rest),
            },
            ("load", false) => Self::Load {
                path: PathBuf::from(rest),
            },
            ("select", true) => return Err(Error::missing_argument("select", "select <period>")),
            ("save", true) => return Err(Error::missing_argument("save", "save <path>")),
            ("load", true) => return Err(Error::missing_argument("load", "load <path>")),
            _ => Self::Unknown(line.to_string()),
        };
        Ok(command)
    }
}

/// Parse a user-supplied integer, naming `what` in the error.
///
/// # Errors
///
/// Returns [`Error::InvalidInteger`] if `input` is not an integer.
pub fn parse_integer(what: &'static str, input: &str) -> Result<i64> {
    let input = input.trim();
    input
        .parse()
        .map_err(|source| Error::invalid_integer(what, input, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_keywords() {
        assert_eq!(Command::parse("exit").unwrap(), Command::Exit);
        assert_eq!(Command::parse("add").unwrap(), Command::Add);
        assert_eq!(Command::parse("list").unwrap(), Command::List);
        assert_eq!(Command::parse("help").unwrap(), Command::Help);
    }

    #[test]
    fn test_parse_keyword_case_insensitive() {
        assert_eq!(Command::parse("EXIT").unwrap(), Command::Exit);
        assert_eq!(Command::parse("List").unwrap(), Command::List);
    }

    #[test]
    fn test_parse_surrounding_whitespace() {
        assert_eq!(Command::parse("  list \n").unwrap(), Command::List);
    }

    #[test]
    fn test_parse_select() {
        assert_eq!(
            Command::parse("select 5").unwrap(),
            Command::Select { period: 5 }
        );
        assert_eq!(
            Command::parse("SELECT   -2").unwrap(),
            Command::Select { period: -2 }
        );
    }

    #[test]
    fn test_parse_select_invalid_period() {
        let err = Command::parse("select five").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInteger { what: "period", .. }
        ));
    }

    #[test]
    fn test_parse_select_missing_period() {
        let err = Command::parse("select").unwrap_err();
        assert!(matches!(
            err,
            Error::MissingArgument {
                command: "select",
                ..
            }
        ));
    }

    #[test]
    fn test_parse_save_keeps_path_case() {
        assert_eq!(
            Command::parse("SAVE Data/Flights.json").unwrap(),
            Command::Save {
                path: PathBuf::from("Data/Flights.json")
            }
        );
    }

    #[test]
    fn test_parse_load_path_with_spaces() {
        assert_eq!(
            Command::parse("load my flights.json").unwrap(),
            Command::Load {
                path: PathBuf::from("my flights.json")
            }
        );
    }

    #[test]
    fn test_parse_save_load_missing_path() {
        assert!(matches!(
            Command::parse("save").unwrap_err(),
            Error::MissingArgument { command: "save", .. }
        ));
        assert!(matches!(
            Command::parse("load  ").unwrap_err(),
            Error::MissingArgument { command: "load", .. }
        ));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            Command::parse("foo").unwrap(),
            Command::Unknown("foo".to_string())
        );
        assert_eq!(Command::parse("").unwrap(), Command::Unknown(String::new()));
    }

    #[test]
    fn test_parse_argument_on_bare_keyword_is_unknown() {
        assert_eq!(
            Command::parse("list all").unwrap(),
            Command::Unknown("list all".to_string())
        );
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("flight number", " 101 ").unwrap(), 101);
        assert!(parse_integer("flight number", "1o1").is_err());
    }

    #[test]
    fn test_help_lists_every_command() {
        for keyword in ["add", "list", "select", "help", "load", "save", "exit"] {
            assert!(HELP.contains(keyword), "help is missing {keyword}");
        }
    }
}
