//! Typed commands with a validated text micro-format.
//!
//! The sandbox accepts scripted commands in a `name(arg1,arg2,...)` text
//! form. Instead of splitting strings into dynamic function dispatch, the
//! text is parsed up front into a [`Command`] with an explicit argument
//! schema per variant; malformed input yields a [`ParseError`] value and
//! never a panic. Rejected commands are logged by the caller, not fatal.
//!
//! ```
//! use corridors::core::Command;
//!
//! assert_eq!(Command::parse("moveRight(3)"), Ok(Command::MoveRight(3)));
//! assert_eq!(Command::parse("initGame()"), Ok(Command::InitGame));
//! assert!(Command::parse("moveRight 3").is_err());
//! ```

use serde::{Deserialize, Serialize};

/// A complete, validated game command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Generate a fresh maze and reset the player.
    InitGame,
    /// Move the player left by the given number of steps.
    MoveLeft(u32),
    /// Move the player right by the given number of steps.
    MoveRight(u32),
    /// Move the player up by the given number of steps.
    MoveUp(u32),
    /// Move the player down by the given number of steps.
    MoveDown(u32),
    /// Clear the session error log.
    ClearErrors,
}

impl Command {
    /// The text-form name of this command.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Command::InitGame => "initGame",
            Command::MoveLeft(_) => "moveLeft",
            Command::MoveRight(_) => "moveRight",
            Command::MoveUp(_) => "moveUp",
            Command::MoveDown(_) => "moveDown",
            Command::ClearErrors => "clearErrors",
        }
    }

    /// Parse a command from its `name(args)` text form.
    ///
    /// Leading/trailing whitespace around the input and around individual
    /// arguments is ignored. Argument counts and types are validated
    /// against the command's schema before a value is returned.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let input = input.trim();

        let open = input.find('(').ok_or(ParseError::MissingParens)?;
        if !input.ends_with(')') {
            return Err(ParseError::MissingParens);
        }

        let name = input[..open].trim();
        if name.is_empty() {
            return Err(ParseError::EmptyName);
        }

        let inner = input[open + 1..input.len() - 1].trim();
        let args: Vec<&str> = if inner.is_empty() {
            Vec::new()
        } else {
            inner.split(',').map(str::trim).collect()
        };

        let expect_arity = |expected: usize| -> Result<(), ParseError> {
            if args.len() == expected {
                Ok(())
            } else {
                Err(ParseError::WrongArity {
                    command: name.to_string(),
                    expected,
                    found: args.len(),
                })
            }
        };

        let distance_arg = || -> Result<u32, ParseError> {
            expect_arity(1)?;
            args[0].parse().map_err(|_| ParseError::BadArgument {
                command: name.to_string(),
                argument: args[0].to_string(),
            })
        };

        match name {
            "initGame" => {
                expect_arity(0)?;
                Ok(Command::InitGame)
            }
            "clearErrors" => {
                expect_arity(0)?;
                Ok(Command::ClearErrors)
            }
            "moveLeft" => Ok(Command::MoveLeft(distance_arg()?)),
            "moveRight" => Ok(Command::MoveRight(distance_arg()?)),
            "moveUp" => Ok(Command::MoveUp(distance_arg()?)),
            "moveDown" => Ok(Command::MoveDown(distance_arg()?)),
            _ => Err(ParseError::UnknownCommand(name.to_string())),
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::InitGame | Command::ClearErrors => write!(f, "{}()", self.name()),
            Command::MoveLeft(d)
            | Command::MoveRight(d)
            | Command::MoveUp(d)
            | Command::MoveDown(d) => write!(f, "{}({d})", self.name()),
        }
    }
}

/// Why a command string was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Input lacks the `name(...)` shape.
    MissingParens,
    /// Parentheses with no command name in front.
    EmptyName,
    /// Name does not match any known command.
    UnknownCommand(String),
    /// An argument failed to parse as a non-negative integer.
    BadArgument { command: String, argument: String },
    /// Wrong number of arguments for the command's schema.
    WrongArity {
        command: String,
        expected: usize,
        found: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MissingParens => {
                write!(f, "expected `name(args)` form with parentheses")
            }
            ParseError::EmptyName => write!(f, "missing command name"),
            ParseError::UnknownCommand(name) => write!(f, "unknown command `{name}`"),
            ParseError::BadArgument { command, argument } => {
                write!(f, "bad argument `{argument}` for `{command}`")
            }
            ParseError::WrongArity {
                command,
                expected,
                found,
            } => write!(
                f,
                "`{command}` takes {expected} argument(s), found {found}"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// A recorded command with a sequence number, for replay and debugging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// The command applied.
    pub command: Command,
    /// Position in the session's command stream (0-based).
    pub sequence: u32,
}

impl CommandRecord {
    /// Create a new command record.
    #[must_use]
    pub const fn new(command: Command, sequence: u32) -> Self {
        Self { command, sequence }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves() {
        assert_eq!(Command::parse("moveLeft(1)"), Ok(Command::MoveLeft(1)));
        assert_eq!(Command::parse("moveRight(3)"), Ok(Command::MoveRight(3)));
        assert_eq!(Command::parse("moveUp(10)"), Ok(Command::MoveUp(10)));
        assert_eq!(Command::parse("moveDown(0)"), Ok(Command::MoveDown(0)));
    }

    #[test]
    fn test_parse_no_arg_commands() {
        assert_eq!(Command::parse("initGame()"), Ok(Command::InitGame));
        assert_eq!(Command::parse("clearErrors()"), Ok(Command::ClearErrors));
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        assert_eq!(Command::parse("  moveUp( 4 )  "), Ok(Command::MoveUp(4)));
        assert_eq!(Command::parse("initGame( )"), Ok(Command::InitGame));
    }

    #[test]
    fn test_parse_missing_parens() {
        assert_eq!(Command::parse("moveRight 3"), Err(ParseError::MissingParens));
        assert_eq!(Command::parse("moveRight(3"), Err(ParseError::MissingParens));
        assert_eq!(Command::parse(""), Err(ParseError::MissingParens));
    }

    #[test]
    fn test_parse_empty_name() {
        assert_eq!(Command::parse("(3)"), Err(ParseError::EmptyName));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            Command::parse("teleport(1)"),
            Err(ParseError::UnknownCommand("teleport".to_string()))
        );
    }

    #[test]
    fn test_parse_bad_argument() {
        assert_eq!(
            Command::parse("moveRight(abc)"),
            Err(ParseError::BadArgument {
                command: "moveRight".to_string(),
                argument: "abc".to_string(),
            })
        );
        // Negative distances are rejected at parse time.
        assert!(Command::parse("moveRight(-1)").is_err());
    }

    #[test]
    fn test_parse_wrong_arity() {
        assert_eq!(
            Command::parse("moveRight(1,2)"),
            Err(ParseError::WrongArity {
                command: "moveRight".to_string(),
                expected: 1,
                found: 2,
            })
        );
        assert_eq!(
            Command::parse("initGame(5)"),
            Err(ParseError::WrongArity {
                command: "initGame".to_string(),
                expected: 0,
                found: 1,
            })
        );
        assert_eq!(
            Command::parse("moveUp()"),
            Err(ParseError::WrongArity {
                command: "moveUp".to_string(),
                expected: 1,
                found: 0,
            })
        );
    }

    #[test]
    fn test_display_round_trip() {
        for command in [
            Command::InitGame,
            Command::MoveLeft(2),
            Command::MoveRight(3),
            Command::MoveUp(4),
            Command::MoveDown(5),
            Command::ClearErrors,
        ] {
            assert_eq!(Command::parse(&command.to_string()), Ok(command));
        }
    }

    #[test]
    fn test_parse_error_display() {
        let err = Command::parse("moveRight(x)").unwrap_err();
        assert_eq!(err.to_string(), "bad argument `x` for `moveRight`");
    }

    #[test]
    fn test_command_serialization() {
        let command = Command::MoveDown(7);
        let json = serde_json::to_string(&command).unwrap();
        let deserialized: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(command, deserialized);
    }

    #[test]
    fn test_command_record() {
        let record = CommandRecord::new(Command::InitGame, 0);
        assert_eq!(record.command, Command::InitGame);
        assert_eq!(record.sequence, 0);
    }
}
