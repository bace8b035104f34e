//! Line commands read from stdin
//!
//! Each line is one event: a toggle click, a pointer sample, or a control
//! command. Coordinates are accepted as `X Y` or `X,Y`.

use bitcube_core::PointerPos;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Binary/BCD toggle click
    ToggleDisplay,
    /// 12/24 toggle click
    ToggleHour,
    Press(PointerPos),
    Move(PointerPos),
    Release,
    Leave,
    Redraw,
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'{0}' expects coordinates X,Y")]
    MissingCoordinates(&'static str),
    #[error("invalid coordinate '{0}'")]
    InvalidCoordinate(String),
}

/// Parse coordinate parts "X Y" / "X,Y" into a pointer position
fn parse_coordinates(name: &'static str, args: &[&str]) -> Result<PointerPos, CommandError> {
    let parts: Vec<&str> = args
        .iter()
        .flat_map(|arg| arg.split(','))
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    if parts.len() != 2 {
        return Err(CommandError::MissingCoordinates(name));
    }
    let parse = |s: &str| {
        s.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| CommandError::InvalidCoordinate(s.to_string()))
    };
    Ok(PointerPos::new(parse(parts[0])?, parse(parts[1])?))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;
        let args: Vec<&str> = words.collect();

        match name.to_ascii_lowercase().as_str() {
            "b" | "bcd" => Ok(Command::ToggleDisplay),
            "h" | "hour" => Ok(Command::ToggleHour),
            "press" | "down" => parse_coordinates("press", &args).map(Command::Press),
            "move" => parse_coordinates("move", &args).map(Command::Move),
            "release" | "up" => Ok(Command::Release),
            "leave" => Ok(Command::Leave),
            "r" | "redraw" => Ok(Command::Redraw),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_commands() {
        assert_eq!("b".parse(), Ok(Command::ToggleDisplay));
        assert_eq!("  BCD ".parse(), Ok(Command::ToggleDisplay));
        assert_eq!("hour".parse(), Ok(Command::ToggleHour));
        assert_eq!("q".parse(), Ok(Command::Quit));
    }

    #[test]
    fn test_pointer_commands() {
        assert_eq!(
            "press 10 20".parse(),
            Ok(Command::Press(PointerPos::new(10.0, 20.0)))
        );
        assert_eq!(
            "move 1.5,-3".parse(),
            Ok(Command::Move(PointerPos::new(1.5, -3.0)))
        );
        assert_eq!(
            "move 4, 5".parse(),
            Ok(Command::Move(PointerPos::new(4.0, 5.0)))
        );
        assert_eq!("leave".parse(), Ok(Command::Leave));
        assert_eq!("release".parse(), Ok(Command::Release));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "spin".parse::<Command>(),
            Err(CommandError::Unknown("spin".to_string()))
        );
        assert_eq!(
            "press 10".parse::<Command>(),
            Err(CommandError::MissingCoordinates("press"))
        );
        assert_eq!(
            "move x 2".parse::<Command>(),
            Err(CommandError::InvalidCoordinate("x".to_string()))
        );
        assert_eq!(
            "move NaN 2".parse::<Command>(),
            Err(CommandError::InvalidCoordinate("NaN".to_string()))
        );
    }
}
