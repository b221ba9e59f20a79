// src/command.rs

//! The grid command table.
//!
//! An explicit mapping from command names to controller operations, in place
//! of symbolic action registration against a host. The voice/grammar layer
//! is expected to concatenate two recognized symbol tokens into the
//! two-character coordinate itself; this table only validates and routes.

use crate::error::GridError;
use crate::grid::GridAddress;

/// A parsed grid command, ready for `OverlayController::dispatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCommand {
    /// Show the grid, optionally on a specific screen (index wraps modulo
    /// the screen count).
    Activate { screen: Option<usize> },
    /// Hide the grid and disable coordinate commands.
    Close,
    /// Move the pointer to a cell center.
    Select(GridAddress),
    /// Shrink the grid around a cell and redraw.
    Zoom(GridAddress),
    /// Restore the full-screen bounds and redraw.
    Reset,
}

impl GridCommand {
    /// Parses a textual command line:
    ///
    /// ```text
    /// activate [n] | close | select <rowcol> | zoom <rowcol> | reset
    /// ```
    pub fn parse(line: &str) -> Result<Self, GridError> {
        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or("");
        let arg = parts.next();
        if parts.next().is_some() {
            return Err(GridError::UnknownCommand(line.trim().to_string()));
        }
        match (name, arg) {
            ("activate", None) => Ok(GridCommand::Activate { screen: None }),
            ("activate", Some(n)) => {
                let screen = n
                    .parse()
                    .map_err(|_| GridError::UnknownCommand(line.trim().to_string()))?;
                Ok(GridCommand::Activate {
                    screen: Some(screen),
                })
            }
            ("close", None) => Ok(GridCommand::Close),
            ("select", Some(coordinate)) => Ok(GridCommand::Select(GridAddress::parse(coordinate)?)),
            ("zoom", Some(coordinate)) => Ok(GridCommand::Zoom(GridAddress::parse(coordinate)?)),
            ("reset", None) => Ok(GridCommand::Reset),
            _ => Err(GridError::UnknownCommand(line.trim().to_string())),
        }
    }
}
