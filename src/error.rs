// src/error.rs

//! Error taxonomy for grid operations.
//!
//! Callers need to distinguish a bad coordinate (user error, grid state is
//! untouched) from a host-side surface failure (retry by activating again),
//! so these are typed variants rather than opaque `anyhow` errors.

use thiserror::Error;

/// Errors surfaced by the grid core and the overlay controller.
///
/// Every operation is all-or-nothing: when one of these is returned, the
/// bounding rectangle and any live surface are exactly as they were before
/// the call, except where documented (a failed activation resets the
/// rectangle so the next activation starts cleanly from the screen rect).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A symbol outside the 36-symbol row/column alphabet.
    #[error("symbol '{0}' is not part of the grid alphabet")]
    UnknownSymbol(char),

    /// A coordinate string that is not exactly two symbols.
    #[error("coordinate {0:?} must be exactly two alphabet symbols")]
    MalformedCoordinate(String),

    /// A geometry operation was requested while no bounding rectangle is
    /// active. The controller prevents this by activating first; the variant
    /// keeps the library surface total for direct users of the core.
    #[error("no bounding rectangle is active; activate the grid first")]
    Inactive,

    /// The host could not provide or commit an overlay surface.
    #[error("overlay surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// A textual command the command table does not know.
    #[error("unrecognized grid command {0:?}")]
    UnknownCommand(String),
}
