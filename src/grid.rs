// src/grid.rs

//! The grid address space - the geometric core of the crate.
//!
//! A [`GridAddressSpace`] owns the current bounding rectangle and maps
//! symbolic two-character addresses onto points inside it. The rectangle has
//! exactly two states: unset (no activation yet, or after a reset) and
//! active. Zooming replaces an active rectangle with a smaller one centered
//! on the selected cell, clamped so it never leaves the rectangle it was
//! derived from.

use log::{debug, trace};
use std::fmt;
use std::str::FromStr;

use crate::alphabet;
use crate::error::GridError;
use crate::geometry::{Point, Rect};

/// A symbolic cell address: row symbol first, column symbol second.
///
/// Both symbols are members of the shared 36-symbol alphabet. Constructing
/// one through [`GridAddress::new`] or [`GridAddress::parse`] validates both
/// symbols, so a held address is always resolvable against an active grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridAddress {
    pub row: char,
    pub column: char,
}

impl GridAddress {
    /// Builds an address from two alphabet symbols.
    pub fn new(row: char, column: char) -> Result<Self, GridError> {
        for symbol in [row, column] {
            if !alphabet::contains(symbol) {
                return Err(GridError::UnknownSymbol(symbol));
            }
        }
        Ok(GridAddress { row, column })
    }

    /// Parses the two-character `"rowcol"` form delivered by the command
    /// layer, e.g. `"b7"` for row `b`, column `7`.
    pub fn parse(coordinate: &str) -> Result<Self, GridError> {
        let mut chars = coordinate.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(row), Some(column), None) => GridAddress::new(row, column),
            _ => Err(GridError::MalformedCoordinate(coordinate.to_string())),
        }
    }
}

impl fmt::Display for GridAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.column)
    }
}

impl FromStr for GridAddress {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GridAddress::parse(s)
    }
}

/// Owns the bounding rectangle and performs coordinate lookup and zoom
/// refinement against it.
///
/// State machine for the rectangle: unset -> active on [`ensure_active`],
/// active -> active on [`zoom`] (with a strictly smaller rectangle), and
/// active -> unset on [`reset`]. No other transitions exist, and nothing
/// outside this struct mutates the rectangle.
///
/// [`ensure_active`]: GridAddressSpace::ensure_active
/// [`zoom`]: GridAddressSpace::zoom
/// [`reset`]: GridAddressSpace::reset
#[derive(Debug, Default)]
pub struct GridAddressSpace {
    rect: Option<Rect>,
}

impl GridAddressSpace {
    pub fn new() -> Self {
        GridAddressSpace { rect: None }
    }

    /// Whether a bounding rectangle is currently set.
    pub fn is_active(&self) -> bool {
        self.rect.is_some()
    }

    /// The current bounding rectangle, if any.
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    /// Derives the bounding rectangle from `screen_rect` if none is set, and
    /// returns the active rectangle. An already-active rectangle (possibly
    /// zoomed) is kept as-is.
    pub fn ensure_active(&mut self, screen_rect: Rect) -> Rect {
        *self.rect.get_or_insert_with(|| {
            debug!("grid bounds derived from screen rect {screen_rect:?}");
            screen_rect
        })
    }

    /// Resolves `address` to the center of its cell in the current bounding
    /// rectangle.
    ///
    /// Pure: no state changes on any path, including errors.
    pub fn resolve(&self, address: &GridAddress) -> Result<Point, GridError> {
        let rect = self.rect.ok_or(GridError::Inactive)?;
        let row_index = alphabet::index_of(address.row)
            .ok_or(GridError::UnknownSymbol(address.row))?;
        let column_index = alphabet::index_of(address.column)
            .ok_or(GridError::UnknownSymbol(address.column))?;
        Ok(cell_center(rect, row_index, column_index))
    }

    /// Shrinks the bounding rectangle by `ratio` on each axis, centered on
    /// the cell named by `address` and clamped so the new rectangle stays
    /// inside the current one.
    ///
    /// The clamp is relative to the rectangle as it stands before this call,
    /// so successive zooms can walk the window anywhere inside the bounds
    /// established at activation. There is no lower size limit: repeated
    /// zooming converges toward a point, limited only by float precision.
    ///
    /// `ratio` must lie in (0, 1); the configuration layer guarantees this
    /// for controller-driven zooms.
    ///
    /// Returns the new rectangle. On error the rectangle is unchanged.
    pub fn zoom(&mut self, address: &GridAddress, ratio: f64) -> Result<Rect, GridError> {
        debug_assert!(ratio > 0.0 && ratio < 1.0, "zoom ratio must lie in (0, 1)");
        let old = self.rect.ok_or(GridError::Inactive)?;
        let center = self.resolve(address)?;

        let x_min = old.x;
        let x_max = old.x + (1.0 - ratio) * old.width;
        let x = (center.x - 0.5 * ratio * old.width).clamp(x_min, x_max);

        let y_min = old.y;
        let y_max = old.y + (1.0 - ratio) * old.height;
        let y = (center.y - 0.5 * ratio * old.height).clamp(y_min, y_max);

        let rect = Rect {
            x,
            y,
            width: ratio * old.width,
            height: ratio * old.height,
        };
        trace!("zoomed on {address}: {old:?} -> {rect:?}");
        self.rect = Some(rect);
        Ok(rect)
    }

    /// Discards the bounding rectangle. The next [`ensure_active`] derives a
    /// fresh one from the screen's full rectangle.
    ///
    /// [`ensure_active`]: GridAddressSpace::ensure_active
    pub fn reset(&mut self) {
        if self.rect.take().is_some() {
            debug!("grid bounds discarded");
        }
    }
}

/// Center of the cell at (`row_index`, `column_index`) when `rect` is divided
/// into 36 equal columns and 36 equal rows.
///
/// Shared by `resolve` and the overlay renderer so painted labels sit exactly
/// where selection will land.
pub(crate) fn cell_center(rect: Rect, row_index: usize, column_index: usize) -> Point {
    let cells = alphabet::LEN as f64;
    Point {
        x: rect.x + rect.width * (column_index as f64 + 0.5) / cells,
        y: rect.y + rect.height * (row_index as f64 + 0.5) / cells,
    }
}

#[cfg(test)]
mod tests;
