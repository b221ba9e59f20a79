// src/lib.rs

//! An on-screen coordinate grid for directing pointer movement by discrete
//! cell selection.
//!
//! The screen (or a previously zoomed region of it) is divided into a 36x36
//! grid whose rows and columns are both labelled with the symbols `a`-`z`
//! then `0`-`9`. A two-character coordinate such as `"b7"` names one cell;
//! [`GridAddressSpace`] maps it to the cell's center point in screen space
//! and can shrink ("zoom") its bounding rectangle around a selected cell for
//! progressively finer selection.
//!
//! The geometry core is pure arithmetic and lives in [`grid`]. Everything
//! that touches a real display is reached through the traits in [`host`],
//! and [`OverlayController`] is the thin adapter that sequences calls
//! between the two.

pub mod alphabet;
pub mod color;
pub mod command;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod host;
pub mod overlay;

pub use command::GridCommand;
pub use config::Config;
pub use error::GridError;
pub use geometry::{Point, Rect};
pub use grid::{GridAddress, GridAddressSpace};
pub use overlay::OverlayController;
