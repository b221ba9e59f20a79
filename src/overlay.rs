// src/overlay.rs

//! Overlay controller - the adapter between the grid core and a host.
//!
//! Binds one [`GridAddressSpace`] to one display surface: activation derives
//! the bounding rectangle from the chosen screen when none is set, paints
//! the 36x36 label grid, and enables the host's coordinate commands;
//! selection resolves an address and forwards the point to the host's
//! pointer primitive; zoom and reset mutate the address space and redraw.
//!
//! The controller owns no geometry of its own. It sequences calls into the
//! core and the host, and enforces the surface discipline: close the current
//! surface, if any, before creating the next one.

use log::{debug, info, trace};

use crate::alphabet;
use crate::command::GridCommand;
use crate::config::{AppearanceConfig, Config};
use crate::error::GridError;
use crate::geometry::{Point, Rect};
use crate::grid::{cell_center, GridAddress, GridAddressSpace};
use crate::host::{DrawContext, GridHost, OverlaySurface, Screen, TextAlign};

pub struct OverlayController<'a> {
    host: &'a mut dyn GridHost,
    space: GridAddressSpace,
    surface: Option<Box<dyn OverlaySurface>>,
    screen: Option<Screen>,
    config: Config,
}

impl<'a> OverlayController<'a> {
    pub fn new(host: &'a mut dyn GridHost, config: Config) -> Self {
        OverlayController {
            host,
            space: GridAddressSpace::new(),
            surface: None,
            screen: None,
            config,
        }
    }

    /// The current bounding rectangle, if the grid has been activated.
    pub fn bounds(&self) -> Option<Rect> {
        self.space.rect()
    }

    /// Whether an overlay surface is currently displayed.
    pub fn is_showing(&self) -> bool {
        self.surface.is_some()
    }

    /// Routes a parsed command to the matching operation.
    pub fn dispatch(&mut self, command: GridCommand) -> Result<(), GridError> {
        match command {
            GridCommand::Activate { screen } => self.activate(screen),
            GridCommand::Close => {
                self.deactivate();
                Ok(())
            }
            GridCommand::Select(address) => self.select_address(&address),
            GridCommand::Zoom(address) => self.zoom_address(&address),
            GridCommand::Reset => self.reset(),
        }
    }

    /// Shows the grid on the requested screen (index taken modulo the screen
    /// count) or the configured default, and enables coordinate commands.
    ///
    /// If a bounding rectangle is already set - typically from earlier zooms
    /// - it is kept; otherwise it is derived from the screen's full
    /// rectangle. On surface failure the rectangle is left unset so a later
    /// activation starts cleanly.
    pub fn activate(&mut self, screen_num: Option<usize>) -> Result<(), GridError> {
        let screen = self.pick_screen(screen_num)?;
        self.screen = Some(screen);
        self.rebuild_surface(screen)?;
        self.host.set_commands_enabled(true);
        info!("grid activated on screen {}", screen.index);
        Ok(())
    }

    /// Tears down the surface and disables coordinate commands. The bounding
    /// rectangle survives, so reactivating resumes at the same zoom level.
    pub fn deactivate(&mut self) {
        if let Some(mut surface) = self.surface.take() {
            surface.close();
        }
        self.host.set_commands_enabled(false);
        info!("grid deactivated");
    }

    /// Moves the pointer to the center of the cell named by `coordinate`
    /// (two alphabet symbols, row first).
    pub fn select(&mut self, coordinate: &str) -> Result<(), GridError> {
        let address = GridAddress::parse(coordinate)?;
        self.select_address(&address)
    }

    /// Zooms the grid toward the cell named by `coordinate` and redraws.
    pub fn zoom(&mut self, coordinate: &str) -> Result<(), GridError> {
        let address = GridAddress::parse(coordinate)?;
        self.zoom_address(&address)
    }

    /// Discards the zoomed bounds and redraws from the full screen rectangle.
    pub fn reset(&mut self) -> Result<(), GridError> {
        self.space.reset();
        let screen = self.bound_screen()?;
        self.rebuild_surface(screen)
    }

    fn select_address(&mut self, address: &GridAddress) -> Result<(), GridError> {
        self.ensure_space_active()?;
        let point = self.space.resolve(address)?;
        trace!("{address} resolved to ({:.2}, {:.2})", point.x, point.y);
        self.host.move_pointer(point);
        Ok(())
    }

    fn zoom_address(&mut self, address: &GridAddress) -> Result<(), GridError> {
        self.ensure_space_active()?;
        let rect = self.space.zoom(address, self.config.behavior.zoom_ratio)?;
        debug!("zoomed on {address}, new bounds {rect:?}");
        let screen = self.bound_screen()?;
        self.rebuild_surface(screen)
    }

    /// Screen for an explicit request: `screens[n % count]`, or the
    /// configured default when no index is given.
    fn pick_screen(&mut self, screen_num: Option<usize>) -> Result<Screen, GridError> {
        let screens = self.host.screens();
        if screens.is_empty() {
            return Err(GridError::SurfaceUnavailable(
                "host reported no screens".to_string(),
            ));
        }
        let index = match screen_num {
            Some(n) => n % screens.len(),
            None => self.config.behavior.default_screen % screens.len(),
        };
        Ok(screens[index])
    }

    /// The screen this controller is bound to, binding to the default if no
    /// activation has happened yet.
    fn bound_screen(&mut self) -> Result<Screen, GridError> {
        match self.screen {
            Some(screen) => Ok(screen),
            None => {
                let screen = self.pick_screen(None)?;
                self.screen = Some(screen);
                Ok(screen)
            }
        }
    }

    fn ensure_space_active(&mut self) -> Result<(), GridError> {
        if !self.space.is_active() {
            let screen = self.bound_screen()?;
            self.space.ensure_active(screen.rect);
        }
        Ok(())
    }

    /// Close-then-create surface rotation, followed by a full repaint and
    /// freeze. On any failure the space is reset so the next activation
    /// retries from the screen's full rectangle.
    fn rebuild_surface(&mut self, screen: Screen) -> Result<(), GridError> {
        if let Some(mut surface) = self.surface.take() {
            surface.close();
        }
        let rect = self.space.ensure_active(screen.rect);
        match self.paint_new_surface(screen, rect) {
            Ok(surface) => {
                self.surface = Some(surface);
                Ok(())
            }
            Err(err) => {
                self.space.reset();
                Err(err)
            }
        }
    }

    fn paint_new_surface(
        &mut self,
        screen: Screen,
        rect: Rect,
    ) -> Result<Box<dyn OverlaySurface>, GridError> {
        let mut surface = self.host.create_surface(&screen)?;
        let appearance = &self.config.appearance;
        surface.paint(&mut |ctx| render_grid(ctx, rect, appearance))?;
        surface.freeze()?;
        Ok(surface)
    }
}

impl Drop for OverlayController<'_> {
    fn drop(&mut self) {
        if let Some(mut surface) = self.surface.take() {
            surface.close();
        }
    }
}

/// Paints the full 36x36 label grid: for every (row, column) pair, a
/// translucent highlight behind the two-character label centered in its
/// cell. Labels use the same cell-center arithmetic as coordinate
/// resolution, so a painted label marks exactly where selection lands.
fn render_grid(ctx: &mut dyn DrawContext, rect: Rect, appearance: &AppearanceConfig) {
    let symbols = alphabet::symbols();
    ctx.set_text_align(TextAlign::Center);
    ctx.set_text_size(appearance.text_size);
    for (row, &row_symbol) in symbols.iter().enumerate() {
        for (column, &column_symbol) in symbols.iter().enumerate() {
            let center = cell_center(rect, row, column);
            let label = format!("{row_symbol}{column_symbol}");
            let text_rect = ctx.measure_text(&label);
            let background = Rect::from_center(center, text_rect.width, text_rect.height)
                .inset(-appearance.highlight_inset);
            ctx.fill_rect(background, appearance.highlight_color);
            ctx.draw_text(
                &label,
                Point {
                    x: center.x,
                    y: center.y + text_rect.height / 2.0,
                },
                appearance.label_color,
            );
        }
    }
    trace!("painted {} grid cells", symbols.len() * symbols.len());
}
