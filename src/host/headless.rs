// src/host/headless.rs

//! Headless host implementation.
//!
//! Stands in for a real presentation layer: surfaces count what would have
//! been drawn and log it, pointer warps are logged at info level. Used by
//! the demo binary and handy for downstream integration tests.

use log::{debug, info, trace};

use crate::color::Rgba;
use crate::error::GridError;
use crate::geometry::{Point, Rect};
use crate::host::{DrawContext, GridHost, OverlaySurface, Screen, TextAlign};

pub struct HeadlessHost {
    screens: Vec<Screen>,
    commands_enabled: bool,
}

impl HeadlessHost {
    pub fn new(screen_rects: Vec<Rect>) -> Self {
        let screens = screen_rects
            .into_iter()
            .enumerate()
            .map(|(index, rect)| Screen { index, rect })
            .collect();
        HeadlessHost {
            screens,
            commands_enabled: false,
        }
    }

    pub fn single_screen(rect: Rect) -> Self {
        Self::new(vec![rect])
    }

    pub fn commands_enabled(&self) -> bool {
        self.commands_enabled
    }
}

impl GridHost for HeadlessHost {
    fn screens(&self) -> Vec<Screen> {
        self.screens.clone()
    }

    fn create_surface(&mut self, screen: &Screen) -> Result<Box<dyn OverlaySurface>, GridError> {
        debug!("creating headless overlay surface on screen {}", screen.index);
        Ok(Box::new(HeadlessSurface {
            labels: 0,
            highlights: 0,
            open: true,
        }))
    }

    fn move_pointer(&mut self, point: Point) {
        info!("pointer moved to ({:.1}, {:.1})", point.x, point.y);
    }

    fn set_commands_enabled(&mut self, enabled: bool) {
        self.commands_enabled = enabled;
        debug!("grid commands {}", if enabled { "enabled" } else { "disabled" });
    }
}

struct HeadlessSurface {
    labels: usize,
    highlights: usize,
    open: bool,
}

impl OverlaySurface for HeadlessSurface {
    fn paint(
        &mut self,
        painter: &mut dyn FnMut(&mut dyn DrawContext),
    ) -> Result<(), GridError> {
        let mut ctx = HeadlessDrawContext::default();
        painter(&mut ctx);
        self.labels = ctx.labels;
        self.highlights = ctx.highlights;
        Ok(())
    }

    fn freeze(&mut self) -> Result<(), GridError> {
        debug!(
            "frame frozen: {} labels over {} highlights",
            self.labels, self.highlights
        );
        Ok(())
    }

    fn close(&mut self) {
        if self.open {
            trace!("headless surface closed");
            self.open = false;
        }
    }
}

#[derive(Default)]
struct HeadlessDrawContext {
    text_size: f32,
    labels: usize,
    highlights: usize,
}

impl DrawContext for HeadlessDrawContext {
    fn set_text_align(&mut self, _align: TextAlign) {}

    fn set_text_size(&mut self, size: f32) {
        self.text_size = size;
    }

    fn measure_text(&mut self, text: &str) -> Rect {
        // Fixed-advance metrics; close enough for a surface nobody sees.
        let size = f64::from(if self.text_size > 0.0 { self.text_size } else { 16.0 });
        Rect {
            x: 0.0,
            y: 0.0,
            width: size * 0.6 * text.chars().count() as f64,
            height: size,
        }
    }

    fn fill_rect(&mut self, _rect: Rect, _color: Rgba) {
        self.highlights += 1;
    }

    fn draw_text(&mut self, text: &str, origin: Point, _color: Rgba) {
        trace!("label {text:?} at ({:.1}, {:.1})", origin.x, origin.y);
        self.labels += 1;
    }
}
