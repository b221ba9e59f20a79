// src/host/mock.rs

use std::cell::RefCell;
use std::rc::Rc;

use crate::color::Rgba;
use crate::error::GridError;
use crate::geometry::{Point, Rect};
use crate::host::{DrawContext, GridHost, OverlaySurface, Screen, TextAlign};

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    FillRect { rect: Rect, color: Rgba },
    Text { label: String, origin: Point, color: Rgba },
}

/// Everything a test wants to assert about host interaction, shared between
/// the mock host, its surfaces, and the test via `Rc<RefCell<..>>` (the whole
/// system is single-threaded by design).
#[derive(Debug, Default)]
pub struct HostLog {
    pub surfaces_created: usize,
    pub surfaces_closed: usize,
    pub frames_frozen: usize,
    pub paint_ops: Vec<PaintOp>,
    pub pointer_moves: Vec<Point>,
    pub commands_enabled: bool,
    pub text_align: Option<TextAlign>,
    pub text_size: f32,
    /// Arm to make the next `create_surface` fail.
    pub fail_next_surface: bool,
}

pub struct MockHost {
    screens: Vec<Screen>,
    log: Rc<RefCell<HostLog>>,
}

impl MockHost {
    pub fn new(screen_rects: &[Rect]) -> (Self, Rc<RefCell<HostLog>>) {
        let screens = screen_rects
            .iter()
            .enumerate()
            .map(|(index, &rect)| Screen { index, rect })
            .collect();
        let log = Rc::new(RefCell::new(HostLog::default()));
        (
            MockHost {
                screens,
                log: Rc::clone(&log),
            },
            log,
        )
    }
}

impl GridHost for MockHost {
    fn screens(&self) -> Vec<Screen> {
        self.screens.clone()
    }

    fn create_surface(&mut self, _screen: &Screen) -> Result<Box<dyn OverlaySurface>, GridError> {
        let mut log = self.log.borrow_mut();
        if log.fail_next_surface {
            log.fail_next_surface = false;
            return Err(GridError::SurfaceUnavailable(
                "mock surface creation refused".to_string(),
            ));
        }
        log.surfaces_created += 1;
        Ok(Box::new(MockSurface {
            log: Rc::clone(&self.log),
            open: true,
        }))
    }

    fn move_pointer(&mut self, point: Point) {
        self.log.borrow_mut().pointer_moves.push(point);
    }

    fn set_commands_enabled(&mut self, enabled: bool) {
        self.log.borrow_mut().commands_enabled = enabled;
    }
}

struct MockSurface {
    log: Rc<RefCell<HostLog>>,
    open: bool,
}

impl OverlaySurface for MockSurface {
    fn paint(
        &mut self,
        painter: &mut dyn FnMut(&mut dyn DrawContext),
    ) -> Result<(), GridError> {
        let mut ctx = MockDrawContext {
            log: Rc::clone(&self.log),
        };
        painter(&mut ctx);
        Ok(())
    }

    fn freeze(&mut self) -> Result<(), GridError> {
        self.log.borrow_mut().frames_frozen += 1;
        Ok(())
    }

    fn close(&mut self) {
        if self.open {
            self.open = false;
            self.log.borrow_mut().surfaces_closed += 1;
        }
    }
}

struct MockDrawContext {
    log: Rc<RefCell<HostLog>>,
}

impl DrawContext for MockDrawContext {
    fn set_text_align(&mut self, align: TextAlign) {
        self.log.borrow_mut().text_align = Some(align);
    }

    fn set_text_size(&mut self, size: f32) {
        self.log.borrow_mut().text_size = size;
    }

    fn measure_text(&mut self, text: &str) -> Rect {
        let size = self.log.borrow().text_size.max(1.0) as f64;
        Rect {
            x: 0.0,
            y: 0.0,
            width: size * 0.6 * text.chars().count() as f64,
            height: size,
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.log.borrow_mut().paint_ops.push(PaintOp::FillRect { rect, color });
    }

    fn draw_text(&mut self, text: &str, origin: Point, color: Rgba) {
        self.log.borrow_mut().paint_ops.push(PaintOp::Text {
            label: text.to_string(),
            origin,
            color,
        });
    }
}
