//! Headless backend for tests and scripted runs.
//!
//! Every call is appended to an operation log so callers can assert on ordering, and input
//! comes from a script of events and idle polls.

use super::{BackendError, DisplayBackend, EventSource, RendererConfig, ScaleQuality, TextureId};
use crate::core::event::{ControllerId, InputEvent};
use crate::ui::core::format::PixelFormat;
use crate::ui::core::geom::Size;
use crate::ui::surface::{Cell, Surface};
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

pub const DEFAULT_IDLE_LIMIT: usize = 10_000;
/// Ops kept (most recent last) once the idle limit is lifted.
pub const OP_LOG_LIMIT: usize = 4_096;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    CreateWindow(String),
    DestroyWindow,
    SetScaleQuality(ScaleQuality),
    CreateRenderer(RendererConfig),
    CreateTexture {
        id: TextureId,
        format: PixelFormat,
        size: Size,
    },
    UpdateTexture(TextureId),
    DestroyTexture(TextureId),
    Clear,
    Copy(TextureId),
    Present,
    PointerVisible(bool),
    Poll,
    OpenController(usize),
    CloseController(ControllerId),
}

/// Backend call that should fail, for exercising setup error paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailPoint {
    Window,
    Renderer,
    Texture,
}

#[derive(Debug)]
enum Step {
    Event(InputEvent),
    Idle(usize),
}

#[derive(Debug)]
struct Texture {
    format: PixelFormat,
    size: Size,
    cells: Vec<Cell>,
}

#[derive(Debug)]
pub struct HeadlessBackend {
    ops: Vec<Op>,
    window: Option<String>,
    renderer: Option<RendererConfig>,
    scale_quality: Option<ScaleQuality>,
    format: PixelFormat,
    textures: FxHashMap<TextureId, Texture>,
    next_texture: u32,
    copied: Vec<TextureId>,
    frame: Option<Vec<Cell>>,
    script: VecDeque<Step>,
    idle_polls: usize,
    idle_limit: Option<usize>,
    controllers: usize,
    open_controllers: Vec<ControllerId>,
    fail: Option<FailPoint>,
    last_poll_idle: bool,
    op_limit: Option<usize>,
}

impl Default for HeadlessBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            window: None,
            renderer: None,
            scale_quality: None,
            format: PixelFormat::TrueColor,
            textures: FxHashMap::default(),
            next_texture: 1,
            copied: Vec::new(),
            frame: None,
            script: VecDeque::new(),
            idle_polls: 0,
            idle_limit: Some(DEFAULT_IDLE_LIMIT),
            controllers: 0,
            open_controllers: Vec::new(),
            fail: None,
            last_poll_idle: false,
            op_limit: None,
        }
    }

    pub fn with_format(mut self, format: PixelFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_controllers(mut self, count: usize) -> Self {
        self.controllers = count;
        self
    }

    /// Panic after `limit` consecutive empty polls once the script is exhausted.
    /// `None` lets the queue stay empty forever; the op log then keeps only the most recent
    /// `OP_LOG_LIMIT` entries.
    pub fn with_idle_limit(mut self, limit: Option<usize>) -> Self {
        self.idle_limit = limit;
        self.op_limit = limit.is_none().then_some(OP_LOG_LIMIT);
        self
    }

    pub fn fail_at(mut self, point: FailPoint) -> Self {
        self.fail = Some(point);
        self
    }

    pub fn push_event(&mut self, event: InputEvent) {
        self.script.push_back(Step::Event(event));
    }

    /// Queue `polls` empty polls before the next scripted event.
    pub fn push_idle(&mut self, polls: usize) {
        self.script.push_back(Step::Idle(polls));
    }

    pub fn pending_events(&self) -> usize {
        self.script
            .iter()
            .filter(|s| matches!(s, Step::Event(_)))
            .count()
    }

    /// Every backend call in order. Consecutive empty polls appear as a single `Poll`.
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    pub fn live_textures(&self) -> usize {
        self.textures.len()
    }

    pub fn open_controllers(&self) -> &[ControllerId] {
        &self.open_controllers
    }

    pub fn renderer(&self) -> Option<RendererConfig> {
        self.renderer
    }

    pub fn scale_quality(&self) -> Option<ScaleQuality> {
        self.scale_quality
    }

    /// Cells shown by the last present, or `None` if it showed only a cleared target.
    pub fn frame(&self) -> Option<&[Cell]> {
        self.frame.as_deref()
    }

    /// Row `y` of the last presented frame, trailing blanks trimmed.
    pub fn frame_row(&self, y: u16) -> Option<String> {
        let size = self.renderer?.logical_size;
        let frame = self.frame.as_ref()?;
        let start = y as usize * size.w as usize;
        let row = frame.get(start..start + size.w as usize)?;
        let text: String = row.iter().map(|c| c.symbol.as_str()).collect();
        Some(text.trim_end().to_string())
    }

    fn record(&mut self, op: Op) {
        self.ops.push(op);
        if let Some(limit) = self.op_limit {
            // Trimmed in batches so pushes stay amortized O(1).
            if self.ops.len() > limit.saturating_mul(2) {
                let excess = self.ops.len() - limit;
                self.ops.drain(..excess);
            }
        }
    }

    fn failing(&self, point: FailPoint) -> bool {
        self.fail == Some(point)
    }

    fn next_scripted(&mut self) -> Option<InputEvent> {
        loop {
            match self.script.pop_front() {
                Some(Step::Event(event)) => {
                    self.idle_polls = 0;
                    return Some(event);
                }
                Some(Step::Idle(0)) => continue,
                Some(Step::Idle(n)) => {
                    self.script.push_front(Step::Idle(n - 1));
                    return None;
                }
                None => {
                    self.idle_polls += 1;
                    if let Some(limit) = self.idle_limit {
                        assert!(
                            self.idle_polls <= limit,
                            "headless input script exhausted after {limit} idle polls"
                        );
                    }
                    return None;
                }
            }
        }
    }
}

impl DisplayBackend for HeadlessBackend {
    fn has_window(&self) -> bool {
        self.window.is_some()
    }

    fn create_window(&mut self, title: &str) -> Result<(), BackendError> {
        if self.failing(FailPoint::Window) {
            return Err(BackendError::Unsupported("window creation disabled"));
        }
        self.record(Op::CreateWindow(title.to_string()));
        self.window = Some(title.to_string());
        Ok(())
    }

    fn destroy_window(&mut self) {
        if self.window.take().is_some() {
            self.record(Op::DestroyWindow);
        }
        self.renderer = None;
        self.textures.clear();
    }

    fn set_scale_quality(&mut self, quality: ScaleQuality) {
        self.record(Op::SetScaleQuality(quality));
        self.scale_quality = Some(quality);
    }

    fn has_renderer(&self) -> bool {
        self.renderer.is_some()
    }

    fn create_renderer(&mut self, config: RendererConfig) -> Result<(), BackendError> {
        if self.window.is_none() {
            return Err(BackendError::NoWindow);
        }
        if self.failing(FailPoint::Renderer) {
            return Err(BackendError::Unsupported("renderer creation disabled"));
        }
        self.record(Op::CreateRenderer(config));
        self.renderer = Some(config);
        Ok(())
    }

    fn preferred_format(&self) -> PixelFormat {
        self.format
    }

    fn create_texture(
        &mut self,
        format: PixelFormat,
        size: Size,
    ) -> Result<TextureId, BackendError> {
        if self.renderer.is_none() {
            return Err(BackendError::NoRenderer);
        }
        if self.failing(FailPoint::Texture) {
            return Err(BackendError::Unsupported("texture creation disabled"));
        }
        let id = TextureId(self.next_texture);
        self.next_texture += 1;
        self.textures.insert(
            id,
            Texture {
                format,
                size,
                cells: vec![Cell::default(); size.area()],
            },
        );
        self.record(Op::CreateTexture { id, format, size });
        Ok(id)
    }

    fn update_texture(&mut self, id: TextureId, surface: &Surface) -> Result<(), BackendError> {
        let texture = self
            .textures
            .get_mut(&id)
            .ok_or(BackendError::UnknownTexture(id))?;
        if texture.format != surface.format() || texture.size != surface.size() {
            return Err(BackendError::TextureMismatch {
                texture: (texture.format, texture.size),
                surface: (surface.format(), surface.size()),
            });
        }
        texture.cells.clone_from_slice(surface.cells());
        self.record(Op::UpdateTexture(id));
        Ok(())
    }

    fn destroy_texture(&mut self, id: TextureId) {
        if self.textures.remove(&id).is_some() {
            self.record(Op::DestroyTexture(id));
        }
    }

    fn render_clear(&mut self) {
        self.record(Op::Clear);
        self.copied.clear();
    }

    fn render_copy(&mut self, id: TextureId) {
        self.record(Op::Copy(id));
        self.copied.push(id);
    }

    fn render_present(&mut self) -> Result<(), BackendError> {
        if self.renderer.is_none() {
            return Err(BackendError::NoRenderer);
        }
        self.record(Op::Present);
        self.frame = self
            .copied
            .last()
            .and_then(|id| self.textures.get(id))
            .map(|t| t.cells.clone());
        Ok(())
    }

    fn set_pointer_visible(&mut self, visible: bool) {
        self.record(Op::PointerVisible(visible));
    }
}

impl EventSource for HeadlessBackend {
    fn poll_event(&mut self) -> Option<InputEvent> {
        let event = self.next_scripted();
        // A run of empty polls is logged once so idle loops do not grow the log.
        let idle_run = event.is_none() && self.last_poll_idle && self.ops.last() == Some(&Op::Poll);
        if !idle_run {
            self.record(Op::Poll);
        }
        self.last_poll_idle = event.is_none();
        event
    }

    fn num_controllers(&self) -> usize {
        self.controllers
    }

    fn open_controller(&mut self, index: usize) -> Option<ControllerId> {
        if index >= self.controllers {
            return None;
        }
        self.record(Op::OpenController(index));
        let id = ControllerId(index as u32);
        self.open_controllers.push(id);
        Some(id)
    }

    fn close_controller(&mut self, id: ControllerId) {
        let before = self.open_controllers.len();
        self.open_controllers.retain(|c| *c != id);
        if self.open_controllers.len() != before {
            self.record(Op::CloseController(id));
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/backend/headless.rs"]
mod tests;
