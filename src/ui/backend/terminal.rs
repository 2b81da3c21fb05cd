use super::scale;
use super::{BackendError, DisplayBackend, EventSource, RendererConfig, ScaleQuality, TextureId};
use crate::core::event::{ControllerId, InputEvent};
use crate::tui::crossterm::into_input_event;
use crate::tui::terminal_guard::TerminalGuard;
use crate::ui::core::format::{detect_pixel_format, map_style, PixelFormat};
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::core::style::{Color, Mod, Style};
use crate::ui::surface::{Cell, Surface};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::style::{Color as RColor, Modifier as RModifier, Style as RStyle};
use ratatui::Terminal;
use rustc_hash::FxHashMap;
use std::io;
use std::time::{Duration, Instant};

const VSYNC_INTERVAL: Duration = Duration::from_micros(16_667);

impl From<ratatui::layout::Rect> for Rect {
    fn from(r: ratatui::layout::Rect) -> Self {
        Rect::new(r.x, r.y, r.width, r.height)
    }
}

struct Renderer {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    config: RendererConfig,
    viewport: Rect,
    last_present: Option<Instant>,
}

impl Renderer {
    fn wait_for_vsync(&mut self) {
        if !self.config.vsync {
            return;
        }
        if let Some(last) = self.last_present {
            let elapsed = last.elapsed();
            if elapsed < VSYNC_INTERVAL {
                std::thread::sleep(VSYNC_INTERVAL - elapsed);
            }
        }
        self.last_present = Some(Instant::now());
    }
}

struct Texture {
    format: PixelFormat,
    size: Size,
    cells: Vec<Cell>,
}

/// Full-screen terminal as the host video output: the alternate screen is the window,
/// a ratatui `Terminal` the renderer, and textures are cell grids blitted per frame.
pub struct TerminalBackend {
    window: Option<TerminalGuard>,
    renderer: Option<Renderer>,
    scale_quality: ScaleQuality,
    format: PixelFormat,
    textures: FxHashMap<TextureId, Texture>,
    next_texture: u32,
    copied: Vec<TextureId>,
    pointer_visible: bool,
}

impl Default for TerminalBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalBackend {
    pub fn new() -> Self {
        Self {
            window: None,
            renderer: None,
            scale_quality: ScaleQuality::default(),
            format: detect_pixel_format(),
            textures: FxHashMap::default(),
            next_texture: 1,
            copied: Vec::new(),
            pointer_visible: false,
        }
    }

    /// Restorer for signal handlers; `None` until a window exists.
    pub fn restorer(&self) -> Option<crate::tui::terminal_guard::TerminalRestorer> {
        self.window.as_ref().map(TerminalGuard::restorer)
    }

    fn map_pointer(&self, event: InputEvent) -> Option<InputEvent> {
        let InputEvent::Mouse(mut me) = event else {
            return Some(event);
        };
        let renderer = self.renderer.as_ref()?;
        let pos = scale::to_logical(
            Pos::new(me.column, me.row),
            renderer.config.logical_size,
            renderer.viewport,
        )?;
        me.column = pos.x;
        me.row = pos.y;
        Some(InputEvent::Mouse(me))
    }
}

impl DisplayBackend for TerminalBackend {
    fn has_window(&self) -> bool {
        self.window.is_some()
    }

    fn create_window(&mut self, title: &str) -> Result<(), BackendError> {
        self.window = Some(TerminalGuard::new(title)?);
        Ok(())
    }

    fn destroy_window(&mut self) {
        self.textures.clear();
        self.copied.clear();
        self.renderer = None;
        self.pointer_visible = false;
        // Dropping the guard restores the terminal.
        self.window = None;
    }

    fn set_scale_quality(&mut self, quality: ScaleQuality) {
        self.scale_quality = quality;
    }

    fn has_renderer(&self) -> bool {
        self.renderer.is_some()
    }

    fn create_renderer(&mut self, config: RendererConfig) -> Result<(), BackendError> {
        if self.window.is_none() {
            return Err(BackendError::NoWindow);
        }
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        terminal.clear()?;
        // Corrected against the real terminal size on the first present.
        self.renderer = Some(Renderer {
            terminal,
            config,
            viewport: Rect::from_size(config.logical_size),
            last_present: None,
        });
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
        Ok(())
    }

    fn destroy_texture(&mut self, id: TextureId) {
        self.textures.remove(&id);
        self.copied.retain(|c| *c != id);
    }

    fn render_clear(&mut self) {
        // ratatui hands every draw a reset back buffer; clearing only drops queued copies.
        self.copied.clear();
    }

    fn render_copy(&mut self, id: TextureId) {
        self.copied.push(id);
    }

    fn render_present(&mut self) -> Result<(), BackendError> {
        let renderer = self.renderer.as_mut().ok_or(BackendError::NoRenderer)?;
        renderer.wait_for_vsync();

        let logical = renderer.config.logical_size;
        let quality = self.scale_quality;
        let textures = &self.textures;
        let copied = &self.copied;
        let mut view = renderer.viewport;
        renderer.terminal.draw(|frame| {
            let physical: Rect = frame.area().into();
            view = scale::viewport(logical, physical.size());
            let buf = frame.buffer_mut();
            for id in copied {
                if let Some(texture) = textures.get(id) {
                    blit(buf, texture, view, quality);
                }
            }
        })?;
        renderer.viewport = view;
        Ok(())
    }

    fn set_pointer_visible(&mut self, visible: bool) {
        if self.window.is_none() || self.pointer_visible == visible {
            return;
        }
        let result = if visible {
            crossterm::execute!(io::stdout(), crossterm::event::EnableMouseCapture)
        } else {
            crossterm::execute!(io::stdout(), crossterm::event::DisableMouseCapture)
        };
        match result {
            Ok(()) => self.pointer_visible = visible,
            Err(err) => tracing::warn!(error = %err, visible, "mouse capture toggle failed"),
        }
    }
}

impl EventSource for TerminalBackend {
    fn poll_event(&mut self) -> Option<InputEvent> {
        loop {
            match crossterm::event::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => return None,
                Err(err) => {
                    tracing::warn!(error = %err, "terminal event poll failed");
                    return None;
                }
            }
            let event = match crossterm::event::read() {
                Ok(event) => into_input_event(event),
                Err(err) => {
                    tracing::warn!(error = %err, "terminal event read failed");
                    return None;
                }
            };
            // Pointer events outside the letterboxed image are dropped.
            if let Some(event) = self.map_pointer(event) {
                return Some(event);
            }
        }
    }

    fn num_controllers(&self) -> usize {
        0
    }

    fn open_controller(&mut self, _index: usize) -> Option<ControllerId> {
        None
    }

    fn close_controller(&mut self, _id: ControllerId) {}
}

fn blit(buf: &mut Buffer, texture: &Texture, view: Rect, quality: ScaleQuality) {
    for dy in 0..view.h {
        for dx in 0..view.w {
            let Some(cell) =
                scale::sample(&texture.cells, texture.size, view.size(), dx, dy, quality)
            else {
                continue;
            };
            let style = to_ratatui_style(map_style(cell.style, texture.format));
            if let Some(out) = buf.cell_mut((view.x + dx, view.y + dy)) {
                out.set_symbol(&cell.symbol).set_style(style);
            }
        }
    }
}

fn to_ratatui_style(s: Style) -> RStyle {
    let mut out = RStyle::default();
    if let Some(fg) = s.fg {
        out = out.fg(to_ratatui_color(fg));
    }
    if let Some(bg) = s.bg {
        out = out.bg(to_ratatui_color(bg));
    }
    out.add_modifier(to_ratatui_mods(s.mods))
}

fn to_ratatui_color(c: Color) -> RColor {
    match c {
        Color::Reset => RColor::Reset,
        Color::Rgb(r, g, b) => RColor::Rgb(r, g, b),
        Color::Indexed(i) => RColor::Indexed(i),
    }
}

fn to_ratatui_mods(m: Mod) -> RModifier {
    let mut out = RModifier::empty();
    if m.contains(Mod::BOLD) {
        out |= RModifier::BOLD;
    }
    if m.contains(Mod::UNDERLINE) {
        out |= RModifier::UNDERLINED;
    }
    if m.contains(Mod::REVERSE) {
        out |= RModifier::REVERSED;
    }
    out
}

// Terminal-dependent paths are covered through the headless backend and `scale` tests.
