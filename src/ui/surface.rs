//! Off-screen drawing surface.
//!
//! A `Surface` is a fixed-size grid of cells in a single `PixelFormat`. The toolkit paints
//! into it; the display adapter uploads it into a streaming texture of the same format and
//! size. Colors are quantized to the surface format as they are written.

use crate::ui::core::format::{map_style, PixelFormat};
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::core::painter::{BorderKind, PaintCmd};
use crate::ui::core::style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub symbol: String,
    pub style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            symbol: " ".to_string(),
            style: Style::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    size: Size,
    format: PixelFormat,
    cells: Vec<Cell>,
}

impl Surface {
    pub fn new(size: Size, format: PixelFormat) -> Self {
        Self {
            size,
            format,
            cells: std::iter::repeat_with(Cell::default)
                .take(size.area())
                .collect(),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn area(&self) -> Rect {
        Rect::from_size(self.size)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        let idx = self.idx(x, y)?;
        self.cells.get(idx)
    }

    pub fn cell_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        let idx = self.idx(x, y)?;
        self.cells.get_mut(idx)
    }

    /// Text of row `y` with trailing blanks trimmed; handy for assertions and logs.
    pub fn row_text(&self, y: u16) -> String {
        let mut out = String::new();
        for x in 0..self.size.w {
            if let Some(cell) = self.cell(x, y) {
                out.push_str(&cell.symbol);
            }
        }
        out.trim_end().to_string()
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }

    pub fn apply(&mut self, cmds: &[PaintCmd]) {
        for cmd in cmds {
            match cmd {
                PaintCmd::FillRect { rect, style } => fill_rect(self, *rect, *style),
                PaintCmd::Text {
                    pos,
                    text,
                    style,
                    clip,
                } => draw_text(self, *pos, text, *style, *clip),
                PaintCmd::Border { rect, style, kind } => draw_border(self, *rect, *style, *kind),
            }
        }
    }

    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.size.w || y >= self.size.h {
            return None;
        }
        Some(y as usize * self.size.w as usize + x as usize)
    }

    fn put(&mut self, x: u16, y: u16, symbol: &str, style: Style) {
        let style = map_style(style, self.format);
        if let Some(cell) = self.cell_mut(x, y) {
            cell.symbol.clear();
            cell.symbol.push_str(symbol);
            cell.style = style;
        }
    }
}

fn fill_rect(surface: &mut Surface, rect: Rect, style: Style) {
    let clip = rect.intersect(surface.area());
    if clip.is_empty() {
        return;
    }
    for y in clip.y..clip.bottom() {
        for x in clip.x..clip.right() {
            surface.put(x, y, " ", style);
        }
    }
}

fn draw_text(surface: &mut Surface, pos: Pos, text: &str, style: Style, clip: Rect) {
    let clip = clip.intersect(surface.area());
    if clip.is_empty() {
        return;
    }
    let mut x = pos.x;
    let y = pos.y;
    if y < clip.y || y >= clip.bottom() {
        return;
    }
    for g in text.graphemes(true) {
        let w = UnicodeWidthStr::width(g) as u16;
        if w == 0 {
            continue;
        }
        if x >= clip.right() {
            break;
        }
        // Do not partially render wide glyphs.
        if w > 1 && x.saturating_add(w).saturating_sub(1) >= clip.right() {
            break;
        }
        if !clip.contains(Pos::new(x, y)) {
            x = x.saturating_add(w);
            continue;
        }

        surface.put(x, y, g, style);

        // Wide glyphs occupy the following cells as blanks.
        for dx in 1..w {
            let xx = x.saturating_add(dx);
            if !clip.contains(Pos::new(xx, y)) {
                break;
            }
            surface.put(xx, y, " ", style);
        }

        x = x.saturating_add(w);
    }
}

fn draw_border(surface: &mut Surface, rect: Rect, style: Style, kind: BorderKind) {
    let rect = rect.intersect(surface.area());
    if rect.w < 2 || rect.h < 2 {
        return;
    }

    let right = rect.right().saturating_sub(1);
    let bottom = rect.bottom().saturating_sub(1);

    let (tl, tr, bl, br, h, v) = match kind {
        BorderKind::Plain => ("┌", "┐", "└", "┘", "─", "│"),
        BorderKind::Raised => ("╭", "╮", "╰", "╯", "─", "│"),
    };

    surface.put(rect.x, rect.y, tl, style);
    surface.put(right, rect.y, tr, style);
    surface.put(rect.x, bottom, bl, style);
    surface.put(right, bottom, br, style);
    for x in rect.x.saturating_add(1)..right {
        surface.put(x, rect.y, h, style);
        surface.put(x, bottom, h, style);
    }
    for y in rect.y.saturating_add(1)..bottom {
        surface.put(rect.x, y, v, style);
        surface.put(right, y, v, style);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/surface.rs"]
mod tests;
