//! Mapping between the logical resolution and the physical presentation target.

use super::ScaleQuality;
use crate::ui::core::format::color_to_rgb;
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::core::style::Color;
use crate::ui::surface::Cell;

/// Where the logical image lands on a `physical` target.
///
/// A target at least as large gets the image 1:1, centered. A smaller target gets it scaled
/// down with the aspect ratio kept, centered along the slack axis.
pub fn viewport(logical: Size, physical: Size) -> Rect {
    if logical.is_empty() || physical.is_empty() {
        return Rect::default();
    }
    if logical.fits_in(physical) {
        return Rect::from_size(physical).centered(logical.w, logical.h);
    }

    let (lw, lh) = (logical.w as u32, logical.h as u32);
    let (pw, ph) = (physical.w as u32, physical.h as u32);
    // min(pw/lw, ph/lh) without floats.
    let (w, h) = if pw * lh <= ph * lw {
        (pw, (lh * pw / lw).max(1))
    } else {
        ((lw * ph / lh).max(1), ph)
    };
    Rect::from_size(physical).centered(w as u16, h as u16)
}

/// Source block `[start, end)` of the logical axis covered by target coordinate `d`.
fn source_span(d: u16, target_len: u16, source_len: u16) -> (u16, u16) {
    let t = target_len.max(1) as u32;
    let s = source_len as u32;
    let start = d as u32 * s / t;
    let end = ((d as u32 + 1) * s / t).max(start + 1).min(s);
    (start as u16, end as u16)
}

/// Cell shown at target position `(dx, dy)` relative to the viewport origin.
pub fn sample(
    cells: &[Cell],
    logical: Size,
    view: Size,
    dx: u16,
    dy: u16,
    quality: ScaleQuality,
) -> Option<Cell> {
    let (sx0, sx1) = source_span(dx, view.w, logical.w);
    let (sy0, sy1) = source_span(dy, view.h, logical.h);
    let at = |x: u16, y: u16| cells.get(y as usize * logical.w as usize + x as usize);

    let mut cell = at(sx0, sy0)?.clone();
    let block = (sx1 - sx0) as usize * (sy1 - sy0) as usize;
    if quality == ScaleQuality::Linear && block > 1 {
        let covered = (sy0..sy1)
            .flat_map(|y| (sx0..sx1).map(move |x| (x, y)))
            .filter_map(|(x, y)| at(x, y));
        if let Some(bg) = average_bg(covered) {
            cell.style.bg = Some(bg);
        }
    }
    Some(cell)
}

fn average_bg<'a>(cells: impl Iterator<Item = &'a Cell>) -> Option<Color> {
    let (mut r, mut g, mut b, mut n) = (0u32, 0u32, 0u32, 0u32);
    // Cells without a concrete background color do not take part in the average.
    for (cr, cg, cb) in cells.filter_map(|cell| cell.style.bg.and_then(color_to_rgb)) {
        r += cr as u32;
        g += cg as u32;
        b += cb as u32;
        n += 1;
    }
    if n == 0 {
        return None;
    }
    Some(Color::Rgb((r / n) as u8, (g / n) as u8, (b / n) as u8))
}

/// Maps a physical pointer position back into logical coordinates; `None` outside the
/// viewport.
pub fn to_logical(pos: Pos, logical: Size, view: Rect) -> Option<Pos> {
    if !view.contains(pos) {
        return None;
    }
    let dx = (pos.x - view.x) as u32;
    let dy = (pos.y - view.y) as u32;
    let x = dx * logical.w as u32 / view.w as u32;
    let y = dy * logical.h as u32 / view.h as u32;
    Some(Pos::new(x as u16, y as u16))
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/backend/scale.rs"]
mod tests;
