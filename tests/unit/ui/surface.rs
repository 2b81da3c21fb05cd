use super::*;
use crate::ui::core::painter::Painter;
use crate::ui::core::style::Color;

fn surface(w: u16, h: u16) -> Surface {
    Surface::new(Size::new(w, h), PixelFormat::TrueColor)
}

#[test]
fn new_surface_is_blank() {
    let s = surface(4, 2);
    assert_eq!(s.cells().len(), 8);
    assert!(s.cells().iter().all(|c| *c == Cell::default()));
    assert!(s.cell(4, 0).is_none());
    assert_eq!(s.row_text(0), "");
}

#[test]
fn text_is_clipped_to_its_rect() {
    let mut s = surface(10, 1);
    let mut p = Painter::new();
    p.text(
        Pos::new(2, 0),
        "Disk image",
        Style::default(),
        Rect::new(2, 0, 4, 1),
    );
    s.apply(p.cmds());
    assert_eq!(s.row_text(0), "  Disk");
}

#[test]
fn wide_glyphs_are_not_split_at_the_clip_edge() {
    let mut s = surface(4, 1);
    let mut p = Painter::new();
    p.text(Pos::new(1, 0), "a界b", Style::default(), Rect::new(0, 0, 80, 1));
    s.apply(p.cmds());
    assert_eq!(s.cell(1, 0).unwrap().symbol, "a");
    assert_eq!(s.cell(2, 0).unwrap().symbol, "界");
    assert_eq!(s.cell(3, 0).unwrap().symbol, " ");

    let mut s = surface(3, 1);
    s.apply(p.cmds());
    assert_eq!(s.row_text(0), " a");
}

#[test]
fn borders_use_kind_specific_corners() {
    let mut s = surface(4, 3);
    let mut p = Painter::new();
    p.border(Rect::new(0, 0, 4, 3), Style::default(), BorderKind::Plain);
    s.apply(p.cmds());
    assert_eq!(s.row_text(0), "┌──┐");
    assert_eq!(s.row_text(1), "│  │");
    assert_eq!(s.row_text(2), "└──┘");

    p.clear();
    p.border(Rect::new(0, 0, 4, 3), Style::default(), BorderKind::Raised);
    s.apply(p.cmds());
    assert_eq!(s.row_text(0), "╭──╮");
}

#[test]
fn colors_are_quantized_to_the_surface_format() {
    let mut s = Surface::new(Size::new(2, 1), PixelFormat::Ansi16);
    let mut p = Painter::new();
    p.fill_rect(
        Rect::new(0, 0, 2, 1),
        Style::default().bg(Color::Rgb(170, 170, 170)),
    );
    s.apply(p.cmds());
    assert_eq!(s.cell(1, 0).unwrap().style.bg, Some(Color::Indexed(8)));
}

#[test]
fn fill_outside_bounds_is_ignored_and_clear_resets() {
    let mut s = surface(3, 1);
    let mut p = Painter::new();
    p.fill_rect(Rect::new(5, 5, 2, 2), Style::default().bg(Color::Rgb(1, 2, 3)));
    p.text(Pos::new(1, 0), "-----", Style::default(), Rect::new(0, 0, 80, 1));
    s.apply(p.cmds());
    assert_eq!(s.row_text(0), " --");
    assert_eq!(s.cell(1, 0).unwrap().style.bg, None);

    s.clear();
    assert_eq!(s.row_text(0), "");
}
