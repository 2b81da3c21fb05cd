use super::*;

#[test]
fn rect_contains_excludes_right_and_bottom_edges() {
    let r = Rect::new(10, 7, 60, 9);
    assert!(r.contains(Pos::new(10, 7)));
    assert!(r.contains(Pos::new(69, 15)));

    assert!(!r.contains(Pos::new(70, 7)));
    assert!(!r.contains(Pos::new(10, 16)));
    assert!(!r.contains(Pos::new(9, 7)));
}

#[test]
fn empty_rect_never_contains() {
    assert!(!Rect::new(0, 0, 0, 24).contains(Pos::new(0, 0)));
    assert!(!Rect::new(0, 0, 80, 0).contains(Pos::new(0, 0)));
}

#[test]
fn size_fits_and_area() {
    let logical = Size::new(80, 24);
    assert_eq!(logical.area(), 1920);
    assert!(logical.fits_in(Size::new(80, 24)));
    assert!(logical.fits_in(Size::new(120, 40)));
    assert!(!logical.fits_in(Size::new(79, 40)));
    assert!(Size::new(0, 3).is_empty());
}

#[test]
fn offset_moves_origin_and_saturates() {
    let r = Rect::new(10, 7, 8, 3).offset(41, 4);
    assert_eq!(r, Rect::new(51, 11, 8, 3));
    assert_eq!(Rect::new(u16::MAX - 1, 0, 1, 1).offset(5, 0).x, u16::MAX);
    assert_eq!(Rect::from_size(Size::new(80, 24)).right(), 80);
}
