use super::*;

#[test]
fn inset_by_frame_and_title_bar() {
    let window = Rect::new(10, 7, 60, 9);
    assert_eq!(window.inset(Insets::new(1, 1, 1, 1)), Rect::new(11, 8, 58, 7));
    assert_eq!(window.inset(Insets::new(1, 1, 2, 1)), Rect::new(11, 9, 58, 6));
}

#[test]
fn inset_saturates_to_empty() {
    let r = Rect::new(0, 0, 2, 2);
    assert!(r.inset(Insets::all(3)).is_empty());
}

#[test]
fn intersect_returns_overlap_or_empty() {
    let a = Rect::new(0, 0, 5, 5);
    assert_eq!(a.intersect(Rect::new(3, 3, 5, 5)), Rect::new(3, 3, 2, 2));
    assert!(a.intersect(Rect::new(5, 5, 2, 2)).is_empty());
}

#[test]
fn split_top_clamps() {
    let (top, rest) = Rect::new(0, 0, 10, 5).split_top(2);
    assert_eq!(top, Rect::new(0, 0, 10, 2));
    assert_eq!(rest, Rect::new(0, 2, 10, 3));

    let (top, rest) = Rect::new(0, 0, 10, 5).split_top(9);
    assert_eq!(top.h, 5);
    assert!(rest.is_empty());
}

#[test]
fn centered_dialog_on_logical_screen() {
    let screen = Rect::new(0, 0, 80, 24);
    assert_eq!(screen.centered(60, 9), Rect::new(10, 7, 60, 9));
    assert_eq!(Rect::new(0, 0, 40, 5).centered(60, 9), Rect::new(0, 0, 40, 5));
}

#[test]
fn place_offsets_from_origin_and_clips() {
    let client = Rect::new(11, 8, 58, 7);
    assert_eq!(client.place(Rect::new(2, 1, 56, 1)), Rect::new(13, 9, 56, 1));
    assert_eq!(client.place(Rect::new(41, 4, 8, 3)), Rect::new(52, 12, 8, 3));
    assert_eq!(client.place(Rect::new(55, 5, 8, 3)), Rect::new(66, 13, 3, 2));
    assert!(client.place(Rect::new(60, 0, 4, 1)).is_empty());
}
