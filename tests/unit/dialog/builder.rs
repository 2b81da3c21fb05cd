use super::*;
use crate::ui::core::format::PixelFormat;
use crate::ui::core::geom::Size;
use std::path::PathBuf;

fn settings() -> DialogSettings {
    DialogSettings {
        font_path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/topaz.bdf"),
        ..DialogSettings::default()
    }
}

fn built(message: &str) -> WidgetTree {
    WidgetTree::build(message, &settings()).unwrap()
}

#[test]
fn builds_the_fixed_layout() {
    let tree = built("Disk image not found");
    let top = tree.gui().top().unwrap();
    assert_eq!(top.rect().size(), Size::new(80, 24));
    assert_eq!(top.base_color(), BASE_COLOR);

    let window = top.window().unwrap();
    assert_eq!(window.caption(), WINDOW_CAPTION);
    assert_eq!(window.rect(), Rect::new(10, 7, DIALOG_WIDTH, DIALOG_HEIGHT));

    let label = window.label().unwrap();
    assert_eq!(label.caption(), "Disk image not found");
    assert_eq!(label.rect(), Rect::new(2, 1, 56, 1));

    let button = window.button().unwrap();
    assert_eq!(button.caption(), BUTTON_CAPTION);
    assert_eq!(button.action_id(), DONE_ACTION);
    assert_eq!(button.rect(), Rect::new(41, 4, BUTTON_WIDTH, BUTTON_HEIGHT));
}

#[test]
fn button_has_focus_and_window_is_modal() {
    let tree = built("x");
    let ids = tree.ids();
    assert_eq!(tree.gui().focused(), Some(ids.button));
    assert_eq!(tree.gui().modal_focus(), Some(ids.window));

    let handler = tree.dismiss_handler().unwrap();
    assert_eq!(handler.source(), ids.button);
    let window = tree.gui().top().unwrap().window().unwrap();
    assert_eq!(window.button().unwrap().listeners(), &[handler.id()]);
    assert_eq!(window.listeners(), &[handler]);
}

#[test]
fn draw_shows_caption_message_and_button() {
    let mut tree = built("Disk image not found");
    let mut surface = Surface::new(Size::new(80, 24), PixelFormat::TrueColor);
    tree.draw(&mut surface);

    assert!(surface.row_text(7).contains("Information"));
    assert!(surface.row_text(9).contains("Disk image not found"));
    assert_eq!(surface.cell(55, 13).unwrap().symbol, "O");
    assert_eq!(surface.cell(56, 13).unwrap().symbol, "k");
    assert_eq!(surface.cell(0, 0).unwrap().style.bg, Some(BASE_COLOR));
}

#[test]
fn long_messages_are_clipped_to_the_label() {
    let message = "x".repeat(120);
    let mut tree = built(&message);
    let mut surface = Surface::new(Size::new(80, 24), PixelFormat::TrueColor);
    tree.draw(&mut surface);
    let row = surface.row_text(9);
    assert_eq!(row.matches('x').count(), 56);
}

#[test]
fn missing_font_is_a_setup_error() {
    let dir = tempfile::tempdir().unwrap();
    let settings = DialogSettings {
        font_path: dir.path().join("missing.bdf"),
        ..DialogSettings::default()
    };
    let err = WidgetTree::build("x", &settings).unwrap_err();
    assert_eq!(err.resource(), "font");
}

#[test]
fn teardown_runs_in_reverse_construction_order_once() {
    let mut tree = built("x");
    assert_eq!(
        tree.teardown(),
        vec![
            Part::Label,
            Part::Button,
            Part::DismissHandler,
            Part::Window,
            Part::Font,
            Part::Container,
        ]
    );
    assert!(!tree.is_built());
    assert!(tree.dismiss_handler().is_none());
    assert!(tree.teardown().is_empty());
}

#[test]
fn font_outlives_every_widget() {
    let mut tree = built("x");
    let font = std::rc::Rc::clone(tree.gui().global_font().unwrap());
    // Shared by the gui, the label, the button and this test.
    assert_eq!(std::rc::Rc::strong_count(&font), 4);

    let parts = tree.teardown();
    let font_at = parts.iter().position(|p| *p == Part::Font).unwrap();
    for widget in [Part::Label, Part::Button, Part::Window] {
        assert!(parts.iter().position(|p| *p == widget).unwrap() < font_at);
    }
    assert_eq!(std::rc::Rc::strong_count(&font), 1);
}
