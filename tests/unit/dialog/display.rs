use super::*;
use crate::ui::backend::headless::{FailPoint, HeadlessBackend, Op};
use crate::ui::backend::ScaleQuality;
use crate::ui::core::format::PixelFormat;
use crate::ui::core::geom::Size;

fn position(ops: &[Op], pred: impl Fn(&Op) -> bool) -> usize {
    ops.iter().position(pred).expect("operation not recorded")
}

#[test]
fn acquire_creates_resources_in_order() {
    let mut backend = HeadlessBackend::new().with_format(PixelFormat::Ansi256);
    let mut res = BackendResources::new();
    res.acquire(&mut backend, &DialogSettings::default()).unwrap();

    assert!(res.is_acquired());
    let surface = res.surface().unwrap();
    assert_eq!(surface.size(), Size::new(80, 24));
    assert_eq!(surface.format(), PixelFormat::Ansi256);

    let ops = backend.ops();
    assert_eq!(ops[0], Op::CreateWindow("In-Game Message".to_string()));
    assert_eq!(ops[1], Op::SetScaleQuality(ScaleQuality::Linear));
    let renderer = position(ops, |op| matches!(op, Op::CreateRenderer(_)));
    let texture = position(ops, |op| matches!(op, Op::CreateTexture { .. }));
    assert!(renderer < texture);
    assert_eq!(
        ops[texture],
        Op::CreateTexture {
            id: res.texture().unwrap(),
            format: PixelFormat::Ansi256,
            size: Size::new(80, 24),
        }
    );
    assert!(backend.renderer().unwrap().vsync);
}

#[test]
fn acquire_reuses_window_and_renderer() {
    let mut backend = HeadlessBackend::new();
    let settings = DialogSettings::default();
    let mut first = BackendResources::new();
    first.acquire(&mut backend, &settings).unwrap();
    first.release(&mut backend);
    backend.clear_ops();

    let mut second = BackendResources::new();
    second.acquire(&mut backend, &settings).unwrap();
    assert!(!backend
        .ops()
        .iter()
        .any(|op| matches!(op, Op::CreateWindow(_) | Op::CreateRenderer(_))));
    assert_eq!(backend.live_textures(), 1);
}

#[test]
fn acquire_twice_is_a_no_op() {
    let mut backend = HeadlessBackend::new();
    let settings = DialogSettings::default();
    let mut res = BackendResources::new();
    res.acquire(&mut backend, &settings).unwrap();
    let ops = backend.ops().len();
    res.acquire(&mut backend, &settings).unwrap();
    assert_eq!(backend.ops().len(), ops);
}

#[test]
fn settings_override_pixel_format() {
    let mut backend = HeadlessBackend::new().with_format(PixelFormat::TrueColor);
    let settings = DialogSettings {
        pixel_format: Some(PixelFormat::Ansi16),
        ..DialogSettings::default()
    };
    let mut res = BackendResources::new();
    res.acquire(&mut backend, &settings).unwrap();
    assert_eq!(res.surface().unwrap().format(), PixelFormat::Ansi16);
    assert!(res.upload(&mut backend).is_ok());
}

#[test]
fn failures_name_the_resource() {
    let settings = DialogSettings::default();
    for (point, name) in [
        (FailPoint::Window, "window"),
        (FailPoint::Renderer, "renderer"),
        (FailPoint::Texture, "texture"),
    ] {
        let mut backend = HeadlessBackend::new().fail_at(point);
        let mut res = BackendResources::new();
        let err = res.acquire(&mut backend, &settings).unwrap_err();
        assert_eq!(err.resource(), name);
        assert!(!res.is_acquired());
        res.release(&mut backend);
        assert_eq!(backend.live_textures(), 0);
    }

    let mut backend = HeadlessBackend::new();
    let empty = DialogSettings {
        logical_height: 0,
        ..DialogSettings::default()
    };
    let err = BackendResources::new()
        .acquire(&mut backend, &empty)
        .unwrap_err();
    assert_eq!(err.resource(), "surface");
}

#[test]
fn present_clears_copies_and_presents() {
    let mut backend = HeadlessBackend::new();
    let mut res = BackendResources::new();
    res.acquire(&mut backend, &DialogSettings::default()).unwrap();
    backend.clear_ops();

    res.upload(&mut backend).unwrap();
    res.present(&mut backend).unwrap();
    let id = res.texture().unwrap();
    assert_eq!(
        backend.ops(),
        &[Op::UpdateTexture(id), Op::Clear, Op::Copy(id), Op::Present]
    );
    assert!(backend.frame().is_some());
}

#[test]
fn release_destroys_texture_and_shows_an_empty_frame_once() {
    let mut backend = HeadlessBackend::new();
    let mut res = BackendResources::new();
    res.acquire(&mut backend, &DialogSettings::default()).unwrap();
    let id = res.texture().unwrap();
    backend.clear_ops();

    res.release(&mut backend);
    assert_eq!(
        backend.ops(),
        &[Op::DestroyTexture(id), Op::Clear, Op::Present]
    );
    assert!(backend.frame().is_none());
    assert!(res.surface().is_none());

    res.release(&mut backend);
    assert_eq!(backend.ops().len(), 3);
}

#[test]
fn release_without_acquire_touches_nothing() {
    let mut backend = HeadlessBackend::new();
    let mut res = BackendResources::new();
    res.release(&mut backend);
    res.release(&mut backend);
    assert!(backend.ops().is_empty());
}
