use super::*;
use crate::core::event::{ControllerId, InputEvent, KeyCode};
use crate::ui::backend::headless::{FailPoint, HeadlessBackend, Op};
use crate::ui::backend::DisplayBackend;
use std::path::PathBuf;

fn settings() -> DialogSettings {
    DialogSettings {
        font_path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/topaz.bdf"),
        ..DialogSettings::default()
    }
}

fn count(ops: &[Op], op: &Op) -> usize {
    ops.iter().filter(|o| *o == op).count()
}

#[test]
fn walks_every_phase() {
    let mut backend = HeadlessBackend::new();
    backend.push_event(InputEvent::key_press(KeyCode::Enter));

    let mut session = DialogSession::new(&mut backend);
    assert_eq!(session.phase(), Phase::Uninitialized);
    session.init("hello", &settings()).unwrap();
    assert_eq!(session.phase(), Phase::Initialized);
    assert!(session.resources().is_acquired());

    assert_eq!(session.run(), Some(DismissCause::Key(KeyCode::Enter)));
    assert_eq!(session.phase(), Phase::Dismissed);

    session.halt();
    assert_eq!(session.phase(), Phase::Halted);
    assert!(session.tree().is_none());
    assert!(!session.resources().is_acquired());
}

#[test]
fn first_frame_is_presented_before_the_first_poll() {
    let mut backend = HeadlessBackend::new();
    backend.push_idle(3);
    backend.push_event(InputEvent::key_press(KeyCode::Home));
    {
        let mut session = DialogSession::new(&mut backend);
        session.init("hello", &settings()).unwrap();
        session.run();
    }

    let ops = backend.ops();
    let first_present = ops.iter().position(|op| *op == Op::Present).unwrap();
    let first_poll = ops.iter().position(|op| *op == Op::Poll).unwrap();
    assert!(first_present < first_poll);
    assert!(ops[..first_present]
        .iter()
        .any(|op| matches!(op, Op::UpdateTexture(_))));
}

#[test]
fn presents_once_per_iteration() {
    let mut backend = HeadlessBackend::new();
    backend.push_idle(4);
    backend.push_event(InputEvent::key_press(KeyCode::PageDown));
    {
        let mut session = DialogSession::new(&mut backend);
        session.init("hello", &settings()).unwrap();
        session.run();
        // Released separately so only loop presents are counted.
        session.halt();
    }
    let ops = backend.ops();
    // Initial frame + 4 idle iterations + the iteration that saw the key + the empty
    // frame shown on release.
    assert_eq!(count(ops, &Op::Present), 1 + 4 + 1 + 1);
    // Textures are only refreshed when input arrived: the initial frame and the key.
    assert_eq!(
        ops.iter()
            .filter(|op| matches!(op, Op::UpdateTexture(_)))
            .count(),
        2
    );
}

#[test]
fn opens_and_closes_the_first_controller() {
    let mut backend = HeadlessBackend::new().with_controllers(2);
    backend.push_event(InputEvent::controller_press(ControllerId(0), 7));
    {
        let mut session = DialogSession::new(&mut backend);
        session.init("hello", &settings()).unwrap();
        let cause = session.run();
        assert_eq!(
            cause,
            Some(DismissCause::ControllerButton {
                controller: ControllerId(0),
                button: 7
            })
        );
    }
    let ops = backend.ops();
    assert_eq!(count(ops, &Op::OpenController(0)), 1);
    assert_eq!(count(ops, &Op::OpenController(1)), 0);
    assert!(backend.open_controllers().is_empty());

    let close = ops
        .iter()
        .position(|op| matches!(op, Op::CloseController(_)))
        .unwrap();
    let destroy = ops
        .iter()
        .position(|op| matches!(op, Op::DestroyTexture(_)))
        .unwrap();
    assert!(close < destroy);
}

#[test]
fn halt_is_idempotent_and_runs_on_drop() {
    let mut backend = HeadlessBackend::new();
    backend.push_event(InputEvent::key_press(KeyCode::Enter));
    {
        let mut session = DialogSession::new(&mut backend);
        session.init("hello", &settings()).unwrap();
        session.run();
        session.halt();
        session.halt();
    }
    let ops = backend.ops();
    assert_eq!(backend.live_textures(), 0);
    assert_eq!(
        ops.iter()
            .filter(|op| matches!(op, Op::DestroyTexture(_)))
            .count(),
        1
    );
    assert_eq!(count(ops, &Op::PointerVisible(false)), 1);
    assert_eq!(ops.last(), Some(&Op::PointerVisible(false)));
}

#[test]
fn halting_a_never_initialized_session_is_harmless() {
    let mut backend = HeadlessBackend::new();
    {
        let mut session = DialogSession::new(&mut backend);
        session.halt();
        assert_eq!(session.phase(), Phase::Halted);
        assert_eq!(session.run(), None);
    }
    assert!(backend.ops().is_empty());
}

#[test]
fn failed_init_releases_what_was_created() {
    let mut backend = HeadlessBackend::new();
    let broken = DialogSettings {
        font_path: PathBuf::from("/nonexistent/topaz.bdf"),
        ..DialogSettings::default()
    };
    {
        let mut session = DialogSession::new(&mut backend);
        let err = session.init("hello", &broken).unwrap_err();
        assert_eq!(err.resource(), "font");
    }
    assert_eq!(backend.live_textures(), 0);
    // The window stays with the host.
    assert!(backend.has_window());

    let mut backend = HeadlessBackend::new().fail_at(FailPoint::Texture);
    let mut session = DialogSession::new(&mut backend);
    assert_eq!(
        session.init("hello", &settings()).unwrap_err().resource(),
        "texture"
    );
}

#[test]
fn invalid_input_map_fails_before_touching_the_backend() {
    let mut backend = HeadlessBackend::new();
    let mut bad = settings();
    bad.input.accept_key = "not-a-key".to_string();
    {
        let mut session = DialogSession::new(&mut backend);
        assert_eq!(
            session.init("hello", &bad).unwrap_err().resource(),
            "input map"
        );
    }
    assert!(backend.ops().is_empty());
}

#[test]
fn frame_interval_paces_the_loop() {
    let mut backend = HeadlessBackend::new();
    backend.push_idle(2);
    backend.push_event(InputEvent::key_press(KeyCode::Enter));
    let paced = DialogSettings {
        frame_interval_ms: Some(5),
        ..settings()
    };
    let started = std::time::Instant::now();
    let mut session = DialogSession::new(&mut backend);
    session.init("hello", &paced).unwrap();
    session.run();
    assert!(started.elapsed() >= std::time::Duration::from_millis(15));
}
