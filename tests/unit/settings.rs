use super::*;
use std::io::Write;

fn write_settings(json: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(json.as_bytes()).unwrap();
    (dir, path)
}

#[test]
fn defaults_match_the_stock_dialog() {
    let s = DialogSettings::default();
    assert_eq!(s.font_path, PathBuf::from("data/topaz.bdf"));
    assert_eq!(s.font_size, 15);
    assert_eq!(s.logical_size(), Size::new(80, 24));
    assert_eq!(s.scale_quality, ScaleQuality::Linear);
    assert!(s.vsync);
    assert_eq!(s.pixel_format, None);
    assert_eq!(s.input.first_controller(), ControllerMapping { east_button: 1, start_button: 7 });
}

#[test]
fn partial_json_keeps_defaults_for_missing_fields() {
    let (_dir, path) = write_settings(
        r#"{ "logical_width": 100, "scale_quality": "nearest",
             "pixel_format": "ansi16", "input": { "accept_key": "F5" } }"#,
    );
    let s = DialogSettings::load(&path).unwrap();
    assert_eq!(s.logical_size(), Size::new(100, 24));
    assert_eq!(s.scale_quality, ScaleQuality::Nearest);
    assert_eq!(s.pixel_format, Some(PixelFormat::Ansi16));
    assert_eq!(s.input.secondary_accept_key, "pagedown");
    assert_eq!(
        s.input.confirm_keys().unwrap(),
        vec![KeyCode::F(5), KeyCode::PageDown, KeyCode::Enter]
    );
}

#[test]
fn load_errors_name_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    let err = DialogSettings::load(&missing).unwrap_err();
    assert!(matches!(err, SettingsError::Io { .. }));
    assert!(err.to_string().contains("nope.json"));

    let (_dir, path) = write_settings("{ not json");
    assert!(matches!(
        DialogSettings::load(&path),
        Err(SettingsError::Parse { .. })
    ));
    assert_eq!(DialogSettings::load_or_default(&path), DialogSettings::default());
}

#[test]
fn confirm_keys_always_include_enter_once() {
    let map = InputMap {
        accept_key: "enter".to_string(),
        secondary_accept_key: "Home".to_string(),
        controllers: Vec::new(),
    };
    assert_eq!(map.confirm_keys().unwrap(), vec![KeyCode::Enter, KeyCode::Home]);
    assert_eq!(map.first_controller(), ControllerMapping::default());
}

#[test]
fn unknown_key_names_are_reported() {
    let map = InputMap {
        secondary_accept_key: "hyper".to_string(),
        ..InputMap::default()
    };
    match map.confirm_keys() {
        Err(SettingsError::InvalidKey { field, value }) => {
            assert_eq!(field, "secondary_accept_key");
            assert_eq!(value, "hyper");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn parse_key_code_names_and_chars() {
    assert_eq!(parse_key_code("PageDown"), Some(KeyCode::PageDown));
    assert_eq!(parse_key_code(" esc "), Some(KeyCode::Esc));
    assert_eq!(parse_key_code("space"), Some(KeyCode::Char(' ')));
    assert_eq!(parse_key_code("F12"), Some(KeyCode::F(12)));
    assert_eq!(parse_key_code("f"), Some(KeyCode::Char('f')));
    assert_eq!(parse_key_code("X"), Some(KeyCode::Char('x')));
    assert_eq!(parse_key_code("fx"), None);
    assert_eq!(parse_key_code(""), None);
}

#[test]
fn settings_serialize_without_unset_options() {
    let json = serde_json::to_string(&DialogSettings::default()).unwrap();
    assert!(!json.contains("pixel_format"));
    assert!(!json.contains("frame_interval_ms"));
    let back: DialogSettings = serde_json::from_str(&json).unwrap();
    assert_eq!(back, DialogSettings::default());
}
