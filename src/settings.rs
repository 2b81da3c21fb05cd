//! Dialog settings and the host input map, loaded from JSON.

use crate::core::event::KeyCode;
use crate::ui::backend::ScaleQuality;
use crate::ui::core::format::PixelFormat;
use crate::ui::core::geom::Size;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

pub const SETTINGS_ENV: &str = "INGAME_MESSAGE_SETTINGS";

pub const DEFAULT_FONT_PATH: &str = "data/topaz.bdf";
pub const DEFAULT_FONT_SIZE: u16 = 15;

#[derive(Debug)]
pub enum SettingsError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    InvalidKey { field: &'static str, value: String },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            SettingsError::Parse { path, source } => {
                write!(f, "invalid settings in {}: {source}", path.display())
            }
            SettingsError::InvalidKey { field, value } => {
                write!(f, "{field}: unknown key name {value:?}")
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io { source, .. } => Some(source),
            SettingsError::Parse { source, .. } => Some(source),
            SettingsError::InvalidKey { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogSettings {
    pub font_path: PathBuf,
    pub font_size: u16,
    pub logical_width: u16,
    pub logical_height: u16,
    pub window_title: String,
    pub scale_quality: ScaleQuality,
    pub vsync: bool,
    /// `None` uses whatever the backend prefers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pixel_format: Option<PixelFormat>,
    /// Extra pacing between loop iterations, on top of vsync.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_interval_ms: Option<u64>,
    pub input: InputMap,
}

impl Default for DialogSettings {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            font_size: DEFAULT_FONT_SIZE,
            logical_width: 80,
            logical_height: 24,
            window_title: "In-Game Message".to_string(),
            scale_quality: ScaleQuality::Linear,
            vsync: true,
            pixel_format: None,
            frame_interval_ms: None,
            input: InputMap::default(),
        }
    }
}

impl DialogSettings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let data = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like `load`, but logs the failure and returns the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "settings loaded");
                settings
            }
            Err(err) => {
                tracing::warn!(error = %err, "settings unavailable, using defaults");
                Self::default()
            }
        }
    }

    /// Settings named by `INGAME_MESSAGE_SETTINGS`, or the defaults.
    pub fn from_env() -> Self {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) if !path.is_empty() => Self::load_or_default(Path::new(&path)),
            _ => Self::default(),
        }
    }

    pub fn logical_size(&self) -> Size {
        Size::new(self.logical_width, self.logical_height)
    }
}

/// Host input-mapping table: the accept keys and, per controller, the button indices that
/// confirm a dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputMap {
    pub accept_key: String,
    pub secondary_accept_key: String,
    pub controllers: Vec<ControllerMapping>,
}

impl Default for InputMap {
    fn default() -> Self {
        Self {
            accept_key: "home".to_string(),
            secondary_accept_key: "pagedown".to_string(),
            controllers: vec![ControllerMapping::default()],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerMapping {
    pub east_button: u8,
    pub start_button: u8,
}

impl Default for ControllerMapping {
    fn default() -> Self {
        Self {
            east_button: 1,
            start_button: 7,
        }
    }
}

impl InputMap {
    /// Accept key, secondary accept key and Enter, deduplicated.
    pub fn confirm_keys(&self) -> Result<Vec<KeyCode>, SettingsError> {
        let accept =
            parse_key_code(&self.accept_key).ok_or_else(|| SettingsError::InvalidKey {
                field: "accept_key",
                value: self.accept_key.clone(),
            })?;
        let secondary = parse_key_code(&self.secondary_accept_key).ok_or_else(|| {
            SettingsError::InvalidKey {
                field: "secondary_accept_key",
                value: self.secondary_accept_key.clone(),
            }
        })?;

        let mut keys = Vec::with_capacity(3);
        for code in [accept, secondary, KeyCode::Enter] {
            if !keys.contains(&code) {
                keys.push(code);
            }
        }
        Ok(keys)
    }

    /// Mapping of the first controller; the defaults when the table has none.
    pub fn first_controller(&self) -> ControllerMapping {
        self.controllers.first().copied().unwrap_or_default()
    }
}

pub fn parse_key_code(value: &str) -> Option<KeyCode> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    let v_lc = v.to_ascii_lowercase();
    let code = match v_lc.as_str() {
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "insert" | "ins" => KeyCode::Insert,
        "delete" | "del" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        _ if v_lc.starts_with('f') && v_lc.len() > 1 => {
            let n = v_lc.strip_prefix('f')?.parse::<u8>().ok()?;
            KeyCode::F(n)
        }
        _ => {
            let mut chars = v.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch.to_ascii_lowercase())
        }
    };

    Some(code)
}

#[cfg(test)]
#[path = "../tests/unit/settings.rs"]
mod tests;
