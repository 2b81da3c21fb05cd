use crate::settings::SettingsError;
use crate::ui::backend::BackendError;
use crate::ui::core::geom::Size;
use crate::ui::widgets::FontError;
use std::fmt;

/// A dialog resource that could not be created. Always fatal for `show_message`.
#[derive(Debug)]
pub enum SetupError {
    Backend {
        resource: &'static str,
        source: BackendError,
    },
    Surface(Size),
    Font(FontError),
    InputMap(SettingsError),
}

impl SetupError {
    pub fn backend(resource: &'static str, source: BackendError) -> Self {
        SetupError::Backend { resource, source }
    }

    /// Name of the resource that failed.
    pub fn resource(&self) -> &'static str {
        match self {
            SetupError::Backend { resource, .. } => resource,
            SetupError::Surface(_) => "surface",
            SetupError::Font(_) => "font",
            SetupError::InputMap(_) => "input map",
        }
    }
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::Backend { resource, source } => {
                write!(f, "failed to create {resource}: {source}")
            }
            SetupError::Surface(size) => {
                write!(f, "failed to create surface: invalid size {}x{}", size.w, size.h)
            }
            SetupError::Font(e) => write!(f, "failed to load font: {e}"),
            SetupError::InputMap(e) => write!(f, "failed to read input map: {e}"),
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SetupError::Backend { source, .. } => Some(source),
            SetupError::Surface(_) => None,
            SetupError::Font(e) => Some(e),
            SetupError::InputMap(e) => Some(e),
        }
    }
}

impl From<FontError> for SetupError {
    fn from(e: FontError) -> Self {
        SetupError::Font(e)
    }
}
