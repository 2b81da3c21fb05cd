//! Host display/input backends.
//!
//! The dialog only talks to the host through `DisplayBackend` (window, renderer, textures,
//! presentation) and `EventSource` (input queue, controllers). Concrete backends are picked
//! by whoever constructs the host; nothing else in the crate names them.

use crate::core::event::{ControllerId, InputEvent};
use crate::ui::core::format::PixelFormat;
use crate::ui::core::geom::Size;
use crate::ui::surface::Surface;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;

pub mod headless;
pub mod scale;

#[cfg(feature = "terminal")]
pub mod terminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Filtering used when the logical resolution is mapped onto a differently sized target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleQuality {
    Nearest,
    #[default]
    Linear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RendererConfig {
    pub logical_size: Size,
    pub vsync: bool,
}

#[derive(Debug)]
pub enum BackendError {
    Io(io::Error),
    NoWindow,
    NoRenderer,
    UnknownTexture(TextureId),
    TextureMismatch {
        texture: (PixelFormat, Size),
        surface: (PixelFormat, Size),
    },
    Unsupported(&'static str),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Io(e) => write!(f, "io error: {e}"),
            BackendError::NoWindow => write!(f, "no window"),
            BackendError::NoRenderer => write!(f, "no renderer"),
            BackendError::UnknownTexture(id) => write!(f, "unknown texture {}", id.0),
            BackendError::TextureMismatch { texture, surface } => write!(
                f,
                "texture is {} {}x{} but surface is {} {}x{}",
                texture.0.name(),
                texture.1.w,
                texture.1.h,
                surface.0.name(),
                surface.1.w,
                surface.1.h
            ),
            BackendError::Unsupported(what) => write!(f, "unsupported: {what}"),
        }
    }
}

impl std::error::Error for BackendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BackendError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for BackendError {
    fn from(e: io::Error) -> Self {
        BackendError::Io(e)
    }
}

/// Window, renderer and texture primitives of the host video output.
///
/// The window and renderer are long-lived and may already exist when a dialog opens;
/// textures are created and destroyed per dialog.
pub trait DisplayBackend {
    fn has_window(&self) -> bool;

    fn create_window(&mut self, title: &str) -> Result<(), BackendError>;

    /// Releases the window (and renderer); no-op without one.
    fn destroy_window(&mut self);

    fn set_scale_quality(&mut self, quality: ScaleQuality);

    fn has_renderer(&self) -> bool;

    fn create_renderer(&mut self, config: RendererConfig) -> Result<(), BackendError>;

    fn preferred_format(&self) -> PixelFormat;

    fn create_texture(&mut self, format: PixelFormat, size: Size)
        -> Result<TextureId, BackendError>;

    fn update_texture(&mut self, id: TextureId, surface: &Surface) -> Result<(), BackendError>;

    /// Unknown ids are ignored.
    fn destroy_texture(&mut self, id: TextureId);

    fn render_clear(&mut self);

    fn render_copy(&mut self, id: TextureId);

    fn render_present(&mut self) -> Result<(), BackendError>;

    fn set_pointer_visible(&mut self, visible: bool);
}

/// Host input queue plus game controllers.
pub trait EventSource {
    /// Next pending event; never blocks.
    fn poll_event(&mut self) -> Option<InputEvent>;

    fn num_controllers(&self) -> usize;

    fn open_controller(&mut self, index: usize) -> Option<ControllerId>;

    fn close_controller(&mut self, id: ControllerId);
}

pub trait Backend: DisplayBackend + EventSource {}

impl<T: DisplayBackend + EventSource + ?Sized> Backend for T {}
