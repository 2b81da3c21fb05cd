//! Display backend adapter: the per-dialog surface and texture on top of the host's
//! long-lived window and renderer.

use super::error::SetupError;
use crate::settings::DialogSettings;
use crate::ui::backend::{BackendError, DisplayBackend, RendererConfig, TextureId};
use crate::ui::surface::Surface;

/// Surface and texture owned by one dialog. The window and renderer belong to the backend
/// and outlive the dialog.
#[derive(Debug, Default)]
pub struct BackendResources {
    surface: Option<Surface>,
    texture: Option<TextureId>,
}

impl BackendResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_acquired(&self) -> bool {
        self.surface.is_some() && self.texture.is_some()
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut Surface> {
        self.surface.as_mut()
    }

    pub fn texture(&self) -> Option<TextureId> {
        self.texture
    }

    /// Window (reused when present), scale hint, surface, renderer (reused when present) and
    /// streaming texture, in that order. A second call after success is a no-op.
    pub fn acquire<B: DisplayBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        settings: &DialogSettings,
    ) -> Result<(), SetupError> {
        if self.is_acquired() {
            return Ok(());
        }

        if backend.has_window() {
            tracing::debug!("reusing existing window");
        } else {
            backend
                .create_window(&settings.window_title)
                .map_err(|e| SetupError::backend("window", e))?;
            tracing::debug!(title = %settings.window_title, "window created");
        }

        backend.set_scale_quality(settings.scale_quality);

        let logical = settings.logical_size();
        if logical.is_empty() {
            return Err(SetupError::Surface(logical));
        }
        let format = settings
            .pixel_format
            .unwrap_or_else(|| backend.preferred_format());
        self.surface = Some(Surface::new(logical, format));
        tracing::debug!(w = logical.w, h = logical.h, format = format.name(), "surface created");

        if backend.has_renderer() {
            tracing::debug!("reusing existing renderer");
        } else {
            backend
                .create_renderer(RendererConfig {
                    logical_size: logical,
                    vsync: settings.vsync,
                })
                .map_err(|e| SetupError::backend("renderer", e))?;
            tracing::debug!(vsync = settings.vsync, "renderer created");
        }

        let texture = backend
            .create_texture(format, logical)
            .map_err(|e| SetupError::backend("texture", e))?;
        self.texture = Some(texture);
        tracing::debug!(texture = texture.0, "texture created");
        Ok(())
    }

    /// Copies the surface into the texture.
    pub fn upload<B: DisplayBackend + ?Sized>(&self, backend: &mut B) -> Result<(), BackendError> {
        match (self.texture, self.surface.as_ref()) {
            (Some(texture), Some(surface)) => backend.update_texture(texture, surface),
            _ => Ok(()),
        }
    }

    /// Clear, copy the texture, present.
    pub fn present<B: DisplayBackend + ?Sized>(&self, backend: &mut B) -> Result<(), BackendError> {
        backend.render_clear();
        if let Some(texture) = self.texture {
            backend.render_copy(texture);
        }
        backend.render_present()
    }

    /// Destroys the texture and shows one empty frame. Safe on partial or repeated calls.
    pub fn release<B: DisplayBackend + ?Sized>(&mut self, backend: &mut B) {
        let texture = self.texture.take();
        let surface = self.surface.take();
        if texture.is_none() && surface.is_none() {
            return;
        }
        if let Some(texture) = texture {
            backend.destroy_texture(texture);
            tracing::debug!(texture = texture.0, "texture destroyed");
        }
        if backend.has_renderer() {
            backend.render_clear();
            if let Err(err) = backend.render_present() {
                tracing::warn!(error = %err, "presenting the cleared frame failed");
            }
        }
        drop(surface);
        tracing::debug!("surface freed");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dialog/display.rs"]
mod tests;
