//! Modal loop: init, run until dismissed, halt.

use super::builder::WidgetTree;
use super::display::BackendResources;
use super::error::SetupError;
use super::router::{DismissCause, InputRouter, LoopState};
use crate::settings::DialogSettings;
use crate::ui::backend::Backend;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Initialized,
    Running,
    Dismissed,
    Halted,
}

/// Everything one dialog owns, borrowed against the host backend. Dropping the session
/// halts it.
pub struct DialogSession<'b, B: Backend + ?Sized> {
    backend: &'b mut B,
    phase: Phase,
    resources: BackendResources,
    tree: Option<WidgetTree>,
    router: InputRouter,
    state: LoopState,
    frame_interval: Option<Duration>,
}

impl<'b, B: Backend + ?Sized> DialogSession<'b, B> {
    pub fn new(backend: &'b mut B) -> Self {
        Self {
            backend,
            phase: Phase::Uninitialized,
            resources: BackendResources::new(),
            tree: None,
            router: InputRouter::default(),
            state: LoopState::new(),
            frame_interval: None,
        }
    }

    /// Acquires the backend resources and builds the widgets. On error the session halts
    /// (on drop) and releases whatever was created.
    pub fn init(&mut self, message: &str, settings: &DialogSettings) -> Result<(), SetupError> {
        if self.phase != Phase::Uninitialized {
            return Ok(());
        }
        self.router = InputRouter::from_input_map(&settings.input).map_err(SetupError::InputMap)?;
        self.frame_interval = settings.frame_interval_ms.map(Duration::from_millis);

        self.resources.acquire(&mut *self.backend, settings)?;
        self.tree = Some(WidgetTree::build(message, settings)?);
        self.backend.set_pointer_visible(true);
        self.transition(Phase::Initialized);
        Ok(())
    }

    /// Blocks until a dismissal trigger fires.
    pub fn run(&mut self) -> Option<DismissCause> {
        if self.phase != Phase::Initialized {
            return self.state.cause();
        }

        if self.backend.num_controllers() > 0 {
            if let Some(id) = self.backend.open_controller(0) {
                tracing::debug!(controller = id.0, "controller opened");
                self.state.set_controller(id);
            }
        }
        self.transition(Phase::Running);

        // First frame goes out before any input is polled.
        self.step();
        self.present();

        while !self.state.is_done() {
            let started = Instant::now();
            let observed = match self.tree.as_mut() {
                Some(tree) => self.router.poll(&mut *self.backend, tree, &mut self.state),
                None => false,
            };
            if observed {
                self.step();
            }
            self.present();
            self.pace(started);
        }

        self.transition(Phase::Dismissed);
        self.state.cause()
    }

    /// Closes the controller, tears down the widgets, then releases the backend resources.
    /// Repeated calls do nothing.
    pub fn halt(&mut self) {
        if self.phase == Phase::Halted {
            return;
        }
        if let Some(id) = self.state.take_controller() {
            self.backend.close_controller(id);
            tracing::debug!(controller = id.0, "controller closed");
        }
        if let Some(mut tree) = self.tree.take() {
            tree.teardown();
        }
        self.resources.release(&mut *self.backend);
        if self.phase != Phase::Uninitialized {
            self.backend.set_pointer_visible(false);
        }
        self.transition(Phase::Halted);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &LoopState {
        &self.state
    }

    pub fn resources(&self) -> &BackendResources {
        &self.resources
    }

    pub fn tree(&self) -> Option<&WidgetTree> {
        self.tree.as_ref()
    }

    /// One toolkit logic + draw pass, uploaded to the texture.
    fn step(&mut self) {
        let Some(tree) = self.tree.as_mut() else {
            return;
        };
        let actions = tree.logic();
        self.router
            .deliver_actions(&actions, tree.dismiss_handler(), &mut self.state);
        if let Some(surface) = self.resources.surface_mut() {
            tree.draw(surface);
        }
        if let Err(err) = self.resources.upload(&mut *self.backend) {
            tracing::warn!(error = %err, "texture update failed");
        }
    }

    fn present(&mut self) {
        if let Err(err) = self.resources.present(&mut *self.backend) {
            tracing::warn!(error = %err, "present failed");
        }
    }

    fn pace(&self, started: Instant) {
        let Some(interval) = self.frame_interval else {
            return;
        };
        let elapsed = started.elapsed();
        if elapsed < interval {
            std::thread::sleep(interval - elapsed);
        }
    }

    fn transition(&mut self, next: Phase) {
        tracing::debug!(from = ?self.phase, to = ?next, "dialog phase");
        self.phase = next;
    }
}

impl<B: Backend + ?Sized> Drop for DialogSession<'_, B> {
    fn drop(&mut self) {
        self.halt();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dialog/controller.rs"]
mod tests;
