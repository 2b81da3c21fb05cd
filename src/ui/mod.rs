//! Rendering and widget layer.
//!
//! `core` holds backend-independent primitives (geometry, styles, paint commands, hit
//! testing), `widgets` the dialog toolkit painting into a `Surface`, and `backend` the host
//! display/input implementations the surface is presented through.

pub mod backend;
pub mod core;
pub mod surface;
pub mod widgets;
