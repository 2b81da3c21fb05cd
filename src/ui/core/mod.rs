//! Toolkit-independent UI primitives: geometry, styles, paint commands, hit testing.

pub mod format;
pub mod geom;
pub mod id;
pub mod layout;
pub mod painter;
pub mod runtime;

#[path = "primitives/style.rs"]
pub mod style;

#[path = "scene/tree.rs"]
pub mod tree;

#[path = "scene/widget.rs"]
pub mod widget;
