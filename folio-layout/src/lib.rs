//! Responsive sidebar layout state.
//!
//! The crate is UI-agnostic and split into three layers:
//! - [`viewport`]: breakpoint classification and the injected
//!   [`ViewportSignal`];
//! - [`LayoutController`]: single owner of the sidebar open flag, driven by
//!   the pure [`reduce`] transition table;
//! - presentation helpers ([`backdrop_visible`], [`PanelTransition`]) that
//!   a view layer turns into pixels.
//!
//! # Quick Example
//!
//! ```
//! use folio_layout::{
//!     Breakpoint, LayoutController, ViewportClassifier, backdrop_visible,
//! };
//!
//! let mut viewport = ViewportClassifier::new(Breakpoint::default(), 1280.0);
//! let mut layout = LayoutController::initialize(&viewport);
//! assert!(layout.is_open());
//!
//! if let Some(class) = viewport.observe(600.0) {
//!     layout.on_viewport_class_change(class.is_mobile());
//! }
//! assert!(!layout.is_open());
//!
//! layout.toggle();
//! assert!(backdrop_visible(layout.is_open(), layout.class()));
//! ```

mod controller;
mod presentation;
mod reducer;
pub mod viewport;

pub use controller::LayoutController;
pub use presentation::{
    DEFAULT_PANEL_WIDTH, DEFAULT_TRANSITION_MS, PanelFrame, PanelTransition,
    backdrop_visible,
};
pub use reducer::{LayoutEvent, initial_flag, reduce};
pub use viewport::{
    Breakpoint, DEFAULT_BREAKPOINT, FixedViewport, ViewportClass,
    ViewportClassifier, ViewportSignal,
};
