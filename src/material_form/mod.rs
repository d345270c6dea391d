//! The material edit form, its color chooser, and the modal wrapper.
//!
//! The form binds a caller-owned [`crate::material::Material`] to editable
//! fields: it takes a record in via `load`, holds an exclusively-owned
//! working copy while visible, and hands the edited record back via
//! `extract`. It never stores anything itself. Committed changes surface as
//! a no-payload "edited" notification that hosts use for live preview.

pub mod color_picker;
pub mod dialog;
pub mod form;
pub mod preview;
pub mod signal;
