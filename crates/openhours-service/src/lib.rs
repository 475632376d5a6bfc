//! Rendering and form handling for opening hours fields.
//!
//! Each surface is a plain options struct plus a pure function: the caller
//! supplies stored state, settings and the current time, and gets back
//! values ready to display.

pub mod column;
pub mod entry;
pub mod error;
pub mod evaluator;
pub mod form;
pub mod state;
