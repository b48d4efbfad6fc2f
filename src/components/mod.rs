//! UI components built with Leptos.
//!
//! - [`terminal`] - Terminal emulator interface and the screen around it
//! - [`editor`] - Editor overlay and the direct section view

pub mod editor;
pub mod terminal;

pub use terminal::Screen;
