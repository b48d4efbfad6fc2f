//! Data models shared across the shell.
//!
//! - [`Section`] - Fixed set of content pages
//! - [`Output`], [`OutputEntry`], [`Payload`] - Structured command output
//! - [`Session`], [`Mode`] - Mutable session aggregate

mod output;
mod section;
mod session;

pub use output::{Link, Output, OutputEntry, OutputKind, Payload};
pub use section::Section;
pub use session::{Mode, ROOT_PATH, Session};
