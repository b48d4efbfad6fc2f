//! Interactive shell emulator behind the terminal portfolio.
//!
//! Platform independent: no DOM, no timers. The web front end owns a
//! [`Shell`], forwards key events to it and waits out the delays it hands
//! back.
//!
//! ```
//! use termfolio_core::{Shell, ShellConfig};
//!
//! let mut shell = Shell::with_config(ShellConfig { seed: Some(7), ..Default::default() });
//! let done = shell.run("cd projects").unwrap();
//! assert!(done.entry.is_some());
//! assert_eq!(shell.session().cwd(), "/projects");
//! ```

pub mod autocomplete;
pub mod commands;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod history;
pub mod input;
pub mod models;
mod mode;
pub mod shell;

pub use commands::{Command, Effect};
pub use config::ShellConfig;
pub use error::ShellError;
pub use filesystem::VirtualFs;
pub use history::History;
pub use input::{InputHandler, Key};
pub use models::{Link, Mode, Output, OutputEntry, OutputKind, Payload, Section, Session};
pub use shell::{Completed, Pending, Shell};
