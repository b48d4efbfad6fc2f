//! The shell aggregate.
//!
//! [`Shell`] owns the session, both history logs, the filesystem and the
//! input handler, and is the only thing that mutates them. A command runs
//! in two steps so the presentation can wait out the processing delay in
//! between:
//!
//! 1. [`Shell::submit`] parses the line, marks the session busy and picks a
//!    delay.
//! 2. [`Shell::complete`] evaluates the command, applies its effect,
//!    records the command and output together and clears the busy flag.
//!
//! [`Shell::run`] does both at once.

use chrono::{DateTime, Local};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::commands::{Command, CommandResult, Context, Effect, execute_command};
use crate::config::{HOST_NAME, ShellConfig, USER_NAME};
use crate::error::ShellError;
use crate::filesystem::VirtualFs;
use crate::history::History;
use crate::input::{InputAction, InputHandler, Key};
use crate::models::{OutputEntry, Section, Session};

/// A submitted command waiting for its delay to elapse.
#[derive(Debug)]
#[must_use = "a pending command keeps the shell busy until completed"]
pub struct Pending {
    raw: String,
    command: Command,
    delay_ms: u64,
}

impl Pending {
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn command(&self) -> &Command {
        &self.command
    }

    /// Artificial processing delay to wait before [`Shell::complete`].
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }
}

/// Outcome of a completed command.
#[derive(Clone, Debug, PartialEq)]
pub struct Completed {
    /// Recorded output. `None` only for `clear`.
    pub entry: Option<OutputEntry>,
    /// Applied effect, as a notification for the presentation.
    pub effect: Option<Effect>,
}

pub struct Shell {
    session: Session,
    history: History,
    fs: VirtualFs,
    input: InputHandler,
    config: ShellConfig,
    rng: StdRng,
    clock: fn() -> DateTime<Local>,
    /// Next section a running tour visits
    tour: Option<Section>,
}

impl Shell {
    pub fn new() -> Self {
        Self::with_config(ShellConfig::default())
    }

    pub fn with_config(config: ShellConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut session = Session::new();
        session.set_theme(config.theme.as_str());

        Self {
            session,
            history: History::new(),
            fs: VirtualFs::portfolio(),
            input: InputHandler::new(),
            config,
            rng,
            clock: Local::now,
            tour: None,
        }
    }

    /// Replace the clock read by `date`.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Local>) -> Self {
        self.clock = clock;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn filesystem(&self) -> &VirtualFs {
        &self.fs
    }

    pub fn input(&self) -> &InputHandler {
        &self.input
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Prompt text, e.g. `guest@portfolio:~/projects$`.
    pub fn prompt(&self) -> String {
        format!("{}@{}:{}$", USER_NAME, HOST_NAME, self.session.display_path())
    }

    // =========================================================================
    // Command Lifecycle
    // =========================================================================

    /// Accept a line for execution and mark the session busy.
    ///
    /// Rejects blank lines and any submission while another command is
    /// pending. Neither rejection touches the history.
    ///
    /// The session stays busy until the returned [`Pending`] is handed to
    /// [`Shell::complete`] or [`Shell::cancel`]; dropping it instead leaves
    /// every later submission rejected with [`ShellError::Busy`].
    pub fn submit(&mut self, raw: &str) -> Result<Pending, ShellError> {
        if self.session.processing {
            warn!("rejected '{}': a command is already running", raw);
            return Err(ShellError::Busy);
        }
        if raw.trim().is_empty() {
            return Err(ShellError::EmptyInput);
        }

        let (lo, hi) = self.config.delay_bounds();
        let delay_ms = self.rng.gen_range(lo..=hi);
        self.session.processing = true;

        Ok(Pending {
            raw: raw.to_string(),
            command: Command::parse(raw),
            delay_ms,
        })
    }

    /// Evaluate a pending command and record it. Always leaves the
    /// session idle.
    pub fn complete(&mut self, pending: Pending) -> Completed {
        let Pending { raw, command, .. } = pending;
        debug!("dispatch {:?}", command);

        let CommandResult { output, effect } = {
            let mut ctx = Context {
                fs: &self.fs,
                history: &self.history,
                now: (self.clock)(),
                rng: &mut self.rng,
            };
            execute_command(&command, &self.session, &mut ctx)
        };

        if let Some(effect) = &effect {
            self.apply(effect);
        }
        let entry = output.map(|output| self.history.record(raw, output).clone());

        self.session.processing = false;
        Completed { entry, effect }
    }

    /// Abandon a pending command without evaluating it. Nothing is
    /// recorded and the session goes idle.
    pub fn cancel(&mut self, pending: Pending) {
        debug!("cancelled '{}'", pending.raw);
        self.session.processing = false;
    }

    /// Submit and complete without waiting.
    pub fn run(&mut self, raw: &str) -> Result<Completed, ShellError> {
        let pending = self.submit(raw)?;
        Ok(self.complete(pending))
    }

    fn apply(&mut self, effect: &Effect) {
        match effect {
            Effect::ClearHistory => self.history.clear(),
            Effect::ChangeDir(path) => self.session.cwd = path.clone(),
            Effect::Navigate(section) => self.session.navigate(*section),
            Effect::OpenEditor(section) => self.session.open_editor(*section),
            Effect::StartTour => {
                if self.tour.is_some() {
                    info!("tour restarted");
                } else {
                    info!("tour started");
                }
                self.tour = Some(Section::ALL[0]);
            }
        }
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Route a key to the input handler. Returns a pending command when
    /// the key submitted one.
    ///
    /// Keys are dropped while a command is pending; the presentation
    /// withdraws the prompt during that time.
    pub fn key(&mut self, key: Key) -> Option<Pending> {
        if self.session.processing {
            debug!("key {:?} ignored while processing", key);
            return None;
        }

        match self.input.handle_key(key, &self.history)? {
            InputAction::Submit(line) => match self.submit(&line) {
                Ok(pending) => Some(pending),
                Err(e) => {
                    warn!("submission rejected: {}", e);
                    None
                }
            },
            InputAction::CloseOverlay => {
                self.close_editor();
                None
            }
        }
    }

    /// The prompt text changed.
    pub fn set_input(&mut self, text: impl Into<String>) {
        if self.session.processing {
            return;
        }
        self.input.set_buffer(text);
    }

    // =========================================================================
    // Tour
    // =========================================================================

    pub fn tour_active(&self) -> bool {
        self.tour.is_some()
    }

    /// Advance a running tour by one section.
    ///
    /// Visits every section once, in order; the tick on the last section
    /// ends the tour. Returns `None` when no tour is running.
    pub fn tour_tick(&mut self) -> Option<Section> {
        let section = self.tour?;
        self.session.navigate(section);

        let next = section.next();
        if next == Section::ALL[0] {
            self.tour = None;
            info!("tour finished");
        } else {
            self.tour = Some(next);
        }
        Some(section)
    }

    // =========================================================================
    // Mode
    // =========================================================================

    /// External request to open a section file in the editor.
    pub fn open_file(&mut self, file_name: &str) -> Result<Section, ShellError> {
        self.session.open_file(file_name)
    }

    pub fn close_editor(&mut self) -> bool {
        self.session.close_editor()
    }

    /// Leave the editor from its save action. Same transition as closing.
    pub fn save_and_exit(&mut self) -> bool {
        debug!("save and exit");
        self.session.close_editor()
    }

    pub fn finish_loading(&mut self) {
        self.session.finish_loading();
    }

    pub fn toggle_shell_view(&mut self) -> bool {
        self.session.toggle_shell_view()
    }

    pub fn set_theme(&mut self, theme: impl Into<String>) {
        self.session.set_theme(theme);
    }

    /// Flip the compact history view. Returns the new flag.
    pub fn toggle_compact_view(&mut self) -> bool {
        self.history.toggle_compact()
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}
