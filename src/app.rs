//! Root application module.
//!
//! Contains the main App component and the AppContext that owns the shell
//! and its timers.

use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use termfolio_core::config::{DEFAULT_THEME, LIGHT_THEME};
use termfolio_core::{Completed, Effect, Key, Pending, Shell, ShellConfig};

use crate::components::Screen;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// with `use_context::<AppContext>()`. The [`Shell`] holds all session
/// state; this type only adds the browser timers around it.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The shell emulator.
    pub shell: RwSignal<Shell>,
    /// Running `launch_portfolio` tour. Dropping it cancels the timer.
    tour: StoredValue<Option<Interval>, LocalStorage>,
}

impl AppContext {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            shell: RwSignal::new(Shell::with_config(config)),
            tour: StoredValue::new_local(None),
        }
    }

    /// Forward a key to the shell, scheduling any command it submits.
    pub fn key(&self, key: Key) {
        if let Some(pending) = self.shell.try_update(|s| s.key(key)).flatten() {
            self.schedule(pending);
        }
    }

    /// Forward a text change of the prompt.
    pub fn set_input(&self, text: String) {
        self.shell.update(|s| s.set_input(text));
    }

    /// Complete a pending command once its processing delay has passed.
    fn schedule(&self, pending: Pending) {
        let ctx = *self;
        log::debug!("{:?} due in {}ms", pending.command(), pending.delay_ms());
        let delay = u32::try_from(pending.delay_ms()).unwrap_or(u32::MAX);

        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            if let Some(done) = ctx.shell.try_update(|s| s.complete(pending)) {
                ctx.on_completed(done);
            }
        });
    }

    fn on_completed(&self, done: Completed) {
        match done.effect {
            Some(Effect::StartTour) => self.start_tour(),
            Some(Effect::Navigate(_) | Effect::OpenEditor(_)) => self.load_editor(),
            _ => {}
        }
    }

    /// Clear the editor's loading flag after the configured delay.
    pub fn load_editor(&self) {
        let ctx = *self;
        let delay = self
            .shell
            .with_untracked(|s| s.config().editor_load_delay_ms);
        let delay = u32::try_from(delay).unwrap_or(u32::MAX);

        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            ctx.shell.update(|s| s.finish_loading());
        });
    }

    /// Start (or restart) the tour timer.
    fn start_tour(&self) {
        let ctx = *self;
        let interval_ms = self.shell.with_untracked(|s| s.config().tour_interval_ms);

        let interval = Interval::new(interval_ms, move || {
            let still_running = ctx
                .shell
                .try_update(|s| {
                    s.tour_tick();
                    s.tour_active()
                })
                .unwrap_or(false);
            ctx.load_editor();

            if !still_running {
                // The interval cannot be dropped from inside its own callback.
                spawn_local(async move {
                    ctx.tour.set_value(None);
                });
            }
        });

        // Replacing the old interval cancels it.
        self.tour.set_value(Some(interval));
    }

    /// Open a section file in the editor, as when a file name is clicked.
    pub fn open_file(&self, file_name: &'static str) {
        let opened = self.shell.try_update(|s| s.open_file(file_name));
        match opened {
            Some(Ok(_)) => self.load_editor(),
            Some(Err(e)) => log::warn!("{}", e),
            None => {}
        }
    }

    /// Switch between the default and the light theme.
    pub fn toggle_theme(&self) {
        self.shell.update(|s| {
            let next = if s.session().theme() == LIGHT_THEME {
                DEFAULT_THEME
            } else {
                LIGHT_THEME
            };
            s.set_theme(next);
        });
    }

    pub fn toggle_shell_view(&self) {
        let visible = self.shell.try_update(|s| s.toggle_shell_view());
        if visible == Some(true) {
            self.load_editor();
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::default();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    background: #0a0e27;
                    color: #e0e0e0;
                    font-family: 'Courier New', monospace;
                ">
                    <h1 style="color: #ff6b6b;">"Something went wrong"</h1>
                    <ul style="color: #ff6b6b;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Screen />
        </ErrorBoundary>
    }
}
