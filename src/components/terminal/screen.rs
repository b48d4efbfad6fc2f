//! Top-level screen component.
//!
//! Switches between the shell (terminal plus editor overlay) and the
//! direct section view.

use leptos::prelude::*;

use super::terminal::Terminal;
use crate::app::AppContext;
use crate::components::editor::{EditorOverlay, SectionView};

stylance::import_crate_style!(css, "src/components/terminal/screen.module.css");

/// Auto-scroll output to bottom when history changes.
fn setup_autoscroll_effect(ctx: AppContext, output_ref: NodeRef<leptos::html::Div>) {
    Effect::new(move || {
        ctx.shell.with(|s| s.history().len());
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });
}

#[component]
pub fn Screen() -> impl IntoView {
    let Some(ctx) = use_context::<AppContext>() else {
        log::error!("AppContext must be provided at root");
        return ().into_any();
    };

    let output_ref = NodeRef::<leptos::html::Div>::new();
    setup_autoscroll_effect(ctx, output_ref);

    let shell_visible = move || ctx.shell.with(|s| s.session().shell_visible());
    let overlay_open = move || ctx.shell.with(|s| s.session().mode().is_overlay());
    let theme = move || ctx.shell.with(|s| s.session().theme().to_string());

    view! {
        <div class=css::screen data-theme=theme>
            <div class=css::toolbar>
                <button class=css::toggle on:click=move |_| ctx.toggle_shell_view()>
                    {move || if shell_visible() { "Direct view" } else { "Shell view" }}
                </button>
                <button class=css::toggle on:click=move |_| ctx.toggle_theme()>
                    {move || format!("Theme: {}", theme())}
                </button>
            </div>

            <div class=css::main>
                <Show
                    when=shell_visible
                    fallback=|| view! { <SectionView /> }
                >
                    <Terminal output_ref=output_ref />
                    <Show when=overlay_open fallback=|| ()>
                        <EditorOverlay />
                    </Show>
                </Show>
            </div>
        </div>
    }
    .into_any()
}
