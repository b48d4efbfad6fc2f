//! Terminal view component.
//!
//! The banner, the recorded history and the prompt.

use leptos::prelude::*;

use termfolio_core::config::{
    APP_NAME, APP_TAGLINE, APP_VERSION, ASCII_BANNER, HOST_NAME, OWNER_NAME, USER_NAME,
};

use crate::app::AppContext;
use crate::components::terminal::{Input, Output};

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

/// Focus the terminal input element.
fn focus_input() {
    use wasm_bindgen::JsCast;
    if let Some(window) = web_sys::window()
        && let Some(document) = window.document()
        && let Some(input) = document.query_selector("input").ok().flatten()
        && let Ok(element) = input.dyn_into::<web_sys::HtmlElement>()
    {
        let _ = element.focus();
    }
}

#[component]
fn Banner() -> impl IntoView {
    view! {
        <div class=css::banner>
            <pre class=format!("{} glow", css::ascii)>{ASCII_BANNER}</pre>
            <div class=css::tagline>{format!("{} | {}", OWNER_NAME, APP_TAGLINE)}</div>
            <div class=css::hint>
                {format!("{} v{}. Type 'help' for available commands.", APP_NAME, APP_VERSION)}
            </div>
        </div>
    }
}

#[component]
pub fn Terminal(output_ref: NodeRef<leptos::html::Div>) -> impl IntoView {
    let Some(ctx) = use_context::<AppContext>() else {
        return ().into_any();
    };

    // (id, command, output) triples of the visible history
    let rows = move || {
        ctx.shell.with(|s| {
            s.history()
                .view()
                .entries
                .into_iter()
                .map(|(cmd, out)| (out.id, cmd.raw.clone(), out.clone()))
                .collect::<Vec<_>>()
        })
    };
    let hidden = move || ctx.shell.with(|s| s.history().view().hidden);
    let compact = move || ctx.shell.with(|s| s.history().is_compact());
    let processing = move || ctx.shell.with(|s| s.session().processing());
    let prompt = Signal::derive(move || ctx.shell.with(|s| s.prompt()));
    let author = format!("{}@{}", USER_NAME, HOST_NAME);

    view! {
        <div class=css::container on:click=move |_| focus_input()>
            <div node_ref=output_ref class=css::output>
                <Banner />

                <div class=css::viewBar>
                    <Show when=move || { hidden() > 0 } fallback=|| ()>
                        <span class=css::hidden>
                            {move || format!("{} earlier entries hidden", hidden())}
                        </span>
                    </Show>
                    <button
                        class=css::compactToggle
                        on:click=move |_| {
                            ctx.shell.update(|s| {
                                s.toggle_compact_view();
                            })
                        }
                    >
                        {move || if compact() { "Show all" } else { "Compact" }}
                    </button>
                </div>

                <For
                    each=rows
                    key=|(id, _, _)| *id
                    children=move |(_, raw, entry)| {
                        let author = author.clone();
                        view! {
                            <div class=css::command>
                                <span class=format!("{} glow", css::author)>{author}</span>
                                <span class=css::separator>"$ "</span>
                                <span>{raw}</span>
                            </div>
                            <Output entry=entry />
                        }
                    }
                />
            </div>

            <div class=css::inputArea>
                <Show
                    when=move || !processing()
                    fallback=|| view! { <div class=css::processing>"processing..."</div> }
                >
                    <Input prompt=prompt />
                </Show>
            </div>
        </div>
    }
    .into_any()
}
