//! Terminal input component with suggestions and history recall.
//!
//! The buffer, the recall cursor and the suggestion pane all live in the
//! shell's input handler; this component only forwards events and renders.

use leptos::prelude::CollectView;
use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use termfolio_core::Key;

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

#[component]
pub fn Input(#[prop(into)] prompt: Signal<String>) -> impl IntoView {
    let Some(ctx) = use_context::<AppContext>() else {
        return ().into_any();
    };
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let buffer = move || ctx.shell.with(|s| s.input().buffer().to_string());
    let pane_open = move || ctx.shell.with(|s| s.input().suggestions().is_visible());

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let move_cursor_to_end = move || {
        if let Some(input) = input_ref.get() {
            let len = input.value().len() as u32;
            let _ = input.set_selection_range(len, len);
        }
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        let key = Key::from_event(&ev.key(), ev.ctrl_key());
        let caret_key = matches!(key, Key::ArrowLeft | Key::ArrowRight);
        if !key.is_handled() || (caret_key && !pane_open()) {
            return;
        }
        if key != Key::Enter {
            ev.prevent_default();
        }

        ctx.key(key);
        if matches!(key, Key::ArrowUp | Key::ArrowDown | Key::Tab) {
            move_cursor_to_end();
        }
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        ctx.set_input(input.value());
    };

    let suggestions_view = move || {
        ctx.shell.with(|s| {
            let suggestions = s.input().suggestions();
            if !suggestions.is_visible() {
                return None;
            }
            let active = suggestions.active_index();
            Some(view! {
                <div class=css::suggestions>
                    {suggestions.candidates().iter().enumerate().map(|(i, name)| {
                        let class_name = if i == active {
                            format!("{} {}", css::suggestion, css::suggestionActive)
                        } else {
                            css::suggestion.to_string()
                        };
                        view! { <span class=class_name>{name.clone()}</span> }
                    }).collect_view()}
                </div>
            })
        })
    };

    view! {
        <div class=css::inputWrapper>
            <div class=css::line>
                <span class=css::prompt>{prompt}</span>
                <input
                    node_ref=input_ref
                    type="text"
                    class=css::input
                    autocomplete="off"
                    spellcheck="false"
                    prop:value=buffer
                    on:input=handle_input
                    on:keydown=handle_keydown
                />
            </div>

            {suggestions_view}
        </div>
    }
    .into_any()
}
