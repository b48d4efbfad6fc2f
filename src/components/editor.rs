//! Editor overlay and direct section view.
//!
//! Section content comes from elsewhere; both views only show which
//! section is active and offer the transitions back.

use leptos::prelude::CollectView;
use leptos::prelude::*;

use termfolio_core::commands::manual;
use termfolio_core::{Mode, Section};

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/editor.module.css");

/// One-line description of a section, from its manual page.
fn summary(section: Section) -> &'static str {
    manual::lookup(section.name()).map_or("", |m| m.summary)
}

#[component]
fn FileTabs(active: Signal<Section>) -> impl IntoView {
    let Some(ctx) = use_context::<AppContext>() else {
        return ().into_any();
    };

    view! {
        <div class=css::tabs>
            {Section::ALL.into_iter().map(|section| {
                let class_name = move || if active.get() == section {
                    format!("{} {}", css::tab, css::tabActive)
                } else {
                    css::tab.to_string()
                };
                view! {
                    <button class=class_name on:click=move |_| ctx.open_file(section.file_name())>
                        {section.file_name()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
    .into_any()
}

#[component]
pub fn EditorOverlay() -> impl IntoView {
    let Some(ctx) = use_context::<AppContext>() else {
        return ().into_any();
    };

    let mode = move || ctx.shell.with(|s| s.session().mode().clone());
    let section = Signal::derive(move || ctx.shell.with(|s| s.session().section()));

    let body = move || match mode() {
        Mode::EditorOverlay { loading: true, file_name, .. } => view! {
            <div class=css::loading>{format!("Loading {}...", file_name)}</div>
        }
        .into_any(),
        Mode::EditorOverlay { section, file_name, .. } => view! {
            <div class=css::content>
                <div class=css::fileName>{file_name}</div>
                <div>{summary(section)}</div>
            </div>
        }
        .into_any(),
        Mode::TerminalOnly => ().into_any(),
    };

    view! {
        <div class=css::overlay>
            <div class=css::header>
                <FileTabs active=section />
                <div class=css::actions>
                    <button class=css::save on:click=move |_| {
                        ctx.shell.update(|s| {
                            s.save_and_exit();
                        })
                    }>
                        "Save & Exit"
                    </button>
                    <button class=css::close on:click=move |_| {
                        ctx.shell.update(|s| {
                            s.close_editor();
                        })
                    }>
                        "x"
                    </button>
                </div>
            </div>
            {body}
        </div>
    }
    .into_any()
}

#[component]
pub fn SectionView() -> impl IntoView {
    let Some(ctx) = use_context::<AppContext>() else {
        return ().into_any();
    };

    let section = Signal::derive(move || ctx.shell.with(|s| s.session().section()));

    view! {
        <div class=css::sectionView>
            <nav class=css::nav>
                {Section::ALL.into_iter().map(|target| {
                    let class_name = move || if section.get() == target {
                        format!("{} {}", css::tab, css::tabActive)
                    } else {
                        css::tab.to_string()
                    };
                    view! {
                        <button
                            class=class_name
                            on:click=move |_| {
                                let ran = ctx.shell.try_update(|s| s.run(target.name()));
                                if let Some(Err(e)) = ran {
                                    log::warn!("{}", e);
                                }
                            }
                        >
                            {target.name()}
                        </button>
                    }
                }).collect_view()}
            </nav>
            <h1 class=css::title>{move || section.get().name()}</h1>
            <p>{move || summary(section.get())}</p>
        </div>
    }
    .into_any()
}
