use leptos::prelude::CollectView;
use leptos::prelude::*;
use termfolio_core::{OutputEntry, OutputKind, Payload};

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

/// CSS class for an output kind
fn kind_class(kind: OutputKind) -> &'static str {
    match kind {
        OutputKind::Success => css::textGreen,
        OutputKind::Error => css::textRed,
        OutputKind::Info => css::textYellow,
        OutputKind::Special => css::textGlow,
        OutputKind::System => css::textFg,
    }
}

#[component]
pub fn Output(entry: OutputEntry) -> impl IntoView {
    let class = kind_class(entry.kind);

    match entry.payload {
        Payload::Text(text) => view! {
            <div class=format!("{} {}", css::line, class)>{text}</div>
        }
        .into_any(),
        Payload::Ascii(art) => view! {
            <pre class=format!("{} {} glow", css::ascii, class)>{art}</pre>
        }
        .into_any(),
        Payload::List(items) => view! {
            <div class=format!("{} {}", css::list, class)>
                {items.into_iter().map(|item| {
                    let name_class = if item.ends_with('/') {
                        format!("{} {}", css::textCyan, css::fontBold)
                    } else {
                        css::textFg.to_string()
                    };
                    view! { <span class=name_class>{item}</span> }
                }).collect_view()}
            </div>
        }
        .into_any(),
        Payload::Table(rows) => view! {
            <div class=css::table>
                {rows.into_iter().map(|(key, value)| view! {
                    <div class=css::row>
                        <span class=format!("{} {}", css::key, class)>{key}</span>
                        <span class=css::textFg>{value}</span>
                    </div>
                }).collect_view()}
            </div>
        }
        .into_any(),
        Payload::Links(links) => view! {
            <div class=css::table>
                {links.into_iter().map(|link| { let href = link.url.clone(); view! {
                    <div class=css::row>
                        <span class=format!("{} {}", css::key, class)>{link.label}</span>
                        <a class=css::link href=href target="_blank" rel="noopener">
                            {link.url}
                        </a>
                    </div>
                }}).collect_view()}
            </div>
        }
        .into_any(),
    }
}
