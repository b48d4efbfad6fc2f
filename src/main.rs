mod app;
mod components;
mod logger;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Debug);

    let Some(root) = document().get_element_by_id("app") else {
        log::error!("missing #app element");
        return;
    };

    mount_to(root.unchecked_into::<web_sys::HtmlElement>(), App).forget();
}
