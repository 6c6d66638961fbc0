//! Light theme is the only theme.

use wasm_bindgen::JsCast;

const THEME_KEY: &str = "theme";

pub fn force_light_theme() {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };

    if let Some(root) = document.document_element() {
        if let Err(e) = root.class_list().remove_1("dark") {
            tracing::debug!(?e, "could not drop dark class");
        }
    }
    match window.local_storage() {
        Ok(Some(storage)) => {
            if storage.set_item(THEME_KEY, "light").is_err() {
                tracing::warn!("could not persist theme");
            }
        }
        _ => tracing::debug!("localStorage unavailable"),
    }
    if let Some(toggle) = document
        .get_element_by_id("themeToggle")
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        if let Err(e) = toggle.style().set_property("display", "none") {
            tracing::debug!(?e, "could not hide theme toggle");
        }
    }
}
