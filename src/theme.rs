use crate::constants::{DARK_CLASS, THEME_TOGGLE_ID};
use crate::core::theme::{FaviconLink, DARK_QUERY, FAVICON_LINKS, STORAGE_KEY};
use crate::core::Theme;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The flag scenes receive at render time: whether `<html>` carries the dark class.
pub fn is_dark_active(document: &web::Document) -> bool {
    document
        .document_element()
        .map(|el| el.class_list().contains(DARK_CLASS))
        .unwrap_or(false)
}

fn storage() -> Option<web::Storage> {
    web::window()?.local_storage().ok().flatten()
}

fn stored_value() -> Option<String> {
    storage()?.get_item(STORAGE_KEY).ok().flatten()
}

fn store(theme: Theme) {
    if let Some(s) = storage() {
        if let Err(e) = s.set_item(STORAGE_KEY, theme.as_str()) {
            log::warn!("[theme] could not persist preference: {:?}", e);
        }
    }
}

fn dark_query() -> Option<web::MediaQueryList> {
    web::window()?.match_media(DARK_QUERY).ok().flatten()
}

fn system_prefers_dark() -> bool {
    dark_query().map(|q| q.matches()).unwrap_or(false)
}

pub fn current_theme() -> Theme {
    Theme::resolve(stored_value().as_deref(), system_prefers_dark())
}

pub fn apply(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        let classes = root.class_list();
        _ = if theme.is_dark() {
            classes.add_1(DARK_CLASS)
        } else {
            classes.remove_1(DARK_CLASS)
        };
    }
    if let Some(body) = document.body() {
        let (background, text) = theme.body_colors();
        dom::set_style(&body, "background-color", background);
        dom::set_style(&body, "color", text);
    }
    for link in &FAVICON_LINKS {
        update_favicon_link(document, link, theme);
    }
    update_toggle_icon(document, theme);
}

fn update_favicon_link(document: &web::Document, link: &FaviconLink, theme: Theme) {
    let el = match document.get_element_by_id(link.id) {
        Some(el) => el,
        None => {
            let Ok(el) = document.create_element("link") else { return };
            el.set_id(link.id);
            if let Some(head) = document.head() {
                _ = head.append_child(&el);
            }
            el
        }
    };
    let Ok(el) = el.dyn_into::<web::HtmlLinkElement>() else { return };
    el.set_rel(link.rel);
    if let Some(mime) = link.mime {
        el.set_type(mime);
    }
    el.set_href(&theme.favicon_href(link));
}

fn update_toggle_icon(document: &web::Document, theme: Theme) {
    let Some(button) = document.get_element_by_id(THEME_TOGGLE_ID) else { return };
    let Ok(Some(icon)) = button.query_selector("svg") else { return };
    let classes = icon.class_list();
    _ = classes.remove_1(theme.toggled().icon_class());
    _ = classes.add_1(theme.icon_class());
}

/// Flip the effective theme and persist the choice.
pub fn toggle() {
    let next = current_theme().toggled();
    store(next);
    if let Some(document) = dom::window_document() {
        apply(&document, next);
    }
    log::info!("[theme] switched to {}", next.as_str());
}

/// Apply the effective theme, wire the toggle button and follow the system
/// preference while the user has not chosen one.
pub fn init(document: &web::Document) {
    let theme = current_theme();
    apply(document, theme);
    dom::add_click_listener(document, THEME_TOGGLE_ID, toggle);

    if let Some(query) = dark_query() {
        let doc = document.clone();
        dom::listen(query.as_ref(), "change", move |ev| {
            if stored_value().as_deref().and_then(Theme::parse).is_some() {
                return;
            }
            if let Some(ev) = ev.dyn_ref::<web::MediaQueryListEvent>() {
                let theme = Theme::from_system(ev.matches());
                apply(&doc, theme);
                log::info!("[theme] following system preference: {}", theme.as_str());
            }
        });
    }
    log::info!("[theme] initial theme {}", theme.as_str());
}
