//! Page element helpers
//!
//! Thin wrappers over web-sys for the handful of element kinds the tile pair
//! page uses: select controls, a free-text group input, message areas, and
//! the shareable link anchor.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Event, HtmlAnchorElement, HtmlElement, HtmlInputElement, HtmlOptionElement,
    HtmlSelectElement, Window,
};

use crate::error::TilePairError;

const ERROR_CLASS: &str = "error";

fn js_error(context: &str, value: JsValue) -> TilePairError {
    TilePairError::Dom(format!("{}: {:?}", context, value))
}

pub fn window() -> Result<Window, TilePairError> {
    web_sys::window().ok_or_else(|| TilePairError::Dom("no window".to_string()))
}

pub fn document() -> Result<Document, TilePairError> {
    window()?
        .document()
        .ok_or_else(|| TilePairError::Dom("no document".to_string()))
}

/// Look up `#id` and cast it to the expected element type
pub fn element_by_id<T: JsCast>(id: &str) -> Result<T, TilePairError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| TilePairError::Dom(format!("missing element #{}", id)))?
        .dyn_into::<T>()
        .map_err(|_| TilePairError::Dom(format!("element #{} has unexpected type", id)))
}

fn non_empty(value: String) -> Option<String> {
    Some(value).filter(|v| !v.is_empty())
}

/// Current value of a select control, `None` when nothing is selected
pub fn selected_value(id: &str) -> Result<Option<String>, TilePairError> {
    let select: HtmlSelectElement = element_by_id(id)?;
    Ok(non_empty(select.value()))
}

/// Replace the options of a select control and mark `selected`
pub fn update_select_options(
    id: &str,
    options: &[String],
    selected: Option<&str>,
) -> Result<(), TilePairError> {
    let select: HtmlSelectElement = element_by_id(id)?;
    select.set_length(0);

    for value in options {
        let option = HtmlOptionElement::new_with_text_and_value(value, value)
            .map_err(|e| js_error("create option", e))?;
        select
            .add_with_html_option_element(&option)
            .map_err(|e| js_error("add option", e))?;
    }

    match selected {
        Some(value) => select.set_value(value),
        None => select.set_selected_index(-1),
    }
    Ok(())
}

/// Call `handler` with the new value whenever the select control changes
pub fn on_select_change<F>(id: &str, mut handler: F) -> Result<(), TilePairError>
where
    F: FnMut(Option<String>) + 'static,
{
    let select: HtmlSelectElement = element_by_id(id)?;
    let target = select.clone();
    let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        handler(non_empty(target.value()));
    });
    select
        .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
        .map_err(|e| js_error("add change listener", e))?;
    // Page-lifetime listener
    closure.forget();
    Ok(())
}

/// Value of a control that may be either an `<input>` or a `<select>`
pub fn control_value(id: &str) -> Result<Option<String>, TilePairError> {
    let element: HtmlElement = element_by_id(id)?;
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Ok(non_empty(input.value().trim().to_string()));
    }
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return Ok(non_empty(select.value()));
    }
    Err(TilePairError::Dom(format!("element #{} has no value", id)))
}

pub fn set_control_value(id: &str, value: &str) -> Result<(), TilePairError> {
    let element: HtmlElement = element_by_id(id)?;
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
    } else {
        return Err(TilePairError::Dom(format!("element #{} has no value", id)));
    }
    Ok(())
}

/// Call `handler` whenever an input or select control changes
pub fn on_control_change<F>(id: &str, mut handler: F) -> Result<(), TilePairError>
where
    F: FnMut() + 'static,
{
    let element: HtmlElement = element_by_id(id)?;
    let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| handler());
    element
        .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
        .map_err(|e| js_error("add change listener", e))?;
    closure.forget();
    Ok(())
}

pub fn set_text(id: &str, text: &str) -> Result<(), TilePairError> {
    let element: HtmlElement = element_by_id(id)?;
    element.set_text_content(Some(text));
    element
        .class_list()
        .remove_1(ERROR_CLASS)
        .map_err(|e| js_error("clear message class", e))
}

/// Show a failure in a page message area
pub fn display_error(id: &str, text: &str) -> Result<(), TilePairError> {
    let element: HtmlElement = element_by_id(id)?;
    element.set_text_content(Some(text));
    element
        .class_list()
        .add_1(ERROR_CLASS)
        .map_err(|e| js_error("set message class", e))
}

/// Location query string, without the leading `?`
pub fn location_query() -> Result<String, TilePairError> {
    let search = window()?
        .location()
        .search()
        .map_err(|e| js_error("read location", e))?;
    Ok(search.trim_start_matches('?').to_string())
}

/// Point the address bar and the `#link_id` anchor at the current page state
pub fn update_link(link_id: &str, query: &str) -> Result<(), TilePairError> {
    let window = window()?;
    let location = window.location();
    let path = location.pathname().map_err(|e| js_error("read path", e))?;
    let origin = location.origin().map_err(|e| js_error("read origin", e))?;
    let relative = format!("{}?{}", path, query);

    window
        .history()
        .map_err(|e| js_error("history", e))?
        .replace_state_with_url(&JsValue::NULL, "", Some(&relative))
        .map_err(|e| js_error("replace state", e))?;

    // The link anchor is optional on a page.
    if let Ok(anchor) = element_by_id::<HtmlAnchorElement>(link_id) {
        let absolute = format!("{}{}", origin, relative);
        anchor.set_href(&absolute);
        anchor.set_text_content(Some(&absolute));
    }
    Ok(())
}

/// Open `url` in a new browsing context; returns `false` when a popup blocker stopped it
pub fn open_window(url: &str) -> Result<bool, TilePairError> {
    let window = window()?;
    let opened = window
        .open_with_url_and_target(url, "_blank")
        .map_err(|e| js_error("open window", e))?;

    match opened {
        Some(popup) => {
            popup.focus().map_err(|e| js_error("focus window", e))?;
            Ok(true)
        }
        None => {
            window
                .alert_with_message("Please allow popups for this website")
                .map_err(|e| js_error("alert", e))?;
            Ok(false)
        }
    }
}
