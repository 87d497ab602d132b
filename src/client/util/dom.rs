//! Thin wrappers over the browser DOM used outside the component tree:
//! cookies, localStorage, scroll positions, and document-level listeners.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

pub fn document() -> Option<web_sys::Document> {
    window()?.document()
}

fn html_document() -> Option<web_sys::HtmlDocument> {
    document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

pub fn document_cookies() -> Option<String> {
    html_document()?.cookie().ok()
}

pub fn set_document_cookie(cookie: &str) {
    if let Some(doc) = html_document() {
        let _ = doc.set_cookie(cookie);
    }
}

pub fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok().flatten()
}

pub fn element_by_id(id: &str) -> Option<web_sys::Element> {
    document()?.get_element_by_id(id)
}

/// Horizontal scroll position of an element, for the drag-scroll carousel.
pub fn scroll_left(id: &str) -> i32 {
    element_by_id(id).map(|el| el.scroll_left()).unwrap_or(0)
}

pub fn set_scroll_left(id: &str, value: i32) {
    if let Some(el) = element_by_id(id) {
        el.set_scroll_left(value);
    }
}

pub fn scroll_into_view(id: &str) {
    if let Some(el) = element_by_id(id) {
        el.scroll_into_view();
    }
}

pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Attaches a document-level listener for the app's lifetime. The closure is
/// leaked on purpose: these listeners are installed once by the app shell,
/// which never unmounts.
pub fn add_document_listener(event: &str, handler: impl FnMut() + 'static) {
    let Some(doc) = document() else { return };
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    let _ = doc.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
