use crate::constants::PRESSED_CLASS;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn html_element_by_id(document: &web::Document, element_id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Reflect a toggle's boolean state on its control element, if present.
pub fn set_pressed_class(element_id: &str, on: bool) {
    if let Some(document) = window_document() {
        if let Some(el) = document.get_element_by_id(element_id) {
            let list = el.class_list();
            let _ = if on {
                list.add_1(PRESSED_CLASS)
            } else {
                list.remove_1(PRESSED_CLASS)
            };
        }
    }
}

/// Viewport-relative top-left of an element.
#[inline]
pub fn client_origin(el: &web::HtmlElement) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(rect.left() as f32, rect.top() as f32)
}

/// CSS-pixel size of an element's border box.
#[inline]
pub fn client_size(el: &web::HtmlElement) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(rect.width() as f32, rect.height() as f32)
}

/// Layout size of the sprite itself (offsetWidth/offsetHeight).
#[inline]
pub fn offset_size(el: &web::HtmlElement) -> Vec2 {
    Vec2::new(el.offset_width() as f32, el.offset_height() as f32)
}

/// Write an absolute position as inline `left`/`top` styles.
#[inline]
pub fn set_origin(el: &web::HtmlElement, origin: Vec2) {
    let style = el.style();
    let _ = style.set_property("left", &format!("{}px", origin.x));
    let _ = style.set_property("top", &format!("{}px", origin.y));
}

#[inline]
pub fn viewport_size() -> Vec2 {
    match web::window() {
        Some(w) => {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            Vec2::new(width as f32, height as f32)
        }
        None => Vec2::ZERO,
    }
}

/// One-shot timeout; the closure frees itself after firing.
pub fn set_timeout_once(window: &web::Window, timeout_ms: i32, handler: impl FnOnce() + 'static) {
    let callback = wasm_bindgen::closure::Closure::once_into_js(handler);
    let _ = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            timeout_ms,
        );
}
