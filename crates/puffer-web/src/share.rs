use crate::constants::{COPIED_LABEL, SHARE_BUTTON_ID};
use crate::dom;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub fn wire_share_button(document: &web::Document, confirm_ms: i32) {
    dom::add_click_listener(document, SHARE_BUTTON_ID, move || share_page(confirm_ms));
}

/// Native share sheet when the platform has one, clipboard copy otherwise.
/// Every failure path is silent; sharing is decorative.
fn share_page(confirm_ms: i32) {
    let Some(window) = web::window() else {
        return;
    };
    let href = window.location().href().unwrap_or_default();
    let navigator = window.navigator();

    let has_share = js_sys::Reflect::has(&navigator, &JsValue::from_str("share")).unwrap_or(false);
    if has_share {
        let data = web::ShareData::new();
        if let Some(document) = window.document() {
            data.set_title(&document.title());
        }
        data.set_url(&href);
        let promise = navigator.share_with_data(&data);
        spawn_local(async move {
            // User dismissing the sheet rejects the promise; ignore it.
            let _ = JsFuture::from(promise).await;
        });
    } else {
        let promise = navigator.clipboard().write_text(&href);
        spawn_local(async move {
            if JsFuture::from(promise).await.is_ok() {
                show_copied_confirmation(confirm_ms);
            }
        });
    }
}

// Swap the button label for a moment so the copy has visible feedback.
fn show_copied_confirmation(confirm_ms: i32) {
    let Some(window) = web::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(button) = document.get_element_by_id(SHARE_BUTTON_ID) else {
        return;
    };
    let previous = button.text_content().unwrap_or_default();
    button.set_text_content(Some(COPIED_LABEL));
    dom::set_timeout_once(&window, confirm_ms, move || {
        button.set_text_content(Some(&previous));
    });
}
