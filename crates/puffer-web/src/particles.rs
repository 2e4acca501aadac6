use crate::constants::{BUBBLE_CLASS, HEART_COLOR_PROP};
use puffer_core::ParticleSpec;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Materialize a burst as `div.bubble` children of the stage. The CSS float
/// animation does the motion; removal is driven by `animationend` (see
/// `wire_cleanup`), not by timers.
pub fn spawn_burst(document: &web::Document, stage: &web::HtmlElement, specs: &[ParticleSpec]) {
    for spec in specs {
        let Ok(el) = document.create_element("div") else {
            continue;
        };
        el.set_class_name(BUBBLE_CLASS);
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            let style = html.style();
            let _ = style.set_property("left", &format!("{}px", spec.x));
            let _ = style.set_property("top", &format!("{}px", spec.y));
            let _ = style.set_property("animation-duration", &format!("{}s", spec.duration_sec));
            let _ = style.set_property(HEART_COLOR_PROP, spec.color);
        }
        let _ = stage.append_child(&el);
    }
}

/// One delegated `animationend` listener on the stage removes every bubble
/// whose float finished, however many are in flight.
pub fn wire_cleanup(stage: &web::HtmlElement) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
        if let Some(target) = ev.target() {
            if let Ok(el) = target.dyn_into::<web::Element>() {
                if el.class_list().contains(BUBBLE_CLASS) {
                    el.remove();
                }
            }
        }
    }) as Box<dyn FnMut(_)>);
    let _ = stage.add_event_listener_with_callback("animationend", closure.as_ref().unchecked_ref());
    closure.forget();
}
