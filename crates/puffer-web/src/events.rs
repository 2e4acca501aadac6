use crate::widget::SpriteWidget;
use glam::Vec2;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
fn pointer_client(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
fn touch_client(touch: &web::Touch) -> Vec2 {
    Vec2::new(touch.client_x() as f32, touch.client_y() as f32)
}

pub fn pointer_events_supported() -> bool {
    web::window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("PointerEvent")).unwrap_or(false))
        .unwrap_or(false)
}

/// Re-center the sprite whenever the window resizes.
pub fn wire_resize(widget: &Rc<SpriteWidget>) {
    if let Some(window) = web::window() {
        let w = widget.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            w.center();
        }) as Box<dyn FnMut()>);
        let _ =
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Any pointer-down anywhere counts as the gesture that may start music.
pub fn wire_music_gesture(widget: &Rc<SpriteWidget>) {
    if let Some(window) = web::window() {
        for event in ["pointerdown", "touchstart"] {
            let w = widget.clone();
            let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
                w.music_gesture();
            }) as Box<dyn FnMut()>);
            let _ =
                window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

/// Primary input path. preventDefault everywhere so the browser never turns
/// the drag into a scroll, and pointer capture keeps the gesture on the
/// sprite even when the finger leaves it.
pub fn wire_pointer_handlers(widget: &Rc<SpriteWidget>) {
    // pointerdown
    {
        let w = widget.clone();
        let sprite = widget.sprite().clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            ev.prevent_default();
            w.music_gesture();
            w.press(pointer_client(&ev));
            let _ = sprite.set_pointer_capture(ev.pointer_id());
        }) as Box<dyn FnMut(_)>);
        let _ = widget
            .sprite()
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointermove
    {
        let w = widget.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if !w.is_pressed() {
                return;
            }
            ev.prevent_default();
            w.drag_to(pointer_client(&ev));
        }) as Box<dyn FnMut(_)>);
        let _ = widget
            .sprite()
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerup
    {
        let w = widget.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            ev.prevent_default();
            w.release();
        }) as Box<dyn FnMut(_)>);
        let _ = widget
            .sprite()
            .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointercancel: back to idle, no effects
    {
        let w = widget.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            w.cancel();
        }) as Box<dyn FnMut(_)>);
        let _ = widget
            .sprite()
            .add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Legacy touch path for engines without pointer events; wired only then so
/// a single gesture never drives the state machine twice.
pub fn wire_touch_handlers(widget: &Rc<SpriteWidget>) {
    // touchstart
    {
        let w = widget.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(touch) = ev.touches().get(0) {
                ev.prevent_default();
                w.music_gesture();
                w.press(touch_client(&touch));
            }
        }) as Box<dyn FnMut(_)>);
        let _ = widget
            .sprite()
            .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // touchmove
    {
        let w = widget.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if !w.is_pressed() {
                return;
            }
            if let Some(touch) = ev.touches().get(0) {
                ev.prevent_default();
                w.drag_to(touch_client(&touch));
            }
        }) as Box<dyn FnMut(_)>);
        let _ = widget
            .sprite()
            .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // touchend
    {
        let w = widget.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            ev.prevent_default();
            w.release();
        }) as Box<dyn FnMut(_)>);
        let _ = widget
            .sprite()
            .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // touchcancel
    {
        let w = widget.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
            w.cancel();
        }) as Box<dyn FnMut(_)>);
        let _ = widget
            .sprite()
            .add_event_listener_with_callback("touchcancel", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
