use crate::constants::{MUSIC_TOGGLE_ID, SOUND_TOGGLE_ID};
use crate::widget::SpriteWidget;
use crate::{dom, share};
use std::rc::Rc;
use web_sys as web;

/// Wire the optional controls. Any of them may be absent from the page.
pub fn wire_controls(document: &web::Document, widget: &Rc<SpriteWidget>) {
    {
        let w = widget.clone();
        dom::add_click_listener(document, MUSIC_TOGGLE_ID, move || {
            let on = w.music().toggle();
            dom::set_pressed_class(MUSIC_TOGGLE_ID, on);
        });
    }
    {
        let w = widget.clone();
        dom::add_click_listener(document, SOUND_TOGGLE_ID, move || {
            let on = w.toggle_sound();
            dom::set_pressed_class(SOUND_TOGGLE_ID, on);
        });
    }
    share::wire_share_button(document, widget.config().share_confirm_ms);
}
