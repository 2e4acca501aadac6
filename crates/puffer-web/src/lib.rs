#![cfg(target_arch = "wasm32")]
use crate::constants::{SPRITE_ID, STAGE_ID};
use crate::widget::SpriteWidget;
use puffer_core::WidgetConfig;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

pub mod audio;
pub mod constants;
pub mod dom;
pub mod events;
pub mod music;
pub mod particles;
pub mod share;
pub mod ui;
pub mod widget;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("puffer-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let sprite = dom::html_element_by_id(&document, SPRITE_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", SPRITE_ID))?;
    let stage = dom::html_element_by_id(&document, STAGE_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", STAGE_ID))?;

    let widget = Rc::new(SpriteWidget::new(sprite, stage, WidgetConfig::default()));
    widget.center();

    events::wire_resize(&widget);
    events::wire_pointer_handlers(&widget);
    if !events::pointer_events_supported() {
        events::wire_touch_handlers(&widget);
    }
    events::wire_music_gesture(&widget);
    particles::wire_cleanup(widget.stage());
    ui::wire_controls(&document, &widget);

    log::info!("puffer widget ready");
    Ok(())
}
