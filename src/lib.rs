#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::core::gallery::{GalleryConfig, GalleryState, ProgressSource};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;
mod ui;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("congreso-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Audio wiring first: the engine stays inert until the toggle
    // gesture, but the listeners must be in place from the start.
    let audio = Rc::new(RefCell::new(audio::AudioEngine::new()));
    events::wire_audio_toggle(&document, audio.clone());
    events::wire_click_sounds(&document, audio.clone());
    events::wire_section_monitor(&document, audio.clone());
    events::wire_badge_ambient(&document, audio.clone());
    ui::set_audio_button(&document, audio.borrow().is_audible());

    // Page-level hero backdrop
    let page_gpu = match dom::canvas_by_id(&document, PAGE_CANVAS_ID) {
        Some(canvas) => {
            events::wire_canvas_resize(&canvas);
            render::init_gpu(&canvas, render::ShaderPreset::Waves).await
        }
        None => {
            log::warn!("missing #{PAGE_CANVAS_ID}; page backdrop disabled");
            None
        }
    };

    // Circular speaker gallery: card ring, pinned-wrapper scroll space,
    // and its own shader canvas behind the ring.
    let gallery = Rc::new(RefCell::new(GalleryState::new(GalleryConfig::default())));
    let scroll = Rc::new(RefCell::new(events::ScrollState::default()));

    let stage = match dom::element_by_id(&document, GALLERY_CONTAINER_ID) {
        Some(container) => {
            let radius = gallery.borrow().config.radius_px;
            let built =
                dom::build_gallery_stage(&document, &container, core::constants::SPEAKERS, radius);
            let wrapper = match container.closest(&format!(".{PIN_WRAPPER_CLASS}")) {
                Ok(Some(el)) => el.dyn_into::<web::HtmlElement>().ok(),
                _ => None,
            };
            let scroll_el = match wrapper {
                Some(w) => Some(w),
                None => {
                    // No pinned wrapper on this page; track the whole
                    // document's scroll range instead.
                    log::warn!(
                        "gallery has no .{PIN_WRAPPER_CLASS} ancestor; using document scroll"
                    );
                    gallery.borrow_mut().config.progress_source = ProgressSource::Document;
                    Some(container)
                }
            };
            if let Some(el) = scroll_el {
                events::wire_gallery_scroll(el, gallery.clone(), scroll.clone(), audio.clone());
            }
            built
        }
        None => {
            log::warn!("missing #{GALLERY_CONTAINER_ID}; speaker ring disabled");
            None
        }
    };

    let gallery_gpu = match dom::canvas_by_id(&document, GALLERY_CANVAS_ID) {
        Some(canvas) => {
            events::wire_canvas_resize(&canvas);
            let preset =
                render::ShaderPreset::from_attr(canvas.get_attribute(BACKDROP_PRESET_ATTR));
            render::init_gpu(&canvas, preset).await
        }
        None => {
            log::warn!("missing #{GALLERY_CANVAS_ID}; gallery backdrop disabled");
            None
        }
    };

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        gallery,
        scroll,
        stage,
        page_gpu,
        gallery_gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
