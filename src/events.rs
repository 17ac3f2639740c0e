use crate::audio::AudioEngine;
use crate::constants::*;
use crate::core::gallery;
use crate::core::gallery::{GalleryState, ProgressSource};
use crate::dom;
use crate::ui;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Scroll flags shared between the event handlers and the frame loop.
/// Mutated only from listeners and timers on the main thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollState {
    pub scrolling: bool,
    pub progress: f32,
}

/// Keep the canvas backing store in sync with its CSS size.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Current scroll progress for the gallery, per the configured source.
fn current_progress(wrapper: &web::HtmlElement, source: ProgressSource) -> f32 {
    let window = match web::window() {
        Some(w) => w,
        None => return 0.0,
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    match source {
        ProgressSource::PinnedWrapper => {
            let rect = wrapper.get_bounding_client_rect();
            let wrapper_top = scroll_y + rect.top();
            let range = wrapper.offset_height() as f64 - viewport_h;
            gallery::scroll_progress(scroll_y, wrapper_top, range)
        }
        ProgressSource::Document => {
            let doc_h = window
                .document()
                .and_then(|d| d.document_element())
                .map(|e| e.scroll_height() as f64)
                .unwrap_or(0.0);
            gallery::scroll_progress(scroll_y, 0.0, doc_h - viewport_h)
        }
    }
}

/// Scroll listener for the pinned gallery: updates the rotation target
/// and shared progress, runs the wind loop while progress sits strictly
/// inside (0, 1), and arms a debounce timer that returns the ring to
/// auto-rotation once scrolling goes idle.
pub fn wire_gallery_scroll(
    wrapper: web::HtmlElement,
    gallery: Rc<RefCell<GalleryState>>,
    scroll: Rc<RefCell<ScrollState>>,
    audio: Rc<RefCell<AudioEngine>>,
) {
    // Initial sync so a restored scroll position lands on the right frame
    {
        let p = current_progress(&wrapper, gallery.borrow().config.progress_source);
        gallery.borrow_mut().set_progress(p);
        scroll.borrow_mut().progress = p;
    }

    let idle_timer: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
    let closure = Closure::wrap(Box::new(move || {
        let source = gallery.borrow().config.progress_source;
        let p = current_progress(&wrapper, source);
        gallery.borrow_mut().set_progress(p);
        {
            let mut s = scroll.borrow_mut();
            s.scrolling = true;
            s.progress = p;
        }

        // Wind only while the ring is actually traversing its scroll space
        if p > 0.0 && p < 1.0 {
            audio.borrow_mut().start_wind();
        } else {
            audio.borrow_mut().stop_wind();
        }

        // Re-arm the idle timer; only the most recent one fires
        if let Some(window) = web::window() {
            if let Some(handle) = idle_timer.borrow_mut().take() {
                window.clear_timeout_with_handle(handle);
            }
            let scroll_idle = scroll.clone();
            let audio_idle = audio.clone();
            let cb = Closure::once_into_js(move || {
                scroll_idle.borrow_mut().scrolling = false;
                audio_idle.borrow_mut().stop_wind();
            });
            if let Ok(handle) = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    cb.unchecked_ref(),
                    SCROLL_IDLE_MS,
                )
            {
                *idle_timer.borrow_mut() = Some(handle);
            }
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Switch the ambient chord to whichever `section[id]` currently shows
/// the most visible height.
fn switch_to_most_visible(document: &web::Document, audio: &Rc<RefCell<AudioEngine>>) {
    let list = match document.query_selector_all("section[id]") {
        Ok(l) => l,
        Err(_) => return,
    };
    let viewport_h = web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let mut best: Option<(String, f64)> = None;
    for i in 0..list.length() {
        let el = match list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
            Some(el) => el,
            None => continue,
        };
        let rect = el.get_bounding_client_rect();
        let visible = (rect.bottom().min(viewport_h) - rect.top().max(0.0)).max(0.0);
        match &best {
            Some((_, best_visible)) if *best_visible >= visible => {}
            _ => best = Some((el.id(), visible)),
        }
    }
    if let Some((id, visible)) = best {
        if visible > 0.0 {
            audio.borrow_mut().switch_section_ambient(&id);
        }
    }
}

/// Debounced scroll scan that keeps the section ambient in step with
/// the section occupying most of the viewport.
pub fn wire_section_monitor(document: &web::Document, audio: Rc<RefCell<AudioEngine>>) {
    match document.query_selector_all("section[id]") {
        Ok(l) if l.length() > 0 => {}
        _ => {
            log::warn!("no section[id] elements; ambient switching disabled");
            return;
        }
    }
    switch_to_most_visible(document, &audio);

    let doc = document.clone();
    let scan_timer: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
    let closure = Closure::wrap(Box::new(move || {
        if let Some(window) = web::window() {
            if let Some(handle) = scan_timer.borrow_mut().take() {
                window.clear_timeout_with_handle(handle);
            }
            let doc_scan = doc.clone();
            let audio_scan = audio.clone();
            let cb = Closure::once_into_js(move || {
                switch_to_most_visible(&doc_scan, &audio_scan);
            });
            if let Ok(handle) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.unchecked_ref(),
                SECTION_SCAN_MS,
            ) {
                *scan_timer.borrow_mut() = Some(handle);
            }
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// The unmute button: the one user gesture that may create the audio
/// context, so `toggle` lazily initializes the engine.
pub fn wire_audio_toggle(document: &web::Document, audio: Rc<RefCell<AudioEngine>>) {
    dom::add_click_listener(document, AUDIO_TOGGLE_ID, move || {
        let audible = audio.borrow_mut().toggle();
        if let Some(d) = dom::window_document() {
            ui::set_audio_button(&d, audible);
        }
    });
}

/// Opening the badge modal gets its own ambient chord, outside the
/// section scan (the modal is an overlay, not a `section[id]`).
pub fn wire_badge_ambient(document: &web::Document, audio: Rc<RefCell<AudioEngine>>) {
    dom::add_click_listener(document, BADGE_MODAL_ID, move || {
        audio.borrow_mut().switch_section_ambient("badge");
    });
}

/// Document-level click sounds for buttons, links and cards.
pub fn wire_click_sounds(document: &web::Document, audio: Rc<RefCell<AudioEngine>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        let el = match ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) {
            Some(el) => el,
            None => return,
        };
        if let Ok(Some(_)) = el.closest("button, a, .card") {
            audio.borrow().play_click();
        }
    }) as Box<dyn FnMut(web::Event)>);
    let _ = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
