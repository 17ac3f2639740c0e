use crate::core::gallery::{card_pose, GalleryState};
use crate::dom::StageDom;
use crate::events::ScrollState;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame tick touches: rotation state, the card DOM,
/// and up to two shader backdrops (page hero + gallery).
pub struct FrameContext {
    pub gallery: Rc<RefCell<GalleryState>>,
    pub scroll: Rc<RefCell<ScrollState>>,
    pub stage: Option<StageDom>,
    pub page_gpu: Option<render::GpuState<'static>>,
    pub gallery_gpu: Option<render::GpuState<'static>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let (scrolling, progress) = {
            let s = self.scroll.borrow();
            (s.scrolling, s.progress)
        };
        let (rotation, radius) = {
            let mut g = self.gallery.borrow_mut();
            g.tick(scrolling);
            (g.rotation_deg, g.config.radius_px)
        };

        if let Some(stage) = &self.stage {
            let _ = stage
                .stage
                .style()
                .set_property("transform", &format!("rotateY({rotation}deg)"));
            let count = stage.cards.len();
            for (i, card) in stage.cards.iter().enumerate() {
                let pose = card_pose(i, count, rotation);
                let style = card.style();
                let _ = style.set_property("opacity", &format!("{:.3}", pose.opacity));
                let _ = style.set_property(
                    "transform",
                    &format!(
                        "rotateY({}deg) translateZ({}px) scale({:.3})",
                        pose.angle_deg, radius, pose.scale
                    ),
                );
            }
        }

        if let Some(g) = &mut self.gallery_gpu {
            g.set_scroll(progress);
            if let Err(e) = g.render(dt_sec) {
                log::error!("gallery backdrop render error: {:?}", e);
            }
        }
        if let Some(g) = &mut self.page_gpu {
            if let Err(e) = g.render(dt_sec) {
                log::error!("page backdrop render error: {:?}", e);
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
