use crate::core::constants::Speaker;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
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

/// Keep the canvas backing store at CSS size * devicePixelRatio. A
/// zero-sized rect (display:none during layout) falls back to the
/// parent element's dimensions.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let mut width = rect.width();
        let mut height = rect.height();
        if width <= 0.0 || height <= 0.0 {
            if let Some(parent) = canvas.parent_element() {
                width = parent.client_width() as f64;
                height = parent.client_height() as f64;
            }
        }
        canvas.set_width(((width * dpr) as u32).max(1));
        canvas.set_height(((height * dpr) as u32).max(1));
    }
}

/// DOM handles for the card ring, built once at init.
pub struct StageDom {
    pub stage: web::HtmlElement,
    pub cards: Vec<web::HtmlElement>,
}

/// Build the rotating stage and one card per speaker inside `container`.
/// Initial transforms are written here; the frame loop rewrites them
/// every tick.
pub fn build_gallery_stage(
    document: &web::Document,
    container: &web::HtmlElement,
    speakers: &[Speaker],
    radius_px: f32,
) -> Option<StageDom> {
    let _ = container.class_list().add_1("circular-gallery-stage");

    let stage: web::HtmlElement = document
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    stage.set_class_name("circular-gallery-inner");

    let angle_per_item = 360.0 / speakers.len().max(1) as f32;
    let mut cards = Vec::with_capacity(speakers.len());
    for (i, speaker) in speakers.iter().enumerate() {
        let card: web::HtmlElement = document
            .create_element("div")
            .ok()?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        card.set_class_name("circular-gallery-card");
        let item_angle = i as f32 * angle_per_item;
        let _ = card.style().set_property(
            "transform",
            &format!("rotateY({item_angle}deg) translateZ({radius_px}px)"),
        );

        let first_name = speaker.name.split(' ').next().unwrap_or(speaker.name);
        card.set_inner_html(&format!(
            "<div class=\"gallery-card-content\">\
               <div class=\"gallery-card-image-placeholder\"><span>{}</span></div>\
               <div class=\"gallery-card-info\">\
                 <h3>{}</h3>\
                 <span class=\"gallery-card-role\">{}</span>\
                 <p class=\"gallery-card-topic\">\u{201c}{}\u{201d}</p>\
               </div>\
             </div>",
            first_name, speaker.name, speaker.role, speaker.topic
        ));

        let _ = stage.append_child(&card);
        cards.push(card);
    }

    let _ = container.append_child(&stage);
    Some(StageDom { stage, cards })
}
