use crate::constants::AUDIO_TOGGLE_ID;
use web_sys as web;

/// Reflect the engine's audible state on the toggle button.
pub fn set_audio_button(document: &web::Document, audible: bool) {
    let el = match document.get_element_by_id(AUDIO_TOGGLE_ID) {
        Some(el) => el,
        None => return,
    };
    let cl = el.class_list();
    if audible {
        let _ = cl.add_1("active");
    } else {
        let _ = cl.remove_1("active");
    }
    if let Ok(Some(icon)) = el.query_selector(".btn-icon") {
        icon.set_text_content(Some(if audible { "\u{1F50A}" } else { "\u{1F507}" }));
    }
    if let Ok(Some(text)) = el.query_selector(".btn-text") {
        text.set_text_content(Some(if audible {
            "Sonido Activado"
        } else {
            "Activar Sonido"
        }));
    }
}
