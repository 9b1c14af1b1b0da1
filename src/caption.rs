use crate::constants::{DISPLAY_HIDDEN, DISPLAY_SHOWN};
use crate::dom;
use acqmap_core::Caption;
use web_sys as web;

/// Show exactly one of the two caption blocks.
pub fn apply(english: &web::HtmlElement, french: &web::HtmlElement, caption: Caption) {
    let (en, fr) = caption.visibility();
    dom::set_display(english, if en { DISPLAY_SHOWN } else { DISPLAY_HIDDEN });
    dom::set_display(french, if fr { DISPLAY_SHOWN } else { DISPLAY_HIDDEN });
}
