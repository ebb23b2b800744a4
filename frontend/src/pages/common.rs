use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

pub const CALCULATOR_SECTION_ID: &str = "price-calculator";
pub const ENQUIRY_SECTION_ID: &str = "enquiry-form";

/// Reads the current value of whichever form control fired `e`.
pub fn event_value(e: &Event) -> String {
    let Some(target) = e.target() else {
        return String::new();
    };

    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Smooth-scrolls the page to the section with the given id, if it exists.
pub fn scroll_to_section(id: &str) {
    if let Some(element) = document().and_then(|d| d.get_element_by_id(id)) {
        let mut options = ScrollIntoViewOptions::new();
        options.behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub fn scroll_callback(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(id);
    })
}
