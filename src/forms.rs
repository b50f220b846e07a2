use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlFormElement};

/// Submits the form with id `form_id`. Missing ids and non-form elements are
/// ignored; returns whether a submission happened.
pub fn submit_form(document: &Document, form_id: &str) -> bool {
    let Some(form) = document
        .get_element_by_id(form_id)
        .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
    else {
        return false;
    };
    form.submit().is_ok()
}
