//! Contact form interception.
//!
//! Submissions never leave the page. The handler validates the four
//! fields, reports the outcome through the [`Notifier`], and clears the
//! form on success.

use veneer_core::{ContactSubmission, NoticeKind};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::error::EnhanceError;
use crate::notice::Notifier;

const FORM_ID: &str = "contactForm";
const NAME_ID: &str = "name";
const EMAIL_ID: &str = "email";
const PHONE_ID: &str = "phone";
const MESSAGE_ID: &str = "message";

/// Wire up the page's contact form, if it has one.
///
/// Returns whether a form was found and bound.
pub fn bind_contact_form(document: &Document, notifier: &Notifier) -> Result<bool, EnhanceError> {
    let Some(form) = document.get_element_by_id(FORM_ID) else {
        return Ok(false);
    };
    let form: HtmlFormElement = form
        .dyn_into()
        .map_err(|_| EnhanceError::cast(format!("#{FORM_ID} is not a form element")))?;

    let document = document.clone();
    let notifier = notifier.clone();
    let form_handle = form.clone();
    let handler = Closure::wrap(Box::new(move |event: web_sys::Event| {
        event.prevent_default();
        let submission = ContactSubmission::from_raw(
            &field_value(&document, NAME_ID),
            &field_value(&document, EMAIL_ID),
            &field_value(&document, PHONE_ID),
            &field_value(&document, MESSAGE_ID),
        );
        match submission.validate() {
            Ok(()) => {
                notifier.show_kind(&submission.success_message(), NoticeKind::Success);
                form_handle.reset();
                log::debug!("contact form accepted");
                // TODO: POST the submission to the contact endpoint once
                // one exists.
            }
            Err(err) => {
                notifier.show_kind(&err.to_string(), NoticeKind::Error);
                log::debug!("contact form rejected: {err}");
            }
        }
    }) as Box<dyn FnMut(_)>);
    form.add_event_listener_with_callback("submit", handler.as_ref().unchecked_ref())
        .map_err(|err| EnhanceError::dom(format!("submit listener rejected: {err:?}")))?;
    handler.forget();
    Ok(true)
}

/// Read a text field by id. A missing or non-text element reads as
/// empty, which the validator then reports as a missing field.
fn field_value(document: &Document, id: &str) -> String {
    let Some(element) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}
