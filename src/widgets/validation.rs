//! Form validation hook.

use std::sync::Arc;

use crate::page::{Form, Page, SubmitEvent, SubmitHandler};

/// Class opting a form into validation on submit.
pub const NEEDS_VALIDATION: &str = "needs-validation";
/// Class added to a form once a submit attempt has been validated.
pub const WAS_VALIDATED: &str = "was-validated";

/// Blocks submission of invalid forms and marks the form as validated.
pub struct ValidationHook;

impl SubmitHandler for ValidationHook {
    fn on_submit(&self, page: &Page, form: &Form, event: &mut SubmitEvent) {
        if !form.check_validity() {
            tracing::debug!(
                form_id = %form.id,
                invalid = ?form.invalid_fields(),
                "Blocked submission of invalid form"
            );
            event.prevent_default();
            event.stop_propagation();
        }
        page.add_form_class(&form.id, WAS_VALIDATED);
    }
}

/// Hook every `needs-validation` form on the page. Returns how many were hooked.
pub fn enhance_validation(page: &Page) -> usize {
    let ids = page.forms_with_class(NEEDS_VALIDATION);
    for id in &ids {
        page.add_submit_listener(id, Arc::new(ValidationHook));
    }
    ids.len()
}
