//! Submit events and the handler trait registered against forms.

use crate::page::{Form, Page};

/// A submit event dispatched to a form's listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitEvent {
    form_id: String,
    default_prevented: bool,
    propagation_stopped: bool,
    immediate_propagation_stopped: bool,
}

impl SubmitEvent {
    pub fn new(form_id: impl Into<String>) -> Self {
        Self {
            form_id: form_id.into(),
            default_prevented: false,
            propagation_stopped: false,
            immediate_propagation_stopped: false,
        }
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    /// Suppress the native form navigation.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Stop the event from reaching ancestors. Other listeners on the same
    /// form still run.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Stop the event and skip any remaining listeners on the same form.
    pub fn stop_immediate_propagation(&mut self) {
        self.propagation_stopped = true;
        self.immediate_propagation_stopped = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    pub(crate) fn immediate_propagation_stopped(&self) -> bool {
        self.immediate_propagation_stopped
    }

    /// Whether the host would go on to perform the full-page form post.
    pub fn navigates(&self) -> bool {
        !self.default_prevented
    }
}

/// A listener invoked by the page when a form is submitted.
///
/// `form` is the state of the form at the moment of submission.
pub trait SubmitHandler: Send + Sync {
    fn on_submit(&self, page: &Page, form: &Form, event: &mut SubmitEvent);
}

impl<F> SubmitHandler for F
where
    F: Fn(&Page, &Form, &mut SubmitEvent) + Send + Sync,
{
    fn on_submit(&self, page: &Page, form: &Form, event: &mut SubmitEvent) {
        self(page, form, event)
    }
}
