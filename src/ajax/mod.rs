//! AJAX form submission subsystem.
//!
//! # Data Flow
//! ```text
//! Page::submit(form_id)
//!     → AjaxSubmitHandler: prevent default, state = Submitting
//!     → spawn (span with submission id):
//!         serialize fields → request to form action
//!         + X-Requested-With marker
//!     → response:
//!         2xx + JSON      → on_success(body), state = Succeeded
//!         non-2xx + JSON  → on_error(body),   state = Failed
//!         transport/parse → on_error({"message": "An error occurred"}), state = Failed
//! ```

pub mod outcome;
pub mod submitter;

pub use outcome::{
    generic_failure, SubmissionState, SubmitError, SubmitOutcome, GENERIC_ERROR_MESSAGE,
};
pub use submitter::{AjaxFormBinding, AjaxFormSubmitter, REQUESTED_WITH_HEADER};
