//! AJAX form submission.
//!
//! # Responsibilities
//! - Intercept a form's submit event and suppress native navigation
//! - Serialize the form's current values and send them to its action
//! - Route the parsed response to the success or error callback
//!
//! # Design Decisions
//! - Exactly one request per submit event; no retries, no debouncing
//! - Every failure is absorbed and delivered through the error callback
//! - Transport failures always produce the same generic payload

use reqwest::header::ACCEPT;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tracing::Instrument;
use url::Url;
use uuid::Uuid;

use crate::ajax::outcome::{SubmissionState, SubmitError, SubmitOutcome};
use crate::config::AjaxConfig;
use crate::observability::metrics;
use crate::page::{resolve_action, Form, FormMethod, Page, SubmitEvent, SubmitHandler};

/// Header marking a request as script-issued rather than a full-page post.
pub const REQUESTED_WITH_HEADER: &str = "x-requested-with";

type Callback = Arc<dyn Fn(Value) + Send + Sync>;

/// Sends forms asynchronously and reports back through callbacks.
#[derive(Clone)]
pub struct AjaxFormSubmitter {
    client: reqwest::Client,
    config: AjaxConfig,
    runtime: Handle,
}

impl AjaxFormSubmitter {
    /// Create a submitter with its own HTTP client.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime.
    pub fn new(config: AjaxConfig) -> Result<Self, SubmitError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, config))
    }

    /// Create a submitter around an existing client.
    pub fn with_client(client: reqwest::Client, config: AjaxConfig) -> Self {
        Self {
            client,
            config,
            runtime: Handle::current(),
        }
    }

    /// Attach a submit interceptor to `form_id` on `page`.
    ///
    /// Returns `None` if the page has no such form.
    pub fn attach<S, E>(
        &self,
        page: &Page,
        form_id: &str,
        on_success: S,
        on_error: E,
    ) -> Option<AjaxFormBinding>
    where
        S: Fn(Value) + Send + Sync + 'static,
        E: Fn(Value) + Send + Sync + 'static,
    {
        let (state_tx, state_rx) = watch::channel(SubmissionState::Idle);
        let submissions = Arc::new(AtomicU64::new(0));

        let handler = AjaxSubmitHandler {
            submitter: self.clone(),
            base: page.url().clone(),
            on_success: Arc::new(on_success),
            on_error: Arc::new(on_error),
            state: Arc::new(state_tx),
            submissions: submissions.clone(),
        };

        if !page.add_submit_listener(form_id, Arc::new(handler)) {
            tracing::debug!(form_id = %form_id, "No such form, AJAX submission not attached");
            return None;
        }

        tracing::debug!(form_id = %form_id, "AJAX submission attached");
        Some(AjaxFormBinding {
            form_id: form_id.to_string(),
            state: state_rx,
            submissions,
        })
    }

    /// Perform one submission of `form`, resolving its action against `base`.
    pub async fn submit_form(&self, base: &Url, form: &Form) -> SubmitOutcome {
        match self.send(base, form).await {
            Ok(outcome) => outcome,
            Err(e) => SubmitOutcome::Failed(e),
        }
    }

    async fn send(&self, base: &Url, form: &Form) -> Result<SubmitOutcome, SubmitError> {
        let target = resolve_action(base, &form.action).map_err(|source| {
            SubmitError::InvalidAction {
                action: form.action.clone(),
                source,
            }
        })?;

        let pairs = form.to_pairs();
        let request = match form.method {
            FormMethod::Get => self.client.get(target).query(&pairs),
            FormMethod::Post => self.client.post(target).form(&pairs),
        };

        let response = request
            .header(REQUESTED_WITH_HEADER, self.config.requested_with.as_str())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes).map_err(|source| SubmitError::Decode {
            status: status.as_u16(),
            source,
        })?;

        if status.is_success() {
            Ok(SubmitOutcome::Success { status, body })
        } else {
            Ok(SubmitOutcome::Rejected { status, body })
        }
    }
}

struct AjaxSubmitHandler {
    submitter: AjaxFormSubmitter,
    base: Url,
    on_success: Callback,
    on_error: Callback,
    state: Arc<watch::Sender<SubmissionState>>,
    submissions: Arc<AtomicU64>,
}

impl SubmitHandler for AjaxSubmitHandler {
    fn on_submit(&self, _page: &Page, form: &Form, event: &mut SubmitEvent) {
        event.prevent_default();
        let seq = self.submissions.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(SubmissionState::Submitting);

        let span = tracing::info_span!(
            "ajax_submit",
            submission_id = %Uuid::new_v4(),
            form_id = %form.id,
            method = %form.method
        );

        let submitter = self.submitter.clone();
        let base = self.base.clone();
        let form = form.clone();
        let on_success = Arc::clone(&self.on_success);
        let on_error = Arc::clone(&self.on_error);
        let state = Arc::clone(&self.state);
        let submissions = Arc::clone(&self.submissions);

        self.submitter.runtime.spawn(
            async move {
                let outcome = submitter.submit_form(&base, &form).await;
                metrics::record_submission(outcome.label());

                match &outcome {
                    SubmitOutcome::Success { status, .. } => {
                        tracing::info!(status = status.as_u16(), "Form submission succeeded");
                    }
                    SubmitOutcome::Rejected { status, .. } => {
                        tracing::info!(status = status.as_u16(), "Form submission rejected");
                    }
                    SubmitOutcome::Failed(e) => {
                        tracing::warn!(error = %e, "Form submission failed");
                    }
                }

                let terminal = match outcome.into_payload() {
                    Ok(body) => {
                        on_success(body);
                        SubmissionState::Succeeded
                    }
                    Err(body) => {
                        on_error(body);
                        SubmissionState::Failed
                    }
                };

                // A newer submission owns the state; this one only reports through its callback.
                let published = state.send_if_modified(|current| {
                    if submissions.load(Ordering::SeqCst) != seq {
                        return false;
                    }
                    *current = terminal;
                    true
                });
                if !published {
                    tracing::debug!(
                        seq,
                        "Superseded submission finished, state left unchanged"
                    );
                }
            }
            .instrument(span),
        );
    }
}

/// Handle to an attached form, exposing its submission state.
pub struct AjaxFormBinding {
    form_id: String,
    state: watch::Receiver<SubmissionState>,
    submissions: Arc<AtomicU64>,
}

impl AjaxFormBinding {
    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    /// State of the most recent submission.
    ///
    /// Submissions that finish after a newer one was started do not change it.
    pub fn state(&self) -> SubmissionState {
        *self.state.borrow()
    }

    /// Watch state transitions.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.clone()
    }

    /// Number of submit events intercepted so far.
    pub fn submissions(&self) -> u64 {
        self.submissions.load(Ordering::SeqCst)
    }

    /// Wait until the latest submission reaches a terminal state.
    pub async fn settled(&self) -> SubmissionState {
        let mut rx = self.state.clone();
        let state = match rx.wait_for(SubmissionState::is_terminal).await {
            Ok(state) => *state,
            Err(_) => self.state(),
        };
        state
    }
}
