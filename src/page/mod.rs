//! Page host surface.
//!
//! # Data Flow
//! ```text
//! server-rendered markup
//!     → Page (forms + elements, keyed by id)
//!     → helpers register SubmitHandlers against form ids
//!
//! On submit (host calls Page::submit):
//!     snapshot form → SubmitEvent
//!     → listeners in registration order
//!     → event reports whether native navigation proceeds
//! ```
//!
//! # Design Decisions
//! - Stands in for the browser DOM; helpers never touch anything else
//! - Listeners receive a snapshot of the form, so field values are read at submit time
//! - No map guard is held while listeners run; listeners may mutate the page

pub mod element;
pub mod event;
pub mod form;

pub use element::Element;
pub use event::{SubmitEvent, SubmitHandler};
pub use form::{Field, FieldKind, Form, FormMethod};

use dashmap::DashMap;
use std::sync::Arc;
use url::Url;

/// The page the helpers are attached to.
pub struct Page {
    url: Url,
    forms: DashMap<String, Form>,
    elements: DashMap<String, Element>,
    listeners: DashMap<String, Vec<Arc<dyn SubmitHandler>>>,
}

impl Page {
    /// Create an empty page served from `url`.
    pub fn new(url: &str) -> Result<Self, url::ParseError> {
        Ok(Self::from_url(Url::parse(url)?))
    }

    pub fn from_url(url: Url) -> Self {
        Self {
            url,
            forms: DashMap::new(),
            elements: DashMap::new(),
            listeners: DashMap::new(),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Resolve a form action against the page URL. An empty action targets the page.
    pub fn resolve(&self, action: &str) -> Result<Url, url::ParseError> {
        resolve_action(&self.url, action)
    }

    /// Insert or replace a form. Existing listeners stay registered.
    pub fn insert_form(&self, form: Form) {
        self.forms.insert(form.id.clone(), form);
    }

    pub fn form(&self, id: &str) -> Option<Form> {
        self.forms.get(id).map(|r| r.value().clone())
    }

    /// Ids of forms carrying `class`, sorted for deterministic iteration.
    pub fn forms_with_class(&self, class: &str) -> Vec<String> {
        let mut ids: Vec<String> = self
            .forms
            .iter()
            .filter(|r| r.value().has_class(class))
            .map(|r| r.key().clone())
            .collect();
        ids.sort();
        ids
    }

    /// Update a field value, as user input would. Returns false if form or field is absent.
    pub fn set_field(&self, form_id: &str, name: &str, value: impl Into<String>) -> bool {
        match self.forms.get_mut(form_id) {
            Some(mut form) => form.set_value(name, value),
            None => false,
        }
    }

    /// Apply `update` to every field of every form. Returns how many calls reported a change.
    pub fn update_fields(&self, mut update: impl FnMut(&mut Field) -> bool) -> usize {
        let mut changed = 0;
        for mut form in self.forms.iter_mut() {
            for field in form.fields_mut() {
                if update(field) {
                    changed += 1;
                }
            }
        }
        changed
    }

    pub fn add_form_class(&self, form_id: &str, class: &str) -> bool {
        match self.forms.get_mut(form_id) {
            Some(mut form) => {
                form.add_class(class);
                true
            }
            None => false,
        }
    }

    pub fn insert_element(&self, element: Element) {
        self.elements.insert(element.id.clone(), element);
    }

    pub fn element(&self, id: &str) -> Option<Element> {
        self.elements.get(id).map(|r| r.value().clone())
    }

    /// Ids of elements matching `predicate`, sorted.
    pub fn select_elements(&self, predicate: impl Fn(&Element) -> bool) -> Vec<String> {
        let mut ids: Vec<String> = self
            .elements
            .iter()
            .filter(|r| predicate(r.value()))
            .map(|r| r.key().clone())
            .collect();
        ids.sort();
        ids
    }

    pub fn remove_element(&self, id: &str) -> Option<Element> {
        self.elements.remove(id).map(|(_, element)| element)
    }

    /// Register a submit listener. Returns false when no such form exists.
    pub fn add_submit_listener(&self, form_id: &str, handler: Arc<dyn SubmitHandler>) -> bool {
        if !self.forms.contains_key(form_id) {
            return false;
        }
        self.listeners
            .entry(form_id.to_string())
            .or_default()
            .push(handler);
        true
    }

    pub fn listener_count(&self, form_id: &str) -> usize {
        self.listeners.get(form_id).map_or(0, |l| l.len())
    }

    /// Dispatch a submit event to the form's listeners.
    ///
    /// Returns `None` if the form does not exist.
    pub fn submit(&self, form_id: &str) -> Option<SubmitEvent> {
        let form = self.form(form_id)?;
        let listeners: Vec<Arc<dyn SubmitHandler>> = self
            .listeners
            .get(form_id)
            .map(|l| l.value().clone())
            .unwrap_or_default();

        let mut event = SubmitEvent::new(form_id);
        for listener in listeners {
            listener.on_submit(self, &form, &mut event);
            if event.immediate_propagation_stopped() {
                break;
            }
        }

        tracing::debug!(
            form_id = %form_id,
            default_prevented = event.default_prevented(),
            "Submit event dispatched"
        );
        Some(event)
    }
}

pub(crate) fn resolve_action(base: &Url, action: &str) -> Result<Url, url::ParseError> {
    let action = action.trim();
    if action.is_empty() {
        return Ok(base.clone());
    }
    base.join(action)
}
