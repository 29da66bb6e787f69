//! Page-side helpers for server-rendered web applications.
//!
//! # Architecture Overview
//!
//! ```text
//!        host (server-rendered page)
//!                 │
//!                 ▼
//!   ┌──────────────────────────┐
//!   │           page           │  forms, elements, submit listeners
//!   └────┬──────────┬──────────┘
//!        │          │
//!        ▼          ▼
//!   ┌─────────┐ ┌─────────┐   ┌──────────┐   ┌─────────┐
//!   │  ajax   │ │ widgets │──▶│ debounce │   │  theme  │
//!   │submitter│ │ valid./ │   │          │   │ + store │
//!   └─────────┘ │ alerts/ │   └──────────┘   └─────────┘
//!               │ search  │
//!               └─────────┘
//!
//!   cross-cutting: config · observability · format
//! ```

// Core helpers
pub mod ajax;
pub mod debounce;
pub mod page;

// Page features
pub mod format;
pub mod theme;
pub mod widgets;

// Cross-cutting concerns
pub mod config;
pub mod observability;

pub use ajax::{AjaxFormBinding, AjaxFormSubmitter, SubmissionState, SubmitOutcome};
pub use config::PageKitConfig;
pub use debounce::Debouncer;
pub use page::Page;
