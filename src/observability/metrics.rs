//! Metrics collection.
//!
//! # Metrics
//! - `pagekit_submissions_total` (counter): AJAX submissions by outcome
//! - `pagekit_debounce_fired_total` (counter): debounced callbacks that ran
//! - `pagekit_alerts_dismissed_total` (counter): alerts closed automatically

use metrics::counter;

pub fn record_submission(outcome: &'static str) {
    counter!("pagekit_submissions_total", "outcome" => outcome).increment(1);
}

pub fn record_debounce_fired() {
    counter!("pagekit_debounce_fired_total").increment(1);
}

pub fn record_alert_dismissed() {
    counter!("pagekit_alerts_dismissed_total").increment(1);
}
