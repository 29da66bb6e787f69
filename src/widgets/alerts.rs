//! Alert auto-dismiss.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::observability::metrics;
use crate::page::Page;

pub const ALERT_CLASS: &str = "alert";
/// Alerts carrying this class stay until closed by the user.
pub const PERMANENT_CLASS: &str = "alert-permanent";

/// Schedule removal of every non-permanent alert currently on the page.
///
/// Alerts already gone when their timer fires are skipped.
pub fn schedule_auto_dismiss(page: Arc<Page>, delay: Duration) -> Vec<JoinHandle<()>> {
    let ids =
        page.select_elements(|e| e.has_class(ALERT_CLASS) && !e.has_class(PERMANENT_CLASS));
    tracing::debug!(
        count = ids.len(),
        delay_ms = delay.as_millis() as u64,
        "Scheduling alert dismissal"
    );

    ids.into_iter()
        .map(|id| {
            let page = Arc::clone(&page);
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                if page.remove_element(&id).is_some() {
                    tracing::debug!(alert_id = %id, "Alert dismissed");
                    metrics::record_alert_dismissed();
                }
            })
        })
        .collect()
}
