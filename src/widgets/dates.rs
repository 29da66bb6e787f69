//! Date input defaults.

use chrono::NaiveDate;

use crate::page::{FieldKind, Page};

/// Fill every empty date input on the page with `today`, as `YYYY-MM-DD`.
///
/// Returns how many inputs were filled. Inputs that already hold a value are
/// left alone. A browser takes "today" from the UTC clock, so hosts usually
/// pass `chrono::Utc::now().date_naive()`.
pub fn default_date_inputs(page: &Page, today: NaiveDate) -> usize {
    let value = today.format("%Y-%m-%d").to_string();
    let filled = page.update_fields(|field| {
        if field.kind != FieldKind::Date || !field.value.is_empty() {
            return false;
        }
        field.value = value.clone();
        true
    });
    tracing::debug!(filled, today = %value, "Defaulted empty date inputs");
    filled
}
