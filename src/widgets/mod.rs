//! Page helpers wired up on load.
//!
//! # Components
//! - validation.rs: blocks invalid `needs-validation` forms, marks them `was-validated`
//! - alerts.rs: closes non-permanent alerts after a delay
//! - dates.rs: fills empty date inputs with today's date
//! - search.rs: debounced search input
//!
//! # Design Decisions
//! - Each helper is standalone; none shares state with another
//! - Helpers only touch the page through `Page`

pub mod alerts;
pub mod dates;
pub mod search;
pub mod validation;

pub use alerts::schedule_auto_dismiss;
pub use dates::default_date_inputs;
pub use search::{LogSearch, SearchHandler, SearchInput};
pub use validation::{enhance_validation, ValidationHook};
