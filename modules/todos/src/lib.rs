// === PUBLIC CONTRACT ===
// Only the contract module should be public for other modules to consume
pub mod contract;

// Re-export the public contract components
pub use contract::{client, error, model};

// Date helpers, due-date predicates and quick filters are pure functions the
// presentation layer calls directly.
pub use domain::dates::{get_local_today, to_absolute_date, AbsoluteDate};
pub use domain::filters::{apply_quick_filter, apply_quick_filter_at, FilterType, TodoQuickFilter};
pub use domain::todo::{due_status, is_due_today, is_overdue, is_overdue_in, DueStatus};

// === MODULE DEFINITION ===
pub mod module;
pub use module::TodosModule;

// === INTERNAL MODULES ===
// WARNING: These modules are internal implementation details!
// They are exposed only for comprehensive testing and should NOT be used by external consumers.
// Only use the `contract` module and the re-exports above for stable public APIs.
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod gateways;
#[doc(hidden)]
pub mod infra;
