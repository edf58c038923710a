// Handler modules
pub mod audit;
pub mod checks;

// Re-export all handler functions
pub use audit::{AuditOptions, fetch_snapshot, handle_all, handle_check};
pub use checks::handle_list_checks;
