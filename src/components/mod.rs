//! UI Components
//!
//! Reusable Leptos components for the dashboard.

mod debounce;
mod dropdown_filter;
mod modal;
mod pagination;
mod project_modal;
mod project_table;
mod search_input;
mod sidebar;
mod status_filter;
mod user_modal;
mod user_statistics;
mod user_table;

pub use debounce::{Debouncer, SEARCH_DEBOUNCE_MS};
pub use dropdown_filter::DropdownFilter;
pub use pagination::Pagination;
pub use project_modal::ProjectModal;
pub use project_table::ProjectTable;
pub use search_input::SearchInput;
pub use sidebar::Sidebar;
pub use status_filter::StatusFilter;
pub use user_modal::UserModal;
pub use user_statistics::UserStatistics;
pub use user_table::UserTable;
