//! The two fetch-on-entry views: list and detail

mod detail;
mod list;

pub use detail::DetailScreen;
pub use list::ListScreen;
