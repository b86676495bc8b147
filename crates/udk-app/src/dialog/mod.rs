//! Modal-style dialogs: the create/edit form and the delete confirmation

mod confirm;
mod form;

pub use confirm::ConfirmDelete;
pub use form::{FormMode, SubmitError, UserForm};
