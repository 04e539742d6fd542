//! UI Components
//!
//! Leptos components making up the tracker widget.

mod edit_modal;
mod entry_form;
mod record_table;

pub use edit_modal::EditModal;
pub use entry_form::EntryForm;
pub use record_table::RecordTable;
