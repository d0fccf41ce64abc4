//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod expense_form;
mod expense_list;
mod header;
mod summary;

pub use expense_form::ExpenseForm;
pub use expense_list::ExpenseList;
pub use header::Header;
pub use summary::SummaryList;
