//! ==============================================================================
//! lib.rs - shared types and view logic for the expense tracker
//! ==============================================================================
//!
//! purpose:
//!     defines the expense wire types, the category summary, form validation
//!     and the view controller that drives the dashboard. nothing in here
//!     touches the browser, so all of it runs (and is tested) natively.
//!
//! relationships:
//!     - used by: dashboard (wire types, render model, controller)
//!     - the dashboard plugs in the browser through two seams:
//!         ExpenseClient (http) and ExpenseView (dom)
//!
//! api contract:
//!     GET  /expenses?category=<urlencoded>&sort=date_desc
//!         response: {"expenses": [...], "total": "12.50"}
//!     POST /expenses
//!         body: {"id", "amount", "category", "description", "date"}
//!
//! ==============================================================================

pub mod controller;
pub mod error;
pub mod form;
pub mod model;
pub mod page;
pub mod query;
pub mod summary;

pub use controller::{Controller, ExpenseClient, ExpenseView, SubmitOutcome};
pub use error::ApiError;
pub use form::{FormField, FormFields, ValidationError};
pub use model::{Expense, ExpenseListResponse, NewExpense};
pub use page::{ExpensePage, ExpenseRow, FilterOptions};
pub use query::ListQuery;
pub use summary::{compute_summary, format_amount, CategorySummary};
