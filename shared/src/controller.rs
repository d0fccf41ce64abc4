//! ==============================================================================
//! controller.rs - view controller for the expense dashboard
//! ==============================================================================
//!
//! purpose:
//!     owns the two user-visible flows: load-and-render and submit.
//!     the network sits behind ExpenseClient and the page behind
//!     ExpenseView, so both flows run the same way in the browser and in
//!     native tests.
//!
//! flows:
//!     load:   idle -> loading -> (rendered | error)
//!     submit: idle -> validating -> (rejected | submitting -> (saved | failed))
//!
//! concurrency:
//!     reloads are not sequenced. two overlapping loads both render, in the
//!     order their responses resolve.
//!
//! ==============================================================================

use std::time::Duration;

use crate::error::ApiError;
use crate::form::{FormField, FormFields, ValidationError};
use crate::model::{ExpenseListResponse, NewExpense};
use crate::page::ExpensePage;
use crate::query::ListQuery;

// ==============================================================================
// status messages
// ==============================================================================

pub const STATUS_LOADING: &str = "Loading...";
pub const STATUS_LOAD_FAILED: &str = "Error loading expenses";
pub const STATUS_SUBMITTING: &str = "Submitting...";
pub const STATUS_SAVED: &str = "Saved";
pub const STATUS_SAVE_FAILED: &str = "Save failed — try again";

/// how long "Saved" stays up
pub const SAVED_STATUS_DELAY: Duration = Duration::from_millis(1500);

// ==============================================================================
// seams
// ==============================================================================

/// remote expense collection
#[allow(async_fn_in_trait)]
pub trait ExpenseClient {
    async fn list_expenses(&self, query: &ListQuery) -> Result<ExpenseListResponse, ApiError>;

    /// any success status counts; the response body is ignored
    async fn create_expense(&self, expense: &NewExpense) -> Result<(), ApiError>;
}

/// the page the controller reads from and writes to
pub trait ExpenseView {
    /// current value of the category filter, empty for "All"
    fn filter_category(&self) -> String;
    fn sort_newest(&self) -> bool;
    fn form_fields(&self) -> FormFields;

    fn set_status(&self, status: &str);
    /// replace rows, total, filter options and summary in one go
    fn render(&self, page: ExpensePage);

    fn clear_invalid(&self);
    fn mark_invalid(&self, field: FormField);
    fn focus(&self, field: FormField);

    fn set_submitting(&self, submitting: bool);
    fn reset_form(&self);
    /// blank the status line once `delay` has passed
    fn clear_status_after(&self, delay: Duration);
}

/// how a submit ended
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Rejected(ValidationError),
    Saved,
    Failed(ApiError),
}

// ==============================================================================
// controller
// ==============================================================================

#[derive(Clone)]
pub struct Controller<C, V> {
    client: C,
    view: V,
    new_id: fn() -> String,
}

impl<C: ExpenseClient, V: ExpenseView> Controller<C, V> {
    /// `new_id` produces the client-side id for each created expense
    pub fn new(client: C, view: V, new_id: fn() -> String) -> Self {
        Self { client, view, new_id }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// fetch with the current filter/sort and redraw everything
    ///
    /// on failure the previous rows stay on screen.
    pub async fn load_and_render(&self) {
        self.view.set_status(STATUS_LOADING);
        let query = ListQuery::from_controls(&self.view.filter_category(), self.view.sort_newest());

        match self.client.list_expenses(&query).await {
            Ok(response) => {
                log::debug!("loaded {} expenses", response.expenses.len());
                let page = ExpensePage::build(&response, &self.view.filter_category());
                self.view.render(page);
                self.view.set_status("");
            }
            Err(e) => {
                log::warn!("failed to load expenses: {}", e);
                self.view.set_status(STATUS_LOAD_FAILED);
            }
        }
    }

    /// validate the form and, if it passes, create the expense and reload
    pub async fn submit(&self) -> SubmitOutcome {
        self.view.clear_invalid();
        let fields = self.view.form_fields();

        if let Err(e) = fields.validate() {
            self.view.set_status(&e.to_string());
            self.view.mark_invalid(e.field());
            self.view.focus(e.field());
            return SubmitOutcome::Rejected(e);
        }

        self.view.set_submitting(true);
        self.view.set_status(STATUS_SUBMITTING);

        let expense = fields.to_new_expense((self.new_id)());
        let outcome = match self.client.create_expense(&expense).await {
            Ok(()) => {
                log::info!("saved expense {}", expense.id);
                self.load_and_render().await;
                self.view.set_status(STATUS_SAVED);
                self.view.clear_status_after(SAVED_STATUS_DELAY);
                self.view.reset_form();
                SubmitOutcome::Saved
            }
            Err(e) => {
                log::warn!("failed to save expense {}: {}", expense.id, e);
                self.view.set_status(STATUS_SAVE_FAILED);
                SubmitOutcome::Failed(e)
            }
        };

        self.view.set_submitting(false);
        outcome
    }
}

// ==============================================================================
// tests
// ==============================================================================
