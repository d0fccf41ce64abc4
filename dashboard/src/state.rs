//! ==============================================================================
//! state.rs - reactive page state behind the view controller
//! ==============================================================================
//!
//! every piece of the page the controller touches is a signal here, so the
//! components only bind to these and never call the api themselves.
//!
//! ==============================================================================

use std::time::Duration;

use leptos::html::Input;
use leptos::prelude::*;
use shared::{Controller, ExpensePage, ExpenseView, FormField, FormFields};
use wasm_bindgen::JsValue;

use crate::api::HttpClient;

pub type DashboardController = Controller<HttpClient, DashboardState>;

/// dom refs of the inputs that can receive focus after a failed check
#[derive(Clone, Copy)]
pub struct FieldRefs {
    pub amount: NodeRef<Input>,
    pub category: NodeRef<Input>,
    pub date: NodeRef<Input>,
}

#[derive(Clone, Copy)]
pub struct DashboardState {
    pub status: RwSignal<String>,
    pub page: RwSignal<Option<ExpensePage>>,

    // list controls
    pub filter: RwSignal<String>,
    pub sort_newest: RwSignal<bool>,

    // form
    pub amount: RwSignal<String>,
    pub category: RwSignal<String>,
    pub description: RwSignal<String>,
    pub date: RwSignal<String>,
    pub invalid: RwSignal<Option<FormField>>,
    pub submitting: RwSignal<bool>,
    pub refs: FieldRefs,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            status: RwSignal::new(String::new()),
            page: RwSignal::new(None),
            filter: RwSignal::new(String::new()),
            sort_newest: RwSignal::new(false),
            amount: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            date: RwSignal::new(String::new()),
            invalid: RwSignal::new(None),
            submitting: RwSignal::new(false),
            refs: FieldRefs {
                amount: NodeRef::new(),
                category: NodeRef::new(),
                date: NodeRef::new(),
            },
        }
    }

    /// typing into a flagged input clears its flag
    pub fn clear_invalid_field(&self, field: FormField) {
        if self.invalid.get_untracked() == Some(field) {
            self.invalid.set(None);
        }
    }

    pub fn is_invalid(&self, field: FormField) -> bool {
        self.invalid.get() == Some(field)
    }
}

impl ExpenseView for DashboardState {
    fn filter_category(&self) -> String {
        self.filter.get_untracked()
    }

    fn sort_newest(&self) -> bool {
        self.sort_newest.get_untracked()
    }

    fn form_fields(&self) -> FormFields {
        FormFields {
            amount: self.amount.get_untracked(),
            category: self.category.get_untracked(),
            description: self.description.get_untracked(),
            date: self.date.get_untracked(),
        }
    }

    fn set_status(&self, status: &str) {
        self.status.set(status.to_string());
    }

    fn render(&self, page: ExpensePage) {
        self.filter.set(page.filter.selected.clone());
        self.page.set(Some(page));
    }

    fn clear_invalid(&self) {
        self.invalid.set(None);
    }

    fn mark_invalid(&self, field: FormField) {
        self.invalid.set(Some(field));
    }

    fn focus(&self, field: FormField) {
        let node = match field {
            FormField::Amount => self.refs.amount,
            FormField::Category => self.refs.category,
            FormField::Date => self.refs.date,
        };
        if let Some(input) = node.get_untracked() {
            if input.focus().is_err() {
                log::debug!("could not focus #{}", field.id());
            }
        }
    }

    fn set_submitting(&self, submitting: bool) {
        self.submitting.set(submitting);
    }

    fn reset_form(&self) {
        self.amount.set(String::new());
        self.category.set(String::new());
        self.description.set(String::new());
        self.date.set(String::new());
    }

    fn clear_status_after(&self, delay: Duration) {
        let status = self.status;
        set_timeout(move || status.set(String::new()), delay);
    }
}

/// `crypto.randomUUID()` when the browser has it, else `id-<epoch millis>`
pub fn new_expense_id() -> String {
    web_sys::window()
        .and_then(|w| w.crypto().ok())
        .filter(|c| {
            // randomUUID only exists in secure contexts
            js_sys::Reflect::get(c, &JsValue::from_str("randomUUID"))
                .map(|f| f.is_function())
                .unwrap_or(false)
        })
        .map(|c| c.random_uuid())
        .unwrap_or_else(|| format!("id-{}", js_sys::Date::now() as u64))
}
