//! ==============================================================================
//! form.rs - new expense form and client-side validation
//! ==============================================================================

use thiserror::Error;

use crate::model::NewExpense;

/// form inputs that can be flagged invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Amount,
    Category,
    Date,
}

impl FormField {
    /// dom id of the input element
    pub fn id(self) -> &'static str {
        match self {
            FormField::Amount => "amount",
            FormField::Category => "category",
            FormField::Date => "date",
        }
    }
}

/// first failed check; `Display` is the status message shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a non-negative amount")]
    Amount,
    #[error("Please enter a category")]
    Category,
    #[error("Please select a date")]
    Date,
}

impl ValidationError {
    pub fn field(self) -> FormField {
        match self {
            ValidationError::Amount => FormField::Amount,
            ValidationError::Category => FormField::Category,
            ValidationError::Date => FormField::Date,
        }
    }
}

/// raw string values of the form inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub amount: String,
    pub category: String,
    pub description: String,
    pub date: String,
}

impl FormFields {
    /// checks run in order: amount, category, date
    pub fn validate(&self) -> Result<(), ValidationError> {
        match parse_amount(&self.amount) {
            Some(amount) if amount >= 0.0 => {}
            _ => return Err(ValidationError::Amount),
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::Category);
        }
        if self.date.is_empty() {
            return Err(ValidationError::Date);
        }
        Ok(())
    }

    /// create payload; the strings are sent exactly as typed
    pub fn to_new_expense(&self, id: String) -> NewExpense {
        NewExpense {
            id,
            amount: self.amount.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            date: self.date.clone(),
        }
    }
}

/// strict decimal parse; non-finite values (including overflow) are rejected
fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

// ==============================================================================
// tests
// ==============================================================================
