//! Render model built from one list response.

use std::collections::BTreeSet;

use crate::model::ExpenseListResponse;
use crate::summary::{compute_summary, format_amount, CategorySummary};

/// one table row, amounts already formatted
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRow {
    pub id: String,
    pub date: String,
    pub category: String,
    pub description: String,
    pub amount: String,
}

/// category filter options for the latest list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// sorted, de-duplicated; the "All" option (empty value) is implicit
    pub categories: Vec<String>,
    /// empty when "All" is selected
    pub selected: String,
}

impl FilterOptions {
    /// keeps `previous` selected only if it is still one of `categories`
    pub fn rebuild<'a>(categories: impl IntoIterator<Item = &'a str>, previous: &str) -> Self {
        let categories: Vec<String> = categories
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect();
        let selected = if categories.iter().any(|c| c == previous) {
            previous.to_string()
        } else {
            String::new()
        };
        Self { categories, selected }
    }
}

/// everything a reload replaces on screen
#[derive(Debug, Clone, PartialEq)]
pub struct ExpensePage {
    pub rows: Vec<ExpenseRow>,
    /// server total with two decimals, no currency symbol
    pub total: String,
    pub filter: FilterOptions,
    pub summary: Vec<CategorySummary>,
}

impl ExpensePage {
    pub fn build(response: &ExpenseListResponse, selected_filter: &str) -> Self {
        let rows = response
            .expenses
            .iter()
            .map(|e| ExpenseRow {
                id: e.id.clone(),
                date: e.date.clone(),
                category: e.category.clone(),
                description: e.description.clone(),
                amount: format_amount(e.amount),
            })
            .collect();

        let filter = FilterOptions::rebuild(
            response.expenses.iter().map(|e| e.category.as_str()),
            selected_filter,
        );

        Self {
            rows,
            total: format_amount(response.total),
            filter,
            summary: compute_summary(&response.expenses),
        }
    }
}
