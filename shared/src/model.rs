//! ==============================================================================
//! model.rs - expense wire types
//! ==============================================================================
//!
//! the server stores amounts as integer cents and renders them back as
//! decimal strings ("12.5"), so amounts are accepted as either a json
//! string or a json number and held as f64 for display and summing.
//!
//! ==============================================================================

use serde::{Deserialize, Deserializer, Serialize};

// ==============================================================================
// read side
// ==============================================================================

/// one recorded spend entry as returned by `GET /expenses`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Expense {
    pub id: String,
    #[serde(deserialize_with = "decimal")]
    pub amount: f64,
    pub category: String,
    /// null or missing renders as empty text
    #[serde(default, deserialize_with = "nullable_text")]
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// body of `GET /expenses`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExpenseListResponse {
    pub expenses: Vec<Expense>,
    /// server-computed total of the visible list
    #[serde(deserialize_with = "decimal")]
    pub total: f64,
}

// ==============================================================================
// write side
// ==============================================================================

/// body of `POST /expenses`
///
/// every field except `id` is the raw form string; the server does its own
/// decimal parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewExpense {
    pub id: String,
    pub amount: String,
    pub category: String,
    pub description: String,
    pub date: String,
}

// ==============================================================================
// serde helpers
// ==============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum Decimal {
    Number(f64),
    Text(String),
}

fn decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Decimal::deserialize(deserializer)? {
        Decimal::Number(n) => Ok(n),
        Decimal::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid decimal: {s:?}"))),
    }
}

fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// ==============================================================================
// tests
// ==============================================================================
