//! ==============================================================================
//! api.rs - HTTP client for the expenses endpoint
//! ==============================================================================

use gloo_net::http::{Request, Response};
use shared::{ApiError, ExpenseClient, ExpenseListResponse, ListQuery, NewExpense};

// ==============================================================================
// client
// ==============================================================================

#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn collection_url(&self) -> String {
        format!("{}/expenses", self.base_url)
    }

    fn list_url(&self, query: &ListQuery) -> String {
        format!("{}{}", self.collection_url(), query.to_query_string())
    }
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status()))
    }
}

impl ExpenseClient for HttpClient {
    /// GET /expenses with the current filter and sort
    async fn list_expenses(&self, query: &ListQuery) -> Result<ExpenseListResponse, ApiError> {
        let url = self.list_url(query);
        log::debug!("GET {}", url);

        let response = Request::get(&url).send().await.map_err(network)?;
        ensure_ok(response)?
            .json::<ExpenseListResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// POST /expenses
    async fn create_expense(&self, expense: &NewExpense) -> Result<(), ApiError> {
        let url = self.collection_url();
        log::debug!("POST {}", url);

        let response = Request::post(&url)
            .json(expense)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        ensure_ok(response).map(|_| ())
    }
}

// ==============================================================================
// tests
// ==============================================================================
