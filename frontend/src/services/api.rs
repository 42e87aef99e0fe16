use gloo::net::http::Request;
use shared::BudgetCategory;
use thiserror::Error;

/// Errors at the budget-service boundary. Both kinds are caught by the
/// dashboard controller and mapped to its Failed state; they never reach the
/// UI tree.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure or non-2xx response
    #[error("failed to fetch budget data: {0}")]
    Fetch(String),
    /// Response body did not match the expected record shape
    #[error("unexpected budget payload: {0}")]
    Format(String),
}

/// API client for communicating with the budget service
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:3001".to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Fetch the budget categories, in the order the service returns them.
    pub async fn get_budget(&self) -> Result<Vec<BudgetCategory>, ApiError> {
        let url = format!("{}/budget", self.base_url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Fetch(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Fetch(format!(
                "server returned status {}",
                response.status()
            )));
        }

        response
            .json::<Vec<BudgetCategory>>()
            .await
            .map_err(|e| ApiError::Format(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds_keep_their_context() {
        let fetch = ApiError::Fetch("connection refused".to_string());
        assert!(fetch.to_string().contains("fetch"));
        assert!(fetch.to_string().contains("connection refused"));

        let format = ApiError::Format("missing field `budget`".to_string());
        assert!(format.to_string().contains("payload"));
        assert!(format.to_string().contains("missing field"));
    }

    #[test]
    fn base_url_can_be_overridden() {
        let client = ApiClient::with_base_url("https://budget.example".to_string());
        assert_eq!(client.base_url, "https://budget.example");
        assert_eq!(ApiClient::default().base_url, "http://localhost:3001");
    }
}
