//! Query parameter types for the game routes.

use serde::Deserialize;

/// `?query-terms=` on the search route.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(rename = "query-terms")]
    pub query_terms: Option<String>,
}

/// `?message=` on the error route.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorParams {
    pub message: Option<String>,
}

/// Everything a by-name dispatch may need from the query string.
#[derive(Debug, Default, Deserialize)]
pub struct OperationParams {
    #[serde(rename = "query-terms")]
    pub query_terms: Option<String>,
    pub message: Option<String>,
}
