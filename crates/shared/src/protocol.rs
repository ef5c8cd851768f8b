use serde::{Deserialize, Serialize};

use crate::domain::ChainRecord;

/// Successful response body from the chains endpoint. Wire order of
/// `chains` is preserved end to end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainsResponse {
    pub chains: Vec<ChainRecord>,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}
