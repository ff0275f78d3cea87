//! Inventory Endpoints

use async_trait::async_trait;
use quantity_debounce::{FlushError, FlushTransport};

use super::{ApiClient, ApiError};
use crate::models::{AdjustRequest, AdjustResponse, InventoryItem};

impl ApiClient {
    pub async fn list_inventory(&self) -> Result<Vec<InventoryItem>, ApiError> {
        self.get(&["inventory"]).await
    }

    pub async fn get_item(&self, id: &str) -> Result<InventoryItem, ApiError> {
        self.get(&["inventory", id]).await
    }

    /// Apply a signed delta server-side; returns the authoritative quantity
    pub async fn adjust_quantity(&self, id: &str, delta: i64) -> Result<AdjustResponse, ApiError> {
        self.post(&["inventory", id, "adjust"], &AdjustRequest { delta }).await
    }
}

impl From<ApiError> for FlushError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { message, .. } => FlushError::new(message),
            other => FlushError::new(other.to_string()),
        }
    }
}

/// Sends debounced quantity deltas to `POST /inventory/{id}/adjust`
pub struct HttpFlushTransport {
    api: ApiClient,
}

impl HttpFlushTransport {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl FlushTransport for HttpFlushTransport {
    async fn adjust(&self, item_id: &str, delta: i64) -> Result<i64, FlushError> {
        let response = self.api.adjust_quantity(item_id, delta).await?;
        Ok(response.new_quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_errors_keep_only_the_message() {
        let err: FlushError = ApiError::Status { status: 422, message: "below zero".into() }.into();
        assert_eq!(err.message(), "below zero");

        let err: FlushError = ApiError::Decode("missing field `newQuantity`".into()).into();
        assert_eq!(err.message(), "unexpected response: missing field `newQuantity`");
    }
}
