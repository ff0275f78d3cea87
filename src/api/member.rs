//! Member Endpoints

use super::{ApiClient, ApiError};
use crate::models::Member;

impl ApiClient {
    /// The member the bearer token belongs to
    pub async fn current_member(&self) -> Result<Member, ApiError> {
        self.get(&["me"]).await
    }
}
