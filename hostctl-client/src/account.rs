//! Account endpoint

use crate::CloudClient;
use crate::error::Result;
use hostctl_core::domain::account::Account;

impl CloudClient {
    /// Get the account the credentials belong to
    pub async fn get_account(&self) -> Result<Account> {
        let response = self.get("/account").await?.send().await?;

        self.handle_response(response).await
    }
}
