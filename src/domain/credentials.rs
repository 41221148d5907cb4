use serde::Deserialize;
use std::fmt;

/// One row of the credentials store.
///
/// Columns are `merchantAccount,wsUser,wsPass,apiKey`. The web-service pair is
/// kept for the classic API even though the checkout endpoints only need the
/// API key.
#[derive(Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub merchant_account: String,
    pub ws_user: String,
    pub ws_pass: String,
    pub api_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("merchant_account", &self.merchant_account)
            .field("ws_user", &self.ws_user)
            .field("ws_pass", &"***")
            .field("api_key", &"***")
            .finish()
    }
}
