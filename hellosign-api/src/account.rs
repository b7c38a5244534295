use crate::client::{ApiRequest, Client, FormFields};
use crate::error::Result;
use crate::warning::Warning;

const ACCOUNT_PATH: &str = "/account";
const ACCOUNT_CREATE_PATH: &str = "/account/create";
const ACCOUNT_VERIFY_PATH: &str = "/account/verify";

#[derive(serde::Serialize, serde::Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(default)]
pub struct Account {
    pub account: AccountDetail,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub warnings: Vec<Warning>,
}

impl Account {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(default)]
pub struct AccountDetail {
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub account_id: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub email_address: String,
    pub is_locked: bool,
    #[serde(rename = "is_paid_hs")]
    pub is_paid_hellosign: bool,
    #[serde(rename = "is_paid_hf")]
    pub is_paid_hellofax: bool,
    pub quotas: AccountQuotas,
    pub callback_url: Option<String>,
    pub role_code: Option<String>,
}

/// Remaining quotas. `None` means the quota is unlimited.
#[derive(serde::Serialize, serde::Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(default)]
pub struct AccountQuotas {
    pub api_signature_requests_left: Option<i64>,
    pub documents_left: Option<i64>,
    pub templates_left: Option<i64>,
}

pub struct AccountApi<'a> {
    client: &'a Client,
}

impl<'a> AccountApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        AccountApi { client }
    }

    /// Returns the account and its settings for the client's API key.
    pub async fn get(&self) -> Result<Account> {
        self.client.call_json(ApiRequest::get(ACCOUNT_PATH)).await
    }

    /// Sets the account callback URL.
    pub async fn update(&self, callback_url: &str) -> Result<Account> {
        let form = FormFields::new().text("callback_url", callback_url);
        self.client
            .call_json(ApiRequest::post(ACCOUNT_PATH).form(form))
            .await
    }

    pub async fn create(&self, email_address: &str) -> Result<Account> {
        let form = FormFields::new().text("email_address", email_address);
        self.client
            .call_json(ApiRequest::post(ACCOUNT_CREATE_PATH).form(form))
            .await
    }

    /// Checks whether a HelloSign account exists for the email address.
    ///
    /// Restricted to paid API users. When no account exists the server
    /// answers with an empty object, which decodes to a default `Account`.
    pub async fn verify(&self, email_address: &str) -> Result<Account> {
        let form = FormFields::new().text("email_address", email_address);
        self.client
            .call_json(ApiRequest::post(ACCOUNT_VERIFY_PATH).form(form))
            .await
    }
}
