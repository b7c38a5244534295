use chrono::{DateTime, Utc};

use crate::client::{ApiRequest, Client, FormFields};
use crate::error::Result;
use crate::list_info::{ListInfo, ListQuery};
use crate::warning::Warning;

const API_APP_PATH: &str = "/api_app";

#[derive(serde::Serialize, serde::Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(default)]
pub struct ApiApp {
    pub api_app: ApiAppDetail,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub warnings: Vec<Warning>,
}

impl ApiApp {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(default)]
pub struct ApiAppList {
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub api_apps: Vec<ApiAppDetail>,
    pub list_info: ListInfo,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub warnings: Vec<Warning>,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(default)]
pub struct ApiAppDetail {
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub client_id: String,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub domain: String,
    pub callback_url: Option<String>,
    pub is_approved: bool,
    pub owner_account: OwnerAccount,
    pub options: Option<ApiAppOptions>,
    pub oauth: Option<OauthDetail>,
    pub white_labeling_options: Option<WhiteLabelingOptions>,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(default)]
pub struct OwnerAccount {
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub account_id: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub email_address: String,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(default)]
pub struct ApiAppOptions {
    pub can_insert_everywhere: bool,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(default)]
pub struct OauthDetail {
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub callback_url: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub secret: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub scopes: Vec<String>,
    pub charges_users: bool,
}

/// Colors applied to the embedded signing page. Values are hex strings
/// such as `#1A1A1A`.
#[derive(serde::Serialize, serde::Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(default)]
pub struct WhiteLabelingOptions {
    pub page_background_color: Option<String>,
    pub header_background_color: Option<String>,
    pub text_color1: Option<String>,
    pub text_color2: Option<String>,
    pub link_color: Option<String>,
    pub primary_button_color: Option<String>,
    pub primary_button_text_color: Option<String>,
    pub primary_button_color_hover: Option<String>,
    pub primary_button_text_color_hover: Option<String>,
    pub secondary_button_color: Option<String>,
    pub secondary_button_text_color: Option<String>,
    pub secondary_button_color_hover: Option<String>,
    pub secondary_button_text_color_hover: Option<String>,
}

/// Fields for creating or updating an API app. `None` fields are left out.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct ApiAppParams {
    pub name: Option<String>,
    pub domain: Option<String>,
    pub callback_url: Option<String>,
    pub white_labeling_options: Option<WhiteLabelingOptions>,
}

impl ApiAppParams {
    pub fn new(name: impl Into<String>, domain: impl Into<String>) -> Self {
        ApiAppParams {
            name: Some(name.into()),
            domain: Some(domain.into()),
            ..Default::default()
        }
    }

    fn to_form(&self) -> Result<FormFields> {
        let white_labeling_options = match &self.white_labeling_options {
            // sent as a JSON string field
            Some(options) => Some(serde_json::to_string(options)?),
            None => None,
        };
        Ok(FormFields::new()
            .optional_text("name", self.name.clone())
            .optional_text("domain", self.domain.clone())
            .optional_text("callback_url", self.callback_url.clone())
            .optional_text("white_labeling_options", white_labeling_options))
    }
}

pub struct ApiAppApi<'a> {
    client: &'a Client,
}

impl<'a> ApiAppApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        ApiAppApi { client }
    }

    pub async fn get(&self, client_id: &str) -> Result<ApiApp> {
        let path = format!("{}/{}", API_APP_PATH, client_id);
        self.client.call_json(ApiRequest::get(path)).await
    }

    pub async fn list(&self, query: ListQuery) -> Result<ApiAppList> {
        let path = format!("{}/list", API_APP_PATH);
        self.client
            .call_json(ApiRequest::get(path).query(query.to_query()))
            .await
    }

    pub async fn create(&self, params: &ApiAppParams) -> Result<ApiApp> {
        self.client
            .call_json(ApiRequest::post(API_APP_PATH).form(params.to_form()?))
            .await
    }

    pub async fn update(&self, client_id: &str, params: &ApiAppParams) -> Result<ApiApp> {
        let path = format!("{}/{}", API_APP_PATH, client_id);
        self.client
            .call_json(ApiRequest::post(path).form(params.to_form()?))
            .await
    }

    pub async fn delete(&self, client_id: &str) -> Result<()> {
        let path = format!("{}/{}", API_APP_PATH, client_id);
        self.client.call_api(ApiRequest::delete(path)).await?;
        Ok(())
    }
}
