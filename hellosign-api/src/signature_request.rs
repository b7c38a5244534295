use std::collections::BTreeMap;
use std::io;

use chrono::{DateTime, Utc};
use zip::ZipArchive;

use crate::client::{ApiRequest, Client, FormFields};
use crate::error::Result;
use crate::field::FieldType;
use crate::list_info::{ListInfo, ListQuery};
use crate::warning::Warning;

const SIGNATURE_REQUEST_PATH: &str = "/signature_request";

#[derive(serde::Serialize, serde::Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(default)]
pub struct SignatureRequest {
    pub signature_request: SignatureRequestDetail,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub warnings: Vec<Warning>,
}

impl SignatureRequest {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(default)]
pub struct SignatureRequestList {
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub signature_requests: Vec<SignatureRequestDetail>,
    pub list_info: ListInfo,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub warnings: Vec<Warning>,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(default)]
pub struct SignatureRequestDetail {
    pub test_mode: bool,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub signature_request_id: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub requester_email_address: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub original_title: String,
    pub subject: Option<String>,
    pub message: Option<String>,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub metadata: BTreeMap<String, serde_json::Value>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,
    pub is_complete: bool,
    pub is_declined: bool,
    pub has_error: bool,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub files_url: String,
    pub signing_url: Option<String>,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub details_url: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub cc_email_addresses: Vec<String>,
    pub signing_redirect_url: Option<String>,
    pub template_ids: Option<Vec<String>>,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub custom_fields: Vec<CustomField>,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub response_data: Vec<ResponseData>,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub signatures: Vec<Signature>,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(default)]
pub struct CustomField {
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub name: String,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub field_type: FieldType,
    pub value: serde_json::Value,
    pub required: bool,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub api_id: String,
    pub editor: Option<String>,
}

/// A value a signer entered into a field.
#[derive(serde::Serialize, serde::Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(default)]
pub struct ResponseData {
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub api_id: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub signature_id: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub name: String,
    pub value: serde_json::Value,
    pub required: bool,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub field_type: FieldType,
}

/// Per-signer state of a signature request.
#[derive(serde::Serialize, serde::Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(default)]
pub struct Signature {
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub signature_id: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub signer_email_address: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub signer_name: String,
    pub signer_role: Option<String>,
    pub order: Option<u32>,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub status_code: String,
    pub decline_reason: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub signed_at: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub last_viewed_at: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub last_reminded_at: Option<DateTime<Utc>>,
    pub has_pin: bool,
    pub reassigned_by: Option<String>,
    pub reassignment_reason: Option<String>,
    pub error: Option<String>,
}

#[derive(Clone, Default, Debug, PartialEq)]
pub struct Signer {
    pub name: String,
    pub email_address: String,
    pub order: Option<u32>,
    /// Four to twelve character access code the signer must enter.
    pub pin: Option<String>,
}

impl Signer {
    pub fn new(name: impl Into<String>, email_address: impl Into<String>) -> Self {
        Signer {
            name: name.into(),
            email_address: email_address.into(),
            ..Default::default()
        }
    }
}

/// A document uploaded with the request body.
#[derive(Clone, Debug, PartialEq)]
pub struct FileUpload {
    pub file_name: String,
    pub data: Vec<u8>,
}

#[derive(Clone, Default, Debug, PartialEq)]
pub struct SendSignatureRequest {
    pub test_mode: bool,
    pub title: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub signing_redirect_url: Option<String>,
    pub signers: Vec<Signer>,
    pub cc_email_addresses: Vec<String>,
    pub files: Vec<FileUpload>,
    pub file_urls: Vec<String>,
    pub metadata: BTreeMap<String, String>,
}

impl SendSignatureRequest {
    pub(crate) fn to_form(&self) -> FormFields {
        let mut form = FormFields::new()
            .text("test_mode", if self.test_mode { "1" } else { "0" })
            .optional_text("title", self.title.clone())
            .optional_text("subject", self.subject.clone())
            .optional_text("message", self.message.clone())
            .optional_text("signing_redirect_url", self.signing_redirect_url.clone());

        for (i, signer) in self.signers.iter().enumerate() {
            form = form
                .text(format!("signers[{}][name]", i), signer.name.clone())
                .text(
                    format!("signers[{}][email_address]", i),
                    signer.email_address.clone(),
                )
                .optional_text(
                    format!("signers[{}][order]", i),
                    signer.order.map(|o| o.to_string()),
                )
                .optional_text(format!("signers[{}][pin]", i), signer.pin.clone());
        }
        for (i, cc) in self.cc_email_addresses.iter().enumerate() {
            form = form.text(format!("cc_email_addresses[{}]", i), cc.clone());
        }
        for (i, file) in self.files.iter().enumerate() {
            form = form.file(format!("file[{}]", i), file.file_name.clone(), file.data.clone());
        }
        for (i, url) in self.file_urls.iter().enumerate() {
            form = form.text(format!("file_url[{}]", i), url.clone());
        }
        for (key, value) in &self.metadata {
            form = form.text(format!("metadata[{}]", key), value.clone());
        }
        form
    }
}

/// Format of the documents returned by [`SignatureRequestApi::files`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Zip,
}

impl FileType {
    fn as_str(&self) -> &'static str {
        match self {
            FileType::Pdf => "pdf",
            FileType::Zip => "zip",
        }
    }
}

pub struct SignatureRequestApi<'a> {
    client: &'a Client,
}

impl<'a> SignatureRequestApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        SignatureRequestApi { client }
    }

    pub async fn get(&self, id: &str) -> Result<SignatureRequest> {
        let path = format!("{}/{}", SIGNATURE_REQUEST_PATH, id);
        self.client.call_json(ApiRequest::get(path)).await
    }

    pub async fn list(&self, query: ListQuery) -> Result<SignatureRequestList> {
        let path = format!("{}/list", SIGNATURE_REQUEST_PATH);
        self.client
            .call_json(ApiRequest::get(path).query(query.to_query()))
            .await
    }

    pub async fn send(&self, request: &SendSignatureRequest) -> Result<SignatureRequest> {
        let path = format!("{}/send", SIGNATURE_REQUEST_PATH);
        self.client
            .call_json(ApiRequest::post(path).form(request.to_form()))
            .await
    }

    /// Sends an email reminder to a signer who has not signed yet.
    pub async fn remind(&self, id: &str, email_address: &str) -> Result<SignatureRequest> {
        let path = format!("{}/remind/{}", SIGNATURE_REQUEST_PATH, id);
        let form = FormFields::new().text("email_address", email_address);
        self.client
            .call_json(ApiRequest::post(path).form(form))
            .await
    }

    /// Cancels an incomplete signature request.
    pub async fn cancel(&self, id: &str) -> Result<()> {
        let path = format!("{}/cancel/{}", SIGNATURE_REQUEST_PATH, id);
        self.client.call_api(ApiRequest::post(path)).await?;
        Ok(())
    }

    pub async fn files(&self, id: &str, file_type: FileType) -> Result<bytes::Bytes> {
        let path = format!("{}/files/{}", SIGNATURE_REQUEST_PATH, id);
        self.client
            .call_bytes(
                ApiRequest::get(path).query(vec![("file_type", file_type.as_str().to_string())]),
            )
            .await
    }

    /// Downloads the documents as a zip with one file per document.
    pub async fn files_zip(&self, id: &str) -> Result<ZipArchive<io::Cursor<bytes::Bytes>>> {
        let bytes = self.files(id, FileType::Zip).await?;
        // ZipArchive needs Seek
        let zip = ZipArchive::new(io::Cursor::new(bytes))?;
        Ok(zip)
    }
}
