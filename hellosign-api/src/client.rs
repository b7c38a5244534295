use std::fmt;
use std::fs;
use std::io;
use std::path;
use std::time::Duration;

use reqwest::multipart;
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::account::AccountApi;
use crate::api_app::ApiAppApi;
use crate::error::{self, Result};
use crate::signature_request::SignatureRequestApi;
use crate::team::TeamApi;

pub const BASE_URL: &str = "https://api.hellosign.com/v3";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("hellosign-api/", env!("CARGO_PKG_VERSION"));

#[derive(serde::Serialize, serde::Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_key: String::new(),
            base_url: BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        ClientConfig {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn load<R>(&mut self, f: R) -> Result<()>
    where
        R: io::Read,
    {
        #[allow(clippy::unit_arg)]
        Ok(*self = serde_json::from_reader(f)?)
    }

    pub fn load_from_path(&mut self, p: &path::Path) -> Result<()> {
        self.load(io::BufReader::new(fs::File::open(p)?))
    }

    pub fn save<W>(&self, f: W) -> Result<()>
    where
        W: io::Write,
    {
        Ok(serde_json::to_writer_pretty(f, self)?)
    }

    pub fn save_to_path(&self, p: &path::Path) -> Result<()> {
        self.save(io::BufWriter::new(fs::File::create(p)?))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Multipart form fields for a mutating call, kept as plain data until the
/// request is sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct FormFields {
    fields: Vec<(String, FormValue)>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FormValue {
    Text(String),
    File { file_name: String, data: Vec<u8> },
}

impl FormFields {
    pub(crate) fn new() -> Self {
        Default::default()
    }

    pub(crate) fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields
            .push((name.into(), FormValue::Text(value.into())));
        self
    }

    /// Adds the field only when a value is present.
    pub(crate) fn optional_text<S>(self, name: impl Into<String>, value: Option<S>) -> Self
    where
        S: Into<String>,
    {
        match value {
            Some(v) => self.text(name, v),
            None => self,
        }
    }

    pub(crate) fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        self.fields.push((
            name.into(),
            FormValue::File {
                file_name: file_name.into(),
                data,
            },
        ));
        self
    }

    #[cfg(test)]
    pub(crate) fn get(&self, name: &str) -> Option<&FormValue> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    #[cfg(test)]
    pub(crate) fn get_text(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(FormValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.fields.len()
    }

    fn into_multipart(self) -> multipart::Form {
        self.fields
            .into_iter()
            .fold(multipart::Form::new(), |form, (name, value)| match value {
                FormValue::Text(text) => form.text(name, text),
                FormValue::File { file_name, data } => {
                    form.part(name, multipart::Part::bytes(data).file_name(file_name))
                }
            })
    }
}

/// One outbound call: method, path below the base URL, query and form.
#[derive(Debug)]
pub(crate) struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(&'static str, String)>,
    form: Option<FormFields>,
}

impl ApiRequest {
    pub(crate) fn new(method: Method, path: impl Into<String>) -> Self {
        ApiRequest {
            method,
            path: path.into(),
            query: Vec::new(),
            form: None,
        }
    }

    pub(crate) fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub(crate) fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub(crate) fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub(crate) fn query(mut self, pairs: Vec<(&'static str, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    pub(crate) fn form(mut self, form: FormFields) -> Self {
        self.form = Some(form);
        self
    }
}

#[derive(Clone)]
pub struct Client {
    config: ClientConfig,
    http_client: reqwest::Client,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Client {
    pub fn new(config: ClientConfig, http_client: reqwest::Client) -> Self {
        Client {
            config,
            http_client,
        }
    }

    /// Builds a client against the production API with a default transport.
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Client::new(ClientConfig::new(api_key), http_client))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http_client
    }

    pub fn account(&self) -> AccountApi<'_> {
        AccountApi::new(self)
    }

    pub fn team(&self) -> TeamApi<'_> {
        TeamApi::new(self)
    }

    pub fn signature_request(&self) -> SignatureRequestApi<'_> {
        SignatureRequestApi::new(self)
    }

    pub fn api_app(&self) -> ApiAppApi<'_> {
        ApiAppApi::new(self)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Sends the request and returns the response if its status is below 400.
    pub(crate) async fn call_api(&self, request: ApiRequest) -> Result<reqwest::Response> {
        let url = self.url(&request.path);
        debug!(method = %request.method, path = %request.path, "sending request");

        let mut builder = self
            .http_client
            .request(request.method, &url)
            .basic_auth(&self.config.api_key, Some(""))
            .timeout(self.config.timeout());
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(form) = request.form {
            builder = builder.multipart(form.into_multipart());
        }

        let response = builder.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), path = %request.path, "received response");

        if status.as_u16() < 400 {
            return Ok(response);
        }
        let body = response.text().await?;
        let err = error::from_status(status.as_u16(), &body);
        warn!(status = status.as_u16(), path = %request.path, error = %err, "request failed");
        Err(err)
    }

    pub(crate) async fn call_json<T>(&self, request: ApiRequest) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.call_api(request).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str::<T>(&body)?)
    }

    pub(crate) async fn call_bytes(&self, request: ApiRequest) -> Result<bytes::Bytes> {
        let response = self.call_api(request).await?;
        Ok(response.bytes().await?)
    }
}
