use std::io;
use std::result;

use derive_more::{Display, Error, From};

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, Display, Error, From)]
pub enum Error {
    IoError {
        source: io::Error,
    },
    NetworkError {
        source: reqwest::Error,
    },
    JsonError {
        source: serde_json::Error,
    },
    ZipError {
        source: zip::result::ZipError,
    },
    /// A failure reported by HelloSign through its error envelope.
    #[display(fmt = "{}: {}", name, message)]
    #[from(ignore)]
    ApiError {
        name: String,
        message: String,
    },
    /// An error status whose body was not an error envelope.
    #[display(fmt = "unexpected status {}: {}", status, body)]
    #[from(ignore)]
    UnexpectedStatus {
        status: u16,
        body: String,
    },
}

impl Error {
    /// The `error_name` HelloSign returned, if this is an API error.
    pub fn api_error_name(&self) -> Option<&str> {
        match self {
            Error::ApiError { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// The JSON body HelloSign sends alongside an error status.
///
/// See https://app.hellosign.com/api/reference#ErrorNames for the list of names.
#[derive(serde::Serialize, serde::Deserialize, Clone, Default, Debug, PartialEq)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Default, Debug, PartialEq)]
pub struct ErrorDetail {
    #[serde(rename = "error_msg")]
    pub error_message: String,
    pub error_name: String,
}

/// Turns an error status and its body into the crate error.
pub(crate) fn from_status(status: u16, body: &str) -> Error {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(envelope) => Error::ApiError {
            name: envelope.error.error_name,
            message: envelope.error.error_message,
        },
        Err(_) => Error::UnexpectedStatus {
            status,
            body: body.to_string(),
        },
    }
}
