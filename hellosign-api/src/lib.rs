//! Bindings for the HelloSign e-signature API.
//!
//! ```no_run
//! # async fn run() -> hellosign_api::Result<()> {
//! let client = hellosign_api::Client::with_api_key("my-api-key")?;
//! let account = client.account().get().await?;
//! println!("{}", account.account.email_address);
//! # Ok(())
//! # }
//! ```

mod account;
mod api_app;
mod client;
mod de;
mod error;
mod event;
mod field;
mod list_info;
mod signature_request;
mod team;
mod warning;

pub use account::{Account, AccountApi, AccountDetail, AccountQuotas};
pub use api_app::{
    ApiApp, ApiAppApi, ApiAppDetail, ApiAppList, ApiAppOptions, ApiAppParams,
    OauthDetail, OwnerAccount, WhiteLabelingOptions,
};
pub use client::{Client, ClientConfig, BASE_URL};
pub use error::{Error, ErrorDetail, ErrorResponse, Result};
pub use event::{Event, EventDetail, EventMetadata};
pub use field::FieldType;
pub use list_info::{ListInfo, ListQuery};
pub use signature_request::{
    CustomField, FileType, FileUpload, ResponseData, SendSignatureRequest,
    Signature, SignatureRequest, SignatureRequestApi, SignatureRequestDetail,
    SignatureRequestList, Signer,
};
pub use team::{
    Team, TeamApi, TeamDetail, TeamMemberParams, TeamRemoveMemberParams,
};
pub use warning::Warning;
