use crate::account::AccountDetail;
use crate::client::{ApiRequest, Client, FormFields};
use crate::error::Result;
use crate::warning::Warning;

const TEAM_PATH: &str = "/team";
const TEAM_CREATE_PATH: &str = "/team/create";
const TEAM_DESTROY_PATH: &str = "/team/destroy";
const TEAM_ADD_MEMBER_PATH: &str = "/team/add_member";
const TEAM_REMOVE_MEMBER_PATH: &str = "/team/remove_member";

#[derive(serde::Serialize, serde::Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(default)]
pub struct Team {
    pub team: TeamDetail,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub warnings: Vec<Warning>,
}

impl Team {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(default)]
pub struct TeamDetail {
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub accounts: Vec<AccountDetail>,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub invited_accounts: Vec<AccountDetail>,
}

/// Identifies a team member. HelloSign prefers `account_id` when both are set.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct TeamMemberParams {
    pub account_id: Option<String>,
    pub email_address: Option<String>,
}

impl TeamMemberParams {
    pub fn by_account_id(account_id: impl Into<String>) -> Self {
        TeamMemberParams {
            account_id: Some(account_id.into()),
            email_address: None,
        }
    }

    pub fn by_email_address(email_address: impl Into<String>) -> Self {
        TeamMemberParams {
            account_id: None,
            email_address: Some(email_address.into()),
        }
    }

    fn to_form(&self) -> FormFields {
        FormFields::new()
            .optional_text("account_id", self.account_id.clone())
            .optional_text("email_address", self.email_address.clone())
    }
}

#[derive(Clone, Default, Debug, PartialEq)]
pub struct TeamRemoveMemberParams {
    pub member: TeamMemberParams,
    /// Receives the removed account's documents, templates and API apps.
    /// Enterprise plans only.
    pub new_owner_email_address: Option<String>,
}

impl TeamRemoveMemberParams {
    fn to_form(&self) -> FormFields {
        self.member
            .to_form()
            .optional_text("new_owner_email_address", self.new_owner_email_address.clone())
    }
}

pub struct TeamApi<'a> {
    client: &'a Client,
}

impl<'a> TeamApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        TeamApi { client }
    }

    /// Returns your team and its members.
    pub async fn get(&self) -> Result<Team> {
        self.client.call_json(ApiRequest::get(TEAM_PATH)).await
    }

    /// Creates a team and makes the API account a member of it.
    pub async fn create(&self, name: &str) -> Result<Team> {
        let form = FormFields::new().text("name", name);
        self.client
            .call_json(ApiRequest::post(TEAM_CREATE_PATH).form(form))
            .await
    }

    pub async fn update(&self, name: &str) -> Result<Team> {
        let form = FormFields::new().text("name", name);
        self.client
            .call_json(ApiRequest::post(TEAM_PATH).form(form))
            .await
    }

    /// Deletes the team. Only allowed while you are its only member.
    pub async fn delete(&self) -> Result<()> {
        self.client
            .call_api(ApiRequest::post(TEAM_DESTROY_PATH))
            .await?;
        Ok(())
    }

    /// Invites a user, creating a HelloSign account for them if needed.
    ///
    /// Users already on another team get a `team_invite_failed` error.
    pub async fn add_member(&self, params: &TeamMemberParams) -> Result<Team> {
        self.client
            .call_json(ApiRequest::post(TEAM_ADD_MEMBER_PATH).form(params.to_form()))
            .await
    }

    pub async fn remove_member(&self, params: &TeamRemoveMemberParams) -> Result<Team> {
        self.client
            .call_json(ApiRequest::post(TEAM_REMOVE_MEMBER_PATH).form(params.to_form()))
            .await
    }
}
