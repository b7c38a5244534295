/// A non-fatal notice HelloSign attaches to an otherwise successful response.
///
/// See https://app.hellosign.com/api/reference#get_account
#[derive(serde::Serialize, serde::Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(default)]
pub struct Warning {
    #[serde(rename = "warning_msg")]
    pub warning_message: String,
    pub warning_name: String,
}
