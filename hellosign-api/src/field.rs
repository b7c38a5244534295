/// Type of a form field placed on a document.
#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "checkbox")]
    Checkbox,
    #[serde(rename = "date_signed")]
    DateSigned,
    #[serde(rename = "dropdown")]
    Dropdown,
    #[serde(rename = "initials")]
    Initials,
    #[serde(rename = "radio")]
    Radio,
    #[serde(rename = "signature")]
    Signature,
    #[serde(rename = "text-merge")]
    TextMerge,
    #[serde(rename = "checkbox-merge")]
    CheckboxMerge,
    // Any type this crate does not know about yet.
    #[serde(other, rename = "unknown")]
    Unknown,
}

impl Default for FieldType {
    fn default() -> Self {
        FieldType::Unknown
    }
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Checkbox => "checkbox",
            FieldType::DateSigned => "date_signed",
            FieldType::Dropdown => "dropdown",
            FieldType::Initials => "initials",
            FieldType::Radio => "radio",
            FieldType::Signature => "signature",
            FieldType::TextMerge => "text-merge",
            FieldType::CheckboxMerge => "checkbox-merge",
            FieldType::Unknown => "unknown",
        }
    }
}
