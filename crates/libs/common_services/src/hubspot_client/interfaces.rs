use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Category HubSpot uses for its built-in association types.
pub const HUBSPOT_DEFINED: &str = "HUBSPOT_DEFINED";

/// Display name used when the CRM company has no name.
pub const FALLBACK_COMPANY_NAME: &str = "New Account";

/// Which object type to follow from a deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociationKind {
    Company,
    Contact,
}

impl AssociationKind {
    #[must_use]
    pub const fn object_type(self) -> &'static str {
        match self {
            Self::Company => "companies",
            Self::Contact => "contacts",
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssociationLabel {
    pub category: String,
    pub type_id: i64,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssociationType {
    #[serde(default)]
    pub category: Option<String>,
    pub type_id: i64,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssociationRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub to_object_id: String,
    #[serde(default)]
    pub association_types: Vec<AssociationType>,
}

impl AssociationRecord {
    #[must_use]
    pub fn has_type(&self, type_id: i64) -> bool {
        self.association_types.iter().any(|t| t.type_id == type_id)
    }
}

#[derive(Deserialize, Debug)]
pub(crate) struct LabelsResponse {
    #[serde(default)]
    pub results: Vec<AssociationLabel>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct AssociationsResponse {
    #[serde(default)]
    pub results: Vec<AssociationRecord>,
    #[serde(default)]
    pub paging: Option<Paging>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct Paging {
    pub next: Option<NextPage>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct NextPage {
    pub after: Option<String>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ObjectResponse<P> {
    pub properties: P,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct CompanyProperties {
    pub name: Option<String>,
    pub domain: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct ContactProperties {
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub domain: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: String,
    pub email: Option<String>,
}

/// HubSpot returns object ids as numbers in v4 and as strings in v3.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "expected a string or number id, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn association_ids_accept_numbers_and_strings() -> serde_json::Result<()> {
        let numeric: AssociationRecord = serde_json::from_value(json!({
            "toObjectId": 9001,
            "associationTypes": [{ "category": "HUBSPOT_DEFINED", "typeId": 5, "label": "Primary" }]
        }))?;
        let text: AssociationRecord = serde_json::from_value(json!({ "toObjectId": "42" }))?;

        assert_eq!(numeric.to_object_id, "9001");
        assert!(numeric.has_type(5));
        assert_eq!(text.to_object_id, "42");
        assert!(text.association_types.is_empty());
        Ok(())
    }

    #[test]
    fn association_ids_reject_other_shapes() {
        let result = serde_json::from_value::<AssociationRecord>(json!({ "toObjectId": true }));
        assert!(result.is_err());
    }
}
