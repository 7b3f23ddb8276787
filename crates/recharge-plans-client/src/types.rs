//! Wire types for the recharge plans API.

use serde::{Deserialize, Deserializer, Serialize};

/// Status code the API reports for a successful lookup.
pub const STATUS_OK: i64 = 200;

/// A single recharge plan.
///
/// Every field is optional upstream. A missing key or `null` decodes to an
/// empty string, and empty fields are left out when the plan is serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(
        rename = "recharge_value",
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub value: String,

    #[serde(
        rename = "recharge_talktime",
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub talktime: String,

    #[serde(
        rename = "recharge_validity",
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub validity: String,

    #[serde(
        rename = "recharge_short_description",
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub short_description: String,

    #[serde(
        rename = "recharge_description",
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub description: String,

    #[serde(
        rename = "recharge_description_more",
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub description_more: String,

    #[serde(
        rename = "product_type",
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub product_type: String,

    #[serde(
        rename = "circle_master",
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub circle: String,

    #[serde(
        rename = "operator_master",
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub operator: String,

    /// Plan category, e.g. "Topup" or "3G".
    #[serde(
        rename = "recharge_master",
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub category: String,

    #[serde(
        rename = "is_prepaid",
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub is_prepaid: String,
}

/// Response envelope wrapping every API reply.
#[derive(Debug, Clone, Deserialize)]
pub struct PlansEnvelope {
    pub status_code: i64,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub status_text: String,

    #[serde(default, deserialize_with = "null_as_empty_list")]
    pub data: Vec<Plan>,
}

impl PlansEnvelope {
    pub fn is_success(&self) -> bool {
        self.status_code == STATUS_OK
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_empty_list<'de, D>(deserializer: D) -> Result<Vec<Plan>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Plan>>::deserialize(deserializer)?.unwrap_or_default())
}
