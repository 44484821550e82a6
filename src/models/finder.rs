//! Email finder and domain search payloads.

use serde::{Deserialize, Serialize};

use super::nullable::null_as_default;

/// An alternative address format seen for a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainFormat {
    #[serde(default, deserialize_with = "null_as_default")]
    pub format: String,
    /// `low`, `medium`, `high`, `unknown` or `undetermined`; casing varies.
    #[serde(default, deserialize_with = "null_as_default")]
    pub confidence: String,
}

/// Best guess for a person's address at a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FindEmailResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub domain: String,
    #[serde(deserialize_with = "null_as_default")]
    pub format: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub confidence: String,
    #[serde(deserialize_with = "null_as_default")]
    pub did_you_mean: String,
    #[serde(deserialize_with = "null_as_default")]
    pub failure_reason: String,
    #[serde(deserialize_with = "null_as_default")]
    pub other_domain_formats: Vec<DomainFormat>,
}

/// Address patterns a company uses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainSearchResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub domain: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub format: String,
    #[serde(deserialize_with = "null_as_default")]
    pub confidence: String,
    #[serde(deserialize_with = "null_as_default")]
    pub did_you_mean: String,
    #[serde(deserialize_with = "null_as_default")]
    pub failure_reason: String,
    #[serde(deserialize_with = "null_as_default")]
    pub other_domain_formats: Vec<DomainFormat>,
}

impl DomainSearchResponse {
    /// Case-insensitive check on [`DomainSearchResponse::confidence`].
    pub fn is_confident(&self) -> bool {
        self.confidence.eq_ignore_ascii_case("high")
    }
}
