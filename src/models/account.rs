//! Credits, API usage and activity data payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::nullable::{Nullable, int_or_sentinel, null_as_default, string_or_number};
use crate::{Error, Result};

/// Format used to send usage window bounds.
pub const USAGE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats accepted when reading usage window bounds back.
const USAGE_DATE_INPUT_FORMATS: [&str; 2] = [USAGE_DATE_FORMAT, "%m/%d/%Y"];

/// Remaining credit balance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditsResponse {
    /// Balance as sent; the API has used both numbers and strings here.
    #[serde(rename = "Credits", default, deserialize_with = "string_or_number")]
    pub credits_raw: String,
}

impl CreditsResponse {
    /// Balance as an integer, `-1` when it cannot be read.
    pub fn credits(&self) -> i64 {
        int_or_sentinel(Some(&self.credits_raw))
    }
}

/// Per-status and per-sub-status counters over a date window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiUsageResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub total: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub status_valid: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub status_invalid: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub status_catch_all: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub status_do_not_mail: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub status_spamtrap: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub status_unknown: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_status_toxic: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_status_disposable: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_status_role_based: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_status_possible_trap: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_status_global_suppression: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_status_timeout_exceeded: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_status_mail_server_temporary_error: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_status_mail_server_did_not_respond: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_status_greylisted: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_status_antispam_system: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_status_does_not_accept_mail: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_status_exception_occurred: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_status_failed_syntax_check: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_status_mailbox_not_found: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_status_unroutable_ip_address: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_status_possible_typo: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_status_no_dns_entries: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_status_role_based_catch_all: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_status_mailbox_quota_exceeded: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_status_forcible_disconnect: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_status_failed_smtp_connection: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_status_mx_forward: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_status_alternate: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_status_blocked: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_status_allowed: u64,
    /// Window start as sent. See [`ApiUsageResponse::start_date`].
    #[serde(rename = "start_date", deserialize_with = "null_as_default")]
    pub start_date_raw: String,
    /// Window end as sent. See [`ApiUsageResponse::end_date`].
    #[serde(rename = "end_date", deserialize_with = "null_as_default")]
    pub end_date_raw: String,
}

impl ApiUsageResponse {
    pub fn start_date(&self) -> Result<NaiveDate> {
        parse_usage_date("start_date", &self.start_date_raw)
    }

    pub fn end_date(&self) -> Result<NaiveDate> {
        parse_usage_date("end_date", &self.end_date_raw)
    }
}

fn parse_usage_date(field: &'static str, raw: &str) -> Result<NaiveDate> {
    USAGE_DATE_INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw.trim(), fmt).ok())
        .ok_or_else(|| Error::parse(field, format!("unrecognized date {raw:?}")))
}

/// Whether an address was seen active recently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDataResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub found: bool,
    #[serde(
        default,
        rename = "active_in_days",
        skip_serializing_if = "Nullable::is_absent"
    )]
    pub active_in_days_raw: Nullable<String>,
}

impl ActivityDataResponse {
    /// Days since last activity, `-1` when unknown.
    pub fn active_in_days(&self) -> i64 {
        int_or_sentinel(self.active_in_days_raw.as_deref())
    }
}
