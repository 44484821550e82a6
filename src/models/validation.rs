//! Single and batch validation payloads.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::nullable::{Nullable, int_or_sentinel, lenient_bool, null_as_default};
use crate::{Error, Result};

/// Declares a string backed enum that keeps values it does not know about.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $text:literal,)* }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)*
            /// A value this crate does not know yet, kept verbatim.
            Other(String),
        }

        impl $name {
            /// The wire literal.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $text,)*
                    Self::Other(s) => s,
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($text => Self::$variant,)*
                    _ => Self::Other(value),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(s) => s,
                    other => other.as_str().to_string(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum! {
    /// Coarse validation verdict.
    Status {
        Valid => "valid",
        Invalid => "invalid",
        CatchAll => "catch-all",
        Unknown => "unknown",
        Spamtrap => "spamtrap",
        Abuse => "abuse",
        DoNotMail => "do_not_mail",
    }
}

string_enum! {
    /// Reason code refining a [`Status`].
    SubStatus {
        /// No sub status was given (empty string on the wire).
        None => "",
        AntispamSystem => "antispam_system",
        Greylisted => "greylisted",
        MailServerTemporaryError => "mail_server_temporary_error",
        ForcibleDisconnect => "forcible_disconnect",
        MailServerDidNotRespond => "mail_server_did_not_respond",
        TimeoutExceeded => "timeout_exceeded",
        FailedSmtpConnection => "failed_smtp_connection",
        MailboxQuotaExceeded => "mailbox_quota_exceeded",
        ExceptionOccurred => "exception_occurred",
        PossibleTrap => "possible_trap",
        RoleBased => "role_based",
        GlobalSuppression => "global_suppression",
        MailboxNotFound => "mailbox_not_found",
        NoDnsEntries => "no_dns_entries",
        FailedSyntaxCheck => "failed_syntax_check",
        PossibleTypo => "possible_typo",
        UnroutableIpAddress => "unroutable_ip_address",
        LeadingPeriodRemoved => "leading_period_removed",
        DoesNotAcceptMail => "does_not_accept_mail",
        AliasAddress => "alias_address",
        RoleBasedCatchAll => "role_based_catch_all",
        Disposable => "disposable",
        Toxic => "toxic",
        MxForward => "mx_forward",
        Alternate => "alternate",
        Blocked => "blocked",
        Allowed => "allowed",
    }
}

impl Default for SubStatus {
    fn default() -> Self {
        Self::None
    }
}

/// Format of [`ValidateResponse::processed_at`].
pub const PROCESSED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Result of validating one address, alone or as part of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidateResponse {
    /// The address that was validated.
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    pub status: Status,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sub_status: SubStatus,
    /// Part before the `@`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub account: String,
    /// Part after the `@`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub domain: String,
    /// Suggested fix for a typo.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub did_you_mean: Nullable<String>,
    /// Domain age in days, as sent. See [`ValidateResponse::domain_age_days`].
    #[serde(
        default,
        rename = "domain_age_days",
        skip_serializing_if = "Nullable::is_absent"
    )]
    pub domain_age_days_raw: Nullable<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub free_email: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub mx_found: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mx_record: String,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub smtp_provider: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub firstname: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub lastname: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub gender: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub country: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub region: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub city: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub zipcode: Nullable<String>,
    /// UTC time of validation, as sent. See [`ValidateResponse::processed_at`].
    #[serde(default, rename = "processed_at", deserialize_with = "null_as_default")]
    pub processed_at_raw: String,
}

impl ValidateResponse {
    /// `true` only for status `valid`.
    pub fn is_valid(&self) -> bool {
        self.status == Status::Valid
    }

    /// Domain age in days, `-1` when missing, `null` or not a number.
    pub fn domain_age_days(&self) -> i64 {
        int_or_sentinel(self.domain_age_days_raw.as_deref())
    }

    /// Parsed `processed_at` (`YYYY-MM-DD HH:MM:SS`, UTC).
    pub fn processed_at(&self) -> Result<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.processed_at_raw, PROCESSED_AT_FORMAT)
            .map_err(|e| Error::parse("processed_at", e))
    }
}

/// One entry of a batch validation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailToValidate {
    pub email_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

impl EmailToValidate {
    pub fn new(email_address: impl Into<String>) -> Self {
        Self {
            email_address: email_address.into(),
            ip_address: None,
        }
    }

    pub fn with_ip(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = Some(ip_address.into());
        self
    }
}

/// A batch entry the API refused to validate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchError {
    #[serde(default, deserialize_with = "null_as_default")]
    pub error: String,
    /// The offending address, or `all` when the whole batch was refused.
    #[serde(default, deserialize_with = "null_as_default")]
    pub email_address: String,
}

/// Successes and failures of a batch validation, in response order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidateBatchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub email_batch: Vec<ValidateResponse>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<BatchError>,
}

#[derive(Serialize)]
pub(crate) struct BatchRequest<'a> {
    pub api_key: &'a str,
    pub email_batch: &'a [EmailToValidate],
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"{
        "address": "valid@example.com",
        "status": "valid",
        "sub_status": "",
        "free_email": false,
        "did_you_mean": null,
        "account": "valid",
        "domain": "example.com",
        "domain_age_days": "9692",
        "smtp_provider": "example",
        "mx_found": "true",
        "mx_record": "mx.example.com",
        "firstname": "zero",
        "lastname": "bounce",
        "gender": "male",
        "country": null,
        "region": null,
        "city": null,
        "zipcode": null,
        "processed_at": "2023-03-23 12:30:20.000"
    }"#;

    #[test]
    fn decodes_full_payload() {
        let r: ValidateResponse = serde_json::from_str(FULL).unwrap();
        assert!(r.is_valid());
        assert_eq!(r.sub_status, SubStatus::None);
        assert_eq!(r.domain_age_days(), 9692);
        assert!(r.mx_found);
        assert!(!r.free_email);
        assert!(r.did_you_mean.is_null());
        assert_eq!(r.firstname.as_deref(), Some("zero"));
        assert!(r.country.is_null());
    }

    #[test]
    fn minimal_payload_leaves_fields_absent() {
        let r: ValidateResponse =
            serde_json::from_str(r#"{"status":"valid","sub_status":""}"#).unwrap();
        assert!(r.is_valid());
        assert!(r.city.is_absent());
        assert_eq!(r.domain_age_days(), -1);
        assert!(r.processed_at().is_err());
    }

    #[test]
    fn processed_at_parses() {
        let r: ValidateResponse = serde_json::from_str(
            r#"{"status":"invalid","sub_status":"mailbox_not_found","processed_at":"2023-01-12 13:00:00"}"#,
        )
        .unwrap();
        let ts = r.processed_at().unwrap();
        assert_eq!(ts.to_string(), "2023-01-12 13:00:00");
        assert!(!r.is_valid());
        assert_eq!(r.sub_status, SubStatus::MailboxNotFound);
    }

    #[test]
    fn bad_processed_at_is_parse_error() {
        let r: ValidateResponse =
            serde_json::from_str(r#"{"status":"valid","processed_at":"12/01/2023"}"#).unwrap();
        assert!(matches!(
            r.processed_at(),
            Err(Error::Parse { field: "processed_at", .. })
        ));
    }

    #[test]
    fn null_text_fields_decode() {
        let r: ValidateResponse = serde_json::from_str(
            r#"{"address": null, "status": "unknown", "sub_status": null, "account": null,
                "domain": null, "domain_age_days": null, "free_email": null, "mx_found": null,
                "mx_record": null, "processed_at": null}"#,
        )
        .unwrap();
        assert_eq!(r.status, Status::Unknown);
        assert_eq!(r.sub_status, SubStatus::None);
        assert!(r.address.is_empty() && r.account.is_empty() && r.mx_record.is_empty());
        assert_eq!(r.domain_age_days(), -1);
        assert!(r.processed_at().is_err());

        let batch: ValidateBatchResponse = serde_json::from_str(
            r#"{"email_batch": null, "errors": [{"error": null, "email_address": "all"}]}"#,
        )
        .unwrap();
        assert!(batch.email_batch.is_empty());
        assert!(batch.errors[0].error.is_empty());
    }

    #[test]
    fn status_literals_round_trip() {
        for (text, status) in [
            ("valid", Status::Valid),
            ("catch-all", Status::CatchAll),
            ("do_not_mail", Status::DoNotMail),
            ("spamtrap", Status::Spamtrap),
        ] {
            assert_eq!(Status::from(text), status);
            assert_eq!(status.as_str(), text);
        }
        assert_eq!(Status::from("Valid"), Status::Other("Valid".into()));
    }

    #[test]
    fn unknown_sub_status_is_kept() {
        let s = SubStatus::from("brand_new_reason");
        assert_eq!(s.to_string(), "brand_new_reason");
        assert_eq!(SubStatus::from("role_based_catch_all"), SubStatus::RoleBasedCatchAll);
    }

    #[test]
    fn batch_request_shape() {
        let emails = [
            EmailToValidate::new("valid@example.com").with_ip("99.110.204.1"),
            EmailToValidate::default(),
        ];
        let body = serde_json::to_value(BatchRequest {
            api_key: "mock_key",
            email_batch: &emails,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "api_key": "mock_key",
                "email_batch": [
                    {"email_address": "valid@example.com", "ip_address": "99.110.204.1"},
                    {"email_address": ""}
                ]
            })
        );
    }
}
