//! File job acknowledgements and status reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::nullable::{Nullable, null_as_default};
use crate::{Error, Result};

/// Returned by [`FileStatusResponse::percentage`] when the value cannot be read.
pub const PERCENTAGE_UNKNOWN: f64 = -1.0;

/// A `message` field that is sometimes text and sometimes structured JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiMessage {
    Text(String),
    Structured(serde_json::Value),
}

impl Default for ApiMessage {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<serde_json::Value> for ApiMessage {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Self::Text(s),
            other => Self::Structured(other),
        }
    }
}

impl std::fmt::Display for ApiMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Structured(v) => write!(f, "{v}"),
        }
    }
}

/// Acknowledgement of a file submission or deletion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileSubmitResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: ApiMessage,
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_id: String,
}

/// Progress of a file job.
///
/// A `success: false` body (for example an unknown `file_id`) still decodes;
/// check [`FileStatusResponse::success`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileStatusResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<ApiMessage>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_name: String,
    /// RFC 3339 upload time as sent. See [`FileStatusResponse::upload_date`].
    #[serde(default, rename = "upload_date", deserialize_with = "null_as_default")]
    pub upload_date_raw: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_status: String,
    /// Completion as sent, e.g. `"100%"` or `"100% Complete."`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub complete_percentage: String,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub error_reason: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub return_url: Nullable<String>,
}

impl FileStatusResponse {
    /// Completion as a number, or [`PERCENTAGE_UNKNOWN`].
    pub fn percentage(&self) -> f64 {
        parse_percentage(&self.complete_percentage).unwrap_or(PERCENTAGE_UNKNOWN)
    }

    pub fn upload_date(&self) -> Result<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.upload_date_raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| Error::parse("upload_date", e))
    }

    /// `file_status` reads `Complete`.
    pub fn is_complete(&self) -> bool {
        self.file_status.eq_ignore_ascii_case("complete")
    }
}

/// Number before the first `%`; trailing text after the sign is ignored but
/// the number itself must be exact (`"100 % done"` is rejected).
fn parse_percentage(raw: &str) -> Option<f64> {
    let number = raw.split_once('%').map_or(raw, |(head, _)| head);
    number.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn status(percentage: &str) -> FileStatusResponse {
        FileStatusResponse {
            complete_percentage: percentage.into(),
            ..Default::default()
        }
    }

    #[test]
    fn percentage_variants() {
        assert_eq!(status("100%").percentage(), 100.0);
        assert_eq!(status("100% Complete.").percentage(), 100.0);
        assert_eq!(status("42.5%").percentage(), 42.5);
        assert_eq!(status("100 % done").percentage(), PERCENTAGE_UNKNOWN);
        assert_eq!(status("").percentage(), PERCENTAGE_UNKNOWN);
        assert_eq!(status("abc%").percentage(), PERCENTAGE_UNKNOWN);
    }

    #[test]
    fn percentage_is_stable_across_calls() {
        let s = status("100% Complete.");
        assert_eq!(s.percentage(), s.percentage());
    }

    #[test]
    fn decodes_status_with_nulls() {
        let s: FileStatusResponse = serde_json::from_str(
            r#"{
                "success": true,
                "file_id": "AAAAAAAA-AAAA-AAAA-AAAA-AAAAAAAAAAAA",
                "file_name": "filename_200.csv",
                "upload_date": "2023-01-12T13:00:00Z",
                "file_status": "Complete",
                "complete_percentage": "100%",
                "error_reason": null,
                "return_url": null
            }"#,
        )
        .unwrap();
        assert!(s.success && s.is_complete());
        assert!(s.error_reason.is_null());
        assert_eq!(
            s.upload_date().unwrap(),
            Utc.with_ymd_and_hms(2023, 1, 12, 13, 0, 0).unwrap()
        );
    }

    #[test]
    fn null_progress_fields_decode() {
        let s: FileStatusResponse = serde_json::from_str(
            r#"{"success": true, "file_id": null, "file_name": null, "upload_date": null,
                "file_status": null, "complete_percentage": null, "error_reason": null}"#,
        )
        .unwrap();
        assert_eq!(s.percentage(), PERCENTAGE_UNKNOWN);
        assert!(!s.is_complete());
        assert!(matches!(s.upload_date(), Err(Error::Parse { .. })));

        let ack: FileSubmitResponse = serde_json::from_str(
            r#"{"success": null, "message": null, "file_name": null, "file_id": null}"#,
        )
        .unwrap();
        assert_eq!(ack, FileSubmitResponse::default());
    }

    #[test]
    fn bad_upload_date() {
        let s = FileStatusResponse {
            upload_date_raw: "2023-01-12 13:00".into(),
            ..Default::default()
        };
        assert!(matches!(
            s.upload_date(),
            Err(Error::Parse { field: "upload_date", .. })
        ));
    }

    #[test]
    fn message_is_polymorphic() {
        let text: FileSubmitResponse =
            serde_json::from_str(r#"{"success": true, "message": "File Accepted"}"#).unwrap();
        let obj: FileSubmitResponse =
            serde_json::from_str(r#"{"success": false, "message": {"detail": "bad"}}"#).unwrap();
        assert_eq!(text.message, ApiMessage::Text("File Accepted".into()));
        assert_eq!(obj.message.to_string(), r#"{"detail":"bad"}"#);
    }
}
