//! Shared fixtures for the mock-server tests.
#![allow(dead_code)]

use httpmock::MockServer;
use zerobounce_client::Client;

pub const API_KEY: &str = "mock_key";
pub const TESTING_FILE_ID: &str = "AAAAAAAA-AAAA-AAAA-AAAA-AAAAAAAAAAAA";
pub const FILE_NAME_200: &str = "filename_200.csv";
pub const FILE_NAME_400: &str = "filename_400.csv";
pub const SAMPLE_ERROR_MESSAGE: &str = "error message";
pub const SAMPLE_ERROR_400: &str = r#"{"error":"error message"}"#;
pub const SAMPLE_FILE_CONTENTS: &str = "valid@example.com\ninvalid@example.com\ntoxic@example.com\n";

/// Nothing listens on port 1, so every request fails to connect.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

pub fn send_file_response_200() -> String {
    format!(
        r#"{{"success":true,"message":"File Accepted","file_name":"{FILE_NAME_200}","file_id":"{TESTING_FILE_ID}"}}"#
    )
}

pub fn file_status_complete() -> String {
    format!(
        r#"{{
            "success": true,
            "file_id": "{TESTING_FILE_ID}",
            "file_name": "{FILE_NAME_200}",
            "upload_date": "2023-01-12T13:00:00Z",
            "file_status": "Complete",
            "complete_percentage": "100% Complete.",
            "error_reason": null,
            "return_url": null
        }}"#
    )
}

pub const FILE_NOT_FOUND: &str = r#"{"success":false,"message":"File cannot be found."}"#;

pub fn file_deleted() -> String {
    format!(
        r#"{{"success":true,"message":"File Deleted","file_name":"{FILE_NAME_200}","file_id":"{TESTING_FILE_ID}"}}"#
    )
}

/// Client whose standard and bulk roots both point at `server`.
pub fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .api_key(API_KEY)
        .base_url(server.base_url())
        .bulk_base_url(server.base_url())
        .build()
        .unwrap()
}

pub fn unreachable_client() -> Client {
    Client::builder()
        .api_key(API_KEY)
        .base_url(UNREACHABLE_URL)
        .bulk_base_url(UNREACHABLE_URL)
        .build()
        .unwrap()
}
