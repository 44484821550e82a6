mod common;

use httpmock::prelude::*;
use regex::Regex;
use zerobounce_client::{CsvFile, Error, FileKind};

use common::*;

const INVALID_FILE_ID: &str = "XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX";
const FILE_ID_INVALID: &str = r#"{"success": false, "message": "file_id is invalid."}"#;
const SCORING_RESULT: &str = "\"Email Address\",\"ZeroBounceQualityScore\"\n\
\"valid@example.com\",\"10\"\n\
\"invalid@example.com\",\"10\"\n\
\"toxic@example.com\",\"2\"";

#[tokio::test]
async fn submit_passes_every_configured_column() {
    let server = MockServer::start_async().await;
    let fields = Regex::new(
        r#"(?s)name="api_key".*name="remove_duplicate"\s+false\s.*name="has_header_row"\s+true\s.*name="email_address_column"\s+1\s.*name="first_name_column"\s+2\s.*name="last_name_column"\s+3\s.*name="gender_column"\s+4\s.*name="ip_address_column"\s+5\s.*name="file"; filename="filename_200\.csv""#,
    )
    .unwrap();
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/scoring/sendfile").body_matches(fields);
            then.status(201).body(send_file_response_200());
        })
        .await;

    let file = CsvFile::from_bytes(SAMPLE_FILE_CONTENTS, FILE_NAME_200)
        .header_row(true)
        .email_address_column(1)
        .first_name_column(2)
        .last_name_column(3)
        .gender_column(4)
        .ip_address_column(5);
    let response = client_for(&server)
        .ai_scoring_submit(file, false)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.file_id, TESTING_FILE_ID);
}

#[tokio::test]
async fn submit_refused_with_200_is_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/scoring/sendfile");
            then.status(200)
                .body(r#"{"success": false, "message": "Email address column is required."}"#);
        })
        .await;

    let file = CsvFile::from_bytes(SAMPLE_FILE_CONTENTS, FILE_NAME_200);
    let err = client_for(&server)
        .ai_scoring_submit(file, false)
        .await
        .unwrap_err();
    match err {
        Error::Remote { status, message } => {
            assert_eq!(status, 200);
            assert!(message.contains("Email address column is required."));
        }
        other => panic!("expected Remote, got {other:?}"),
    }
}

#[tokio::test]
async fn status_complete_and_invalid() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/scoring/filestatus")
                .query_param("file_id", TESTING_FILE_ID);
            then.status(200).body(file_status_complete());
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/scoring/filestatus")
                .query_param("file_id", INVALID_FILE_ID);
            then.status(200).body(FILE_ID_INVALID);
        })
        .await;
    let client = client_for(&server);

    let done = client.ai_scoring_status(TESTING_FILE_ID).await.unwrap();
    assert!(done.is_complete());
    assert_eq!(done.percentage(), 100.0);

    let invalid = client.ai_scoring_status(INVALID_FILE_ID).await.unwrap();
    assert!(!invalid.success);
    assert_eq!(
        invalid.message.map(|m| m.to_string()).as_deref(),
        Some("file_id is invalid.")
    );
}

#[tokio::test]
async fn result_download_and_not_processed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/scoring/getfile")
                .query_param("file_id", TESTING_FILE_ID);
            then.status(200)
                .header("content-type", "application/octet-stream")
                .body(SCORING_RESULT);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/scoring/getfile")
                .query_param("file_id", INVALID_FILE_ID);
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"success": false, "message": "File not processed."}"#);
        })
        .await;
    let client = client_for(&server);

    let contents = client.ai_scoring_result(TESTING_FILE_ID).await.unwrap();
    assert_eq!(contents, SCORING_RESULT.as_bytes());

    let err = client.ai_scoring_result(INVALID_FILE_ID).await.unwrap_err();
    assert!(err.to_string().contains("File not processed."), "{err}");
}

#[tokio::test]
async fn delete_success_and_invalid() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/scoring/deletefile")
                .query_param("file_id", TESTING_FILE_ID);
            then.status(200).body(file_deleted());
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/scoring/deletefile")
                .query_param("file_id", INVALID_FILE_ID);
            then.status(200).body(FILE_ID_INVALID);
        })
        .await;
    let client = client_for(&server);

    assert!(client.ai_scoring_delete(TESTING_FILE_ID).await.unwrap().success);
    assert!(!client.ai_scoring_delete(INVALID_FILE_ID).await.unwrap().success);
}

#[tokio::test]
async fn generic_calls_use_scoring_paths() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/scoring/filestatus");
            then.status(200).body(file_status_complete());
        })
        .await;

    client_for(&server)
        .file_status(FileKind::AiScoring, TESTING_FILE_ID)
        .await
        .unwrap();
    mock.assert_async().await;
}
