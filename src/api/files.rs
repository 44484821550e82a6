//! Asynchronous file jobs: bulk validation, AI scoring, email finder and
//! domain search.
//!
//! All four families share one lifecycle on the bulk API: `sendfile`
//! returns a `file_id`, `filestatus` reports progress, `getfile` downloads
//! the CSV result and `deletefile` removes it. Polling is left to the caller.

use std::io::Write;

use crate::client::Client;
use crate::models::{FileStatusResponse, FileSubmitResponse};
use crate::upload::{CsvFile, DomainSearchFile, EmailFinderFile, Upload};
use crate::Result;

/// Which file job family a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// `sendfile`, `filestatus`, `getfile`, `deletefile`.
    BulkValidation,
    /// The same endpoints under `scoring/`.
    AiScoring,
    /// The same endpoints under `email-finder/`.
    EmailFinder,
    /// The same endpoints under `domain-search/`.
    DomainSearch,
}

impl FileKind {
    fn prefix(self) -> &'static str {
        match self {
            Self::BulkValidation => "",
            Self::AiScoring => "scoring/",
            Self::EmailFinder => "email-finder/",
            Self::DomainSearch => "domain-search/",
        }
    }

    fn endpoint(self, action: &str) -> String {
        format!("{}{action}", self.prefix())
    }
}

impl Client {
    /// Submit a CSV for bulk validation.
    ///
    /// When no column index is set the address is read from column 1.
    pub async fn bulk_validation_submit(
        &self,
        file: CsvFile,
        remove_duplicate: bool,
    ) -> Result<FileSubmitResponse> {
        let file = if file.columns_not_set() {
            file.email_address_column(1)
        } else {
            file
        };
        self.submit_file(FileKind::BulkValidation, file.into_upload(), Some(remove_duplicate))
            .await
    }

    pub async fn bulk_validation_status(&self, file_id: &str) -> Result<FileStatusResponse> {
        self.file_status(FileKind::BulkValidation, file_id).await
    }

    /// Download the result CSV of a completed bulk validation.
    pub async fn bulk_validation_result(&self, file_id: &str) -> Result<Vec<u8>> {
        self.file_result(FileKind::BulkValidation, file_id).await
    }

    pub async fn bulk_validation_delete(&self, file_id: &str) -> Result<FileSubmitResponse> {
        self.file_delete(FileKind::BulkValidation, file_id).await
    }

    /// Submit a CSV for AI scoring.
    ///
    /// The scoring endpoint reports some refusals with HTTP 200 instead of an
    /// error status; since only 201 means "accepted", those surface as
    /// [`Error::Remote`](crate::Error::Remote).
    pub async fn ai_scoring_submit(
        &self,
        file: CsvFile,
        remove_duplicate: bool,
    ) -> Result<FileSubmitResponse> {
        self.submit_file(FileKind::AiScoring, file.into_upload(), Some(remove_duplicate))
            .await
    }

    pub async fn ai_scoring_status(&self, file_id: &str) -> Result<FileStatusResponse> {
        self.file_status(FileKind::AiScoring, file_id).await
    }

    pub async fn ai_scoring_result(&self, file_id: &str) -> Result<Vec<u8>> {
        self.file_result(FileKind::AiScoring, file_id).await
    }

    pub async fn ai_scoring_delete(&self, file_id: &str) -> Result<FileSubmitResponse> {
        self.file_delete(FileKind::AiScoring, file_id).await
    }

    /// Submit a CSV of people to find addresses for.
    ///
    /// Fails with [`Error::Config`](crate::Error::Config) before any request
    /// when the columns do not identify both a domain and a name.
    pub async fn email_finder_file_submit(&self, file: EmailFinderFile) -> Result<FileSubmitResponse> {
        file.check_columns()?;
        self.submit_file(FileKind::EmailFinder, file.into_upload(), None)
            .await
    }

    pub async fn email_finder_file_status(&self, file_id: &str) -> Result<FileStatusResponse> {
        self.file_status(FileKind::EmailFinder, file_id).await
    }

    pub async fn email_finder_file_result(&self, file_id: &str) -> Result<Vec<u8>> {
        self.file_result(FileKind::EmailFinder, file_id).await
    }

    pub async fn email_finder_file_delete(&self, file_id: &str) -> Result<FileSubmitResponse> {
        self.file_delete(FileKind::EmailFinder, file_id).await
    }

    /// Submit a CSV of domains or company names. An unset domain column is
    /// sent as column 1.
    pub async fn domain_search_file_submit(
        &self,
        file: DomainSearchFile,
    ) -> Result<FileSubmitResponse> {
        self.submit_file(FileKind::DomainSearch, file.into_upload(), None)
            .await
    }

    pub async fn domain_search_file_status(&self, file_id: &str) -> Result<FileStatusResponse> {
        self.file_status(FileKind::DomainSearch, file_id).await
    }

    pub async fn domain_search_file_result(&self, file_id: &str) -> Result<Vec<u8>> {
        self.file_result(FileKind::DomainSearch, file_id).await
    }

    pub async fn domain_search_file_delete(&self, file_id: &str) -> Result<FileSubmitResponse> {
        self.file_delete(FileKind::DomainSearch, file_id).await
    }

    /// Progress of any file job.
    ///
    /// A body with `"success": false` (unknown `file_id`, ...) is returned,
    /// not turned into an error.
    pub async fn file_status(&self, kind: FileKind, file_id: &str) -> Result<FileStatusResponse> {
        let url = self.bulk_url(&kind.endpoint("filestatus"), &[("file_id", file_id)])?;
        self.get_json(url).await
    }

    /// Result CSV of any file job.
    ///
    /// A JSON body, even with HTTP 200, means the file is not ready or
    /// unknown and is returned as [`Error::Remote`](crate::Error::Remote).
    pub async fn file_result(&self, kind: FileKind, file_id: &str) -> Result<Vec<u8>> {
        let url = self.bulk_url(&kind.endpoint("getfile"), &[("file_id", file_id)])?;
        self.get_octet_stream(url).await
    }

    /// Download a result CSV into `writer`. Nothing is written on failure.
    pub async fn file_result_to_writer<W>(
        &self,
        kind: FileKind,
        file_id: &str,
        writer: &mut W,
    ) -> Result<usize>
    where
        W: Write + ?Sized,
    {
        let contents = self.file_result(kind, file_id).await?;
        writer.write_all(&contents)?;
        writer.flush()?;
        Ok(contents.len())
    }

    /// Delete any file job and its result.
    ///
    /// Like [`Client::file_status`], `"success": false` is returned as data.
    pub async fn file_delete(&self, kind: FileKind, file_id: &str) -> Result<FileSubmitResponse> {
        let url = self.bulk_url(&kind.endpoint("deletefile"), &[("file_id", file_id)])?;
        self.get_json(url).await
    }

    async fn submit_file(
        &self,
        kind: FileKind,
        upload: Upload,
        remove_duplicate: Option<bool>,
    ) -> Result<FileSubmitResponse> {
        let form = upload.into_form(self.api_key(), remove_duplicate)?;
        self.post_form(&kind.endpoint("sendfile"), form).await
    }
}
