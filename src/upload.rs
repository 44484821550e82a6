//! CSV file descriptions and the multipart body they are uploaded as.
//!
//! The bulk API reads the multipart stream in order and expects every
//! metadata field before the file part, so [`Upload::into_form`] always
//! writes `api_key`, the scalar flags, the column indices, then `file`.

use std::fmt;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

use reqwest::multipart::{Form, Part};

use crate::{Error, Result};

type Source = Box<dyn Read + Send>;

/// A file ready to be encoded: metadata plus a byte source read exactly once.
pub(crate) struct Upload {
    source: Source,
    file_name: String,
    has_header_row: bool,
    columns: Vec<(&'static str, u32)>,
}

impl Upload {
    /// Build the multipart form. `remove_duplicate` is only written when given.
    pub(crate) fn into_form(mut self, api_key: &str, remove_duplicate: Option<bool>) -> Result<Form> {
        let mut contents = Vec::new();
        self.source.read_to_end(&mut contents)?;

        let mut form = Form::new().text("api_key", api_key.to_string());
        if let Some(remove) = remove_duplicate {
            form = form.text("remove_duplicate", remove.to_string());
        }
        form = form.text("has_header_row", self.has_header_row.to_string());
        for (name, index) in self.columns {
            form = form.text(name, index.to_string());
        }

        log::debug!(
            "multipart upload {} ({} bytes)",
            self.file_name,
            contents.len()
        );
        Ok(form.part("file", Part::bytes(contents).file_name(self.file_name)))
    }

    #[cfg(test)]
    pub(crate) fn columns(&self) -> &[(&'static str, u32)] {
        &self.columns
    }
}

/// Keep only set (non-zero) column indices, preserving order.
fn set_columns(all: &[(&'static str, u32)]) -> Vec<(&'static str, u32)> {
    all.iter().copied().filter(|(_, index)| *index != 0).collect()
}

fn open(path: &Path) -> Result<(Source, String)> {
    let file = File::open(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| Error::Config(format!("{} has no file name", path.display())))?;
    Ok((Box::new(file), file_name))
}

/// A CSV of addresses for bulk validation or AI scoring.
///
/// Column indices start at 1; an index of 0 leaves that column out of the
/// request.
pub struct CsvFile {
    source: Source,
    file_name: String,
    has_header_row: bool,
    email_address_column: u32,
    first_name_column: u32,
    last_name_column: u32,
    gender_column: u32,
    ip_address_column: u32,
}

impl CsvFile {
    /// Wrap any reader. No column is set yet.
    pub fn new(reader: impl Read + Send + 'static, file_name: impl Into<String>) -> Self {
        Self {
            source: Box::new(reader),
            file_name: file_name.into(),
            has_header_row: false,
            email_address_column: 0,
            first_name_column: 0,
            last_name_column: 0,
            gender_column: 0,
            ip_address_column: 0,
        }
    }

    /// In-memory contents.
    pub fn from_bytes(contents: impl Into<Vec<u8>>, file_name: impl Into<String>) -> Self {
        Self::new(Cursor::new(contents.into()), file_name)
    }

    /// Open a file on disk. An `email_column` of 0 is treated as column 1.
    pub fn from_path(path: impl AsRef<Path>, has_header_row: bool, email_column: u32) -> Result<Self> {
        let (source, file_name) = open(path.as_ref())?;
        Ok(Self {
            source,
            file_name,
            has_header_row,
            email_address_column: email_column.max(1),
            first_name_column: 0,
            last_name_column: 0,
            gender_column: 0,
            ip_address_column: 0,
        })
    }

    pub fn header_row(mut self, has_header_row: bool) -> Self {
        self.has_header_row = has_header_row;
        self
    }

    pub fn email_address_column(mut self, index: u32) -> Self {
        self.email_address_column = index;
        self
    }

    pub fn first_name_column(mut self, index: u32) -> Self {
        self.first_name_column = index;
        self
    }

    pub fn last_name_column(mut self, index: u32) -> Self {
        self.last_name_column = index;
        self
    }

    pub fn gender_column(mut self, index: u32) -> Self {
        self.gender_column = index;
        self
    }

    pub fn ip_address_column(mut self, index: u32) -> Self {
        self.ip_address_column = index;
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Set columns in request order: email, first name, last name, gender, IP.
    pub fn columns(&self) -> Vec<(&'static str, u32)> {
        set_columns(&[
            ("email_address_column", self.email_address_column),
            ("first_name_column", self.first_name_column),
            ("last_name_column", self.last_name_column),
            ("gender_column", self.gender_column),
            ("ip_address_column", self.ip_address_column),
        ])
    }

    /// No column index has been set.
    pub fn columns_not_set(&self) -> bool {
        self.columns().is_empty()
    }

    pub(crate) fn into_upload(self) -> Upload {
        let columns = self.columns();
        Upload {
            source: self.source,
            file_name: self.file_name,
            has_header_row: self.has_header_row,
            columns,
        }
    }
}

impl fmt::Debug for CsvFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CsvFile")
            .field("file_name", &self.file_name)
            .field("has_header_row", &self.has_header_row)
            .field("columns", &self.columns())
            .finish_non_exhaustive()
    }
}

/// A CSV of people to find addresses for.
///
/// Submission requires a domain column plus either a first name column or a
/// full name column.
pub struct EmailFinderFile {
    source: Source,
    file_name: String,
    has_header_row: bool,
    domain_column: u32,
    company_name_column: u32,
    first_name_column: u32,
    middle_name_column: u32,
    last_name_column: u32,
    full_name_column: u32,
}

impl EmailFinderFile {
    pub fn new(reader: impl Read + Send + 'static, file_name: impl Into<String>) -> Self {
        Self {
            source: Box::new(reader),
            file_name: file_name.into(),
            has_header_row: false,
            domain_column: 0,
            company_name_column: 0,
            first_name_column: 0,
            middle_name_column: 0,
            last_name_column: 0,
            full_name_column: 0,
        }
    }

    pub fn from_bytes(contents: impl Into<Vec<u8>>, file_name: impl Into<String>) -> Self {
        Self::new(Cursor::new(contents.into()), file_name)
    }

    pub fn from_path(path: impl AsRef<Path>, has_header_row: bool) -> Result<Self> {
        let (source, file_name) = open(path.as_ref())?;
        Ok(Self::new(source, file_name).header_row(has_header_row))
    }

    pub fn header_row(mut self, has_header_row: bool) -> Self {
        self.has_header_row = has_header_row;
        self
    }

    pub fn domain_column(mut self, index: u32) -> Self {
        self.domain_column = index;
        self
    }

    pub fn company_name_column(mut self, index: u32) -> Self {
        self.company_name_column = index;
        self
    }

    pub fn first_name_column(mut self, index: u32) -> Self {
        self.first_name_column = index;
        self
    }

    pub fn middle_name_column(mut self, index: u32) -> Self {
        self.middle_name_column = index;
        self
    }

    pub fn last_name_column(mut self, index: u32) -> Self {
        self.last_name_column = index;
        self
    }

    pub fn full_name_column(mut self, index: u32) -> Self {
        self.full_name_column = index;
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn columns(&self) -> Vec<(&'static str, u32)> {
        set_columns(&[
            ("domain_column", self.domain_column),
            ("company_name_column", self.company_name_column),
            ("first_name_column", self.first_name_column),
            ("middle_name_column", self.middle_name_column),
            ("last_name_column", self.last_name_column),
            ("full_name_column", self.full_name_column),
        ])
    }

    /// Checked before any request is made.
    pub fn check_columns(&self) -> Result<()> {
        let has_domain = self.domain_column != 0;
        let has_name = self.first_name_column != 0 || self.full_name_column != 0;
        if has_domain && has_name {
            Ok(())
        } else {
            Err(Error::Config(
                "email finder file needs a domain column and either a first name or a full name column"
                    .to_string(),
            ))
        }
    }

    pub(crate) fn into_upload(self) -> Upload {
        let columns = self.columns();
        Upload {
            source: self.source,
            file_name: self.file_name,
            has_header_row: self.has_header_row,
            columns,
        }
    }
}

impl fmt::Debug for EmailFinderFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailFinderFile")
            .field("file_name", &self.file_name)
            .field("has_header_row", &self.has_header_row)
            .field("columns", &self.columns())
            .finish_non_exhaustive()
    }
}

/// A CSV of domains or company names to search address formats for.
///
/// An unset domain column is sent as column 1.
pub struct DomainSearchFile {
    source: Source,
    file_name: String,
    has_header_row: bool,
    domain_column: u32,
    company_name_column: u32,
}

impl DomainSearchFile {
    pub fn new(reader: impl Read + Send + 'static, file_name: impl Into<String>) -> Self {
        Self {
            source: Box::new(reader),
            file_name: file_name.into(),
            has_header_row: false,
            domain_column: 0,
            company_name_column: 0,
        }
    }

    pub fn from_bytes(contents: impl Into<Vec<u8>>, file_name: impl Into<String>) -> Self {
        Self::new(Cursor::new(contents.into()), file_name)
    }

    pub fn from_path(path: impl AsRef<Path>, has_header_row: bool) -> Result<Self> {
        let (source, file_name) = open(path.as_ref())?;
        Ok(Self::new(source, file_name).header_row(has_header_row))
    }

    pub fn header_row(mut self, has_header_row: bool) -> Self {
        self.has_header_row = has_header_row;
        self
    }

    pub fn domain_column(mut self, index: u32) -> Self {
        self.domain_column = index;
        self
    }

    pub fn company_name_column(mut self, index: u32) -> Self {
        self.company_name_column = index;
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn columns(&self) -> Vec<(&'static str, u32)> {
        set_columns(&[
            ("domain_column", self.domain_column.max(1)),
            ("company_name_column", self.company_name_column),
        ])
    }

    pub(crate) fn into_upload(self) -> Upload {
        let columns = self.columns();
        Upload {
            source: self.source,
            file_name: self.file_name,
            has_header_row: self.has_header_row,
            columns,
        }
    }
}

impl fmt::Debug for DomainSearchFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainSearchFile")
            .field("file_name", &self.file_name)
            .field("has_header_row", &self.has_header_row)
            .field("columns", &self.columns())
            .finish_non_exhaustive()
    }
}
