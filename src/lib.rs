//! # ZeroBounce Client
//! Asynchronous wrapper around the ZeroBounce email validation HTTP API: single and batch
//! validation, account credits and usage, activity data, email finder, domain search and the
//! four file-based bulk job families, driven from Rust through [`Client`] and [`ClientBuilder`].
//!
//! ## Audience and uses
//! For Rust services that need to check addresses before sending, clean mailing lists in bulk,
//! or guess the address format of a company: configure with [`ClientBuilder`] or [`Config`],
//! call the endpoint methods, and inspect the typed responses ([`ValidateResponse`],
//! [`FileStatusResponse`], ...).
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`.
//!
//! ## Out of scope
//! No polling or retry loops for file jobs, no local address syntax checks, no CSV parsing.
//! Waiting for a job to finish is left to the caller.
//!
//! ## Errors
//! Missing or invalid settings are [`Error::Config`], network failures [`Error::Transport`],
//! unexpected HTTP statuses [`Error::Remote`] with the server message flattened into one string,
//! and undecodable bodies [`Error::Decode`]. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Example
//! ```no_run
//! use zerobounce_client::{Client, SANDBOX_IP};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), zerobounce_client::Error> {
//!     let client = Client::from_env()?;
//!     let credits = client.credits().await?;
//!     println!("Credits left: {}", credits.credits());
//!
//!     let result = client.validate("valid@example.com", Some(SANDBOX_IP)).await?;
//!     println!("{}: {} ({})", result.address, result.status, result.sub_status);
//!     Ok(())
//! }
//! ```

mod api;
mod client;
mod config;
mod error;
mod models;
mod request;
mod sanitize;
mod transport;
mod upload;

pub use api::FileKind;
pub use client::{Client, ClientBuilder};
pub use config::{
    Config, DEFAULT_BASE_URL, DEFAULT_BULK_BASE_URL, DEFAULT_TIMEOUT, ENV_API_KEY, ENV_BASE_URL,
    ENV_BULK_BASE_URL,
};
pub use error::Error;
pub use models::{
    ActivityDataResponse, ApiMessage, ApiUsageResponse, BatchError, CreditsResponse,
    DomainFormat, DomainSearchResponse, EmailToValidate, FileStatusResponse, FileSubmitResponse,
    FindEmailResponse, Nullable, PERCENTAGE_UNKNOWN, PROCESSED_AT_FORMAT, Status, SubStatus,
    USAGE_DATE_FORMAT, ValidateBatchResponse, ValidateResponse,
};
pub use upload::{CsvFile, DomainSearchFile, EmailFinderFile};

/// Source IP the sandbox addresses expect when testing validation.
pub const SANDBOX_IP: &str = "99.110.204.1";

/// Result type alias for ZeroBounce operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
