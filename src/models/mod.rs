//! Typed request and response payloads.

mod account;
mod files;
mod finder;
mod nullable;
mod validation;

pub use account::{ActivityDataResponse, ApiUsageResponse, CreditsResponse, USAGE_DATE_FORMAT};
pub use files::{ApiMessage, FileStatusResponse, FileSubmitResponse, PERCENTAGE_UNKNOWN};
pub use finder::{DomainFormat, DomainSearchResponse, FindEmailResponse};
pub use nullable::Nullable;
pub use validation::{
    BatchError, EmailToValidate, PROCESSED_AT_FORMAT, Status, SubStatus, ValidateBatchResponse,
    ValidateResponse,
};

pub(crate) use validation::BatchRequest;
