//! Endpoint methods on [`Client`](crate::Client), one file per API area.

mod account;
mod files;
mod finder;
mod validation;

pub use files::FileKind;
