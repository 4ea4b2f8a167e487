//! DNS deliverability checks.
//!
//! [`check_deliverability`] classifies a domain into a [`DomainStatus`] using
//! any [`DomainLookup`]; [`build_resolver`] provides the system-backed one.

mod error;
mod resolver;
mod types;

pub use error::MxError;
pub(crate) use error::MxError as Error;
pub use resolver::{DomainLookup, build_resolver, check_deliverability};
pub use types::{DomainStatus, MxAnswer, MxRecord};

#[cfg(test)]
pub(crate) mod tests;
