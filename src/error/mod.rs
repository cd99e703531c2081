//! Error Handling Module
//!
//! Every failure surfaced by the binding is a [`RosetteError`]:
//! - Local parameter validation failures (`ValidationError`)
//! - Connection/IO failures from the transport (`TransportError`)
//! - Non-200 responses from the service, including exhausted rate-limit retries (`ApiError`)
//! - Undecodable response bodies (`DecodeError`)
//!
//! # Example
//!
//! ```rust,ignore
//! use rosette_api::error::{ErrorCode, RosetteError};
//!
//! let error = RosetteError::validation(ErrorCode::BadRequestFormat, "missing name");
//! assert_eq!(error.code(), "badRequestFormat");
//! assert!(!error.is_retryable());
//! ```

mod conversions;
pub mod types;

pub use types::*;
