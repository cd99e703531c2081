//! Request execution: HTTP plumbing and the request cycle built on it.

pub mod executor;
pub mod http;
