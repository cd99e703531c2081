//! Shared configuration types

pub mod http;

pub use http::{HttpConfig, HttpConfigBuilder};
