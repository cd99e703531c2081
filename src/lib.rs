//! rosette-api
//!
//! Async client binding for the Rosette text analytics REST API.
//!
//! Build a [`RosetteClient`], fill in a parameter object for the operation
//! and await the call; the decoded JSON response comes back as a
//! [`serde_json::Value`].
//!
//! ```rust,ignore
//! use rosette_api::prelude::*;
//!
//! let client = RosetteClient::builder().api_key("your-key").build()?;
//! let params = DocumentParameters::new().with_content("Bonjour le monde");
//! let language = client.language(&params).await?;
//! ```
#![deny(unsafe_code)]

pub mod builder;
pub mod client;
pub mod config;
pub mod defaults;
pub mod endpoints;
pub mod error;
pub mod execution;
pub mod params;
pub mod retry;
pub mod types;
pub mod utils;

pub use builder::RosetteClientBuilder;
pub use client::RosetteClient;
pub use endpoints::{Endpoint, MorphologyFacet};
pub use error::{ErrorCode, ErrorKind, RosetteError};
pub use execution::http::transport::{
    HttpMethod, HttpTransport, HttpTransportRequest, HttpTransportResponse, ReqwestTransport,
};

/// Commonly used types
pub mod prelude {
    pub use crate::builder::RosetteClientBuilder;
    pub use crate::client::RosetteClient;
    pub use crate::endpoints::MorphologyFacet;
    pub use crate::error::{ErrorCode, RosetteError};
    pub use crate::params::*;
    pub use crate::retry::RetryPolicy;
}
