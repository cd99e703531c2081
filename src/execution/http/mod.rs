//! HTTP building blocks
//! - client.rs: reqwest client construction
//! - headers.rs: request header assembly
//! - multipart.rs: multipart/mixed bodies for file content
//! - response.rs: body decoding and error translation
//! - transport.rs: the replaceable request primitive

pub mod client;
pub mod headers;
pub mod multipart;
pub mod response;
pub mod transport;
