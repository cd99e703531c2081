//! Retry module
//! - policy.rs: rate-limit driven retry policy and executor

pub mod policy;

pub use policy::*;
