//! Utility modules for rosette-api

pub mod mime;
