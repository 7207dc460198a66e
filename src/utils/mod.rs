//! Utility functions used across the application.
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_validator`] - URL validation and canonicalization
//! - [`request_host`] - Host extraction from HTTP requests

pub mod code_generator;
pub mod request_host;
pub mod url_validator;
