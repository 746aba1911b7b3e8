//! Utility functions for code generation, input processing, and request handling.
//!
//! - [`code_generator`] - Random short codes and reserved-code checks
//! - [`sanitizer`] - Alias and URL sanitization
//! - [`url_validator`] - Absolute http/https URL validation
//! - [`request_origin`] - Public origin and client details from HTTP headers

pub mod code_generator;
pub mod request_origin;
pub mod sanitizer;
pub mod url_validator;
