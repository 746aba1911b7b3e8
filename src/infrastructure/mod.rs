//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`qr_code`] - PNG QR code writer

pub mod persistence;
pub mod qr_code;
