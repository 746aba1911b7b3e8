//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`pagination`] - Page clamping and arithmetic
//! - [`qr_code`] - QR image generation contract
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Repository traits are implemented in `crate::infrastructure::persistence`.

pub mod entities;
pub mod pagination;
pub mod qr_code;
pub mod repositories;
