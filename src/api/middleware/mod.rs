//! HTTP middleware applied to every route.

pub mod tracing;
