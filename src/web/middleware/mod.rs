//! HTTP middleware applied to every route.
//!
//! - [`tracing`] - Request/response span logging

pub mod tracing;
