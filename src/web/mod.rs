//! Web layer: the HTML form, result page, redirect endpoint and health check.
//!
//! Pages are rendered server-side with Askama templates from `templates/`.
//!
//! # Modules
//!
//! - [`flash`] - One-shot messages carried across redirects
//! - [`handlers`] - Request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod flash;
pub mod handlers;
pub mod middleware;
pub mod routes;
