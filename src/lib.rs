//! # snipurl
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The `ShortLink` entity and repository trait
//! - **Application Layer** ([`application`]) - Code allocation and resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool, migrations, repository
//! - **Web Layer** ([`web`]) - HTML form, redirect endpoint, health check
//!
//! ## Features
//!
//! - Random 6-character codes from `A-Z a-z 0-9`, or user-chosen custom codes
//! - Code uniqueness enforced by the database, with bounded collision retry
//! - 302 redirects with a per-link hit counter
//!
//! ## Quick Start
//!
//! ```bash
//! # Create the database
//! cargo run --bin admin -- db init
//!
//! # Start the service on http://localhost:5000
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;
