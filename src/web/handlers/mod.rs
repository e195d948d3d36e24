//! HTTP request handlers.

mod health;
mod index;
mod redirect;
mod shorten;

pub use health::{CheckStatus, HealthChecks, HealthResponse, health_handler};
pub use index::index_handler;
pub use redirect::redirect_handler;
pub use shorten::{CODE_TAKEN_MESSAGE, ShortenForm, shorten_handler};
