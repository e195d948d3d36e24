//! Shared state injected into every handler.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::SqliteLinkRepository;

/// Concrete link service used by the HTTP layer.
pub type AppLinkService = LinkService<SqliteLinkRepository>;

/// Application state cloned into each request.
///
/// Holds only pool-backed handles; database connections are borrowed per
/// statement and never stored here.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
    pub pool: Arc<SqlitePool>,
}

impl AppState {
    /// Wires the repository and service on top of a connection pool.
    pub fn new(pool: SqlitePool, base_url: &str) -> Self {
        let pool = Arc::new(pool);
        let link_repository = Arc::new(SqliteLinkRepository::new(pool.clone()));
        let link_service = Arc::new(LinkService::new(link_repository, base_url));

        Self { link_service, pool }
    }
}
