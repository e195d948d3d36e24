//! Short link allocation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{LinkTotals, NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{
    DEFAULT_CODE_LENGTH, EXTENDED_CODE_LENGTH, generate_code, validate_custom_code,
};
use crate::utils::url_validator::validate_url;

/// Random codes tried at [`DEFAULT_CODE_LENGTH`] before switching to
/// [`EXTENDED_CODE_LENGTH`].
pub const DEFAULT_LENGTH_ATTEMPTS: usize = 10;

/// Upper bound on insert attempts for one random allocation.
pub const MAX_ALLOCATION_ATTEMPTS: usize = 20;

/// Message shown when the destination URL is rejected.
pub const INVALID_URL_MESSAGE: &str = "Invalid URL. Make sure it includes http:// or https://";

/// Service for creating and resolving short links.
///
/// Code uniqueness is decided by the store: every candidate is inserted
/// directly and a unique-constraint violation means the code is taken.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    base_url: String,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    ///
    /// `base_url` is the public prefix of generated short links; a trailing
    /// slash is ignored.
    pub fn new(link_repository: Arc<L>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            link_repository,
            base_url,
        }
    }

    /// Creates a short link for `original_url`.
    ///
    /// - With `custom_code`, the code is validated and inserted once; if it is
    ///   already taken the call fails without retrying.
    /// - Without it, a random code is allocated (see [`Self::allocate_random`]).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or custom code is invalid.
    /// Returns [`AppError::CodeConflict`] if the custom code already exists.
    /// Returns [`AppError::ResourceExhausted`] if no random code could be found.
    pub async fn create_short_link(
        &self,
        original_url: &str,
        custom_code: Option<&str>,
    ) -> Result<ShortLink, AppError> {
        if let Err(e) = validate_url(original_url) {
            tracing::debug!(reason = %e, "Rejected destination URL");
            return Err(AppError::validation(INVALID_URL_MESSAGE));
        }

        let link = match custom_code {
            Some(code) => {
                validate_custom_code(code)?;

                self.link_repository
                    .insert(NewShortLink {
                        code: code.to_string(),
                        original_url: original_url.to_string(),
                    })
                    .await?
            }
            None => self.allocate_random(original_url).await?,
        };

        tracing::info!(code = %link.code, "Short link created");
        Ok(link)
    }

    /// Inserts `original_url` under a fresh random code.
    ///
    /// The first [`DEFAULT_LENGTH_ATTEMPTS`] candidates are
    /// [`DEFAULT_CODE_LENGTH`] characters long, later ones
    /// [`EXTENDED_CODE_LENGTH`]. Gives up after [`MAX_ALLOCATION_ATTEMPTS`].
    async fn allocate_random(&self, original_url: &str) -> Result<ShortLink, AppError> {
        for attempt in 0..MAX_ALLOCATION_ATTEMPTS {
            let length = if attempt < DEFAULT_LENGTH_ATTEMPTS {
                DEFAULT_CODE_LENGTH
            } else {
                EXTENDED_CODE_LENGTH
            };

            let new_link = NewShortLink {
                code: generate_code(length),
                original_url: original_url.to_string(),
            };

            match self.link_repository.insert(new_link).await {
                Ok(link) => return Ok(link),
                Err(AppError::CodeConflict { code }) => {
                    tracing::warn!(attempt, %code, "Short code collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::ResourceExhausted {
            attempts: MAX_ALLOCATION_ATTEMPTS,
        })
    }

    /// Resolves a code to its link and records the hit.
    ///
    /// The hit counter is best-effort: failing to increment it is logged and
    /// does not fail the resolution. The returned link carries the counter
    /// value after this hit when the increment succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn resolve(&self, code: &str) -> Result<ShortLink, AppError> {
        let mut link = self.get_link_by_code(code).await?;

        match self.link_repository.increment_hits(link.id).await {
            Ok(true) => link.hit_count += 1,
            Ok(false) => tracing::warn!(code, "Link vanished before hit could be recorded"),
            Err(e) => tracing::warn!(code, error = %e, "Failed to record hit"),
        }

        Ok(link)
    }

    /// Retrieves a link by its short code without recording a hit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_link_by_code(&self, code: &str) -> Result<ShortLink, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound {
                code: code.to_string(),
            })
    }

    /// Returns link and hit totals.
    pub async fn totals(&self) -> Result<LinkTotals, AppError> {
        self.link_repository.totals().await
    }

    /// Constructs the shareable short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn stored(new_link: &NewShortLink) -> ShortLink {
        ShortLink::new(
            1,
            new_link.code.clone(),
            new_link.original_url.clone(),
            0,
            Utc::now(),
        )
    }

    fn conflict(new_link: &NewShortLink) -> AppError {
        AppError::CodeConflict {
            code: new_link.code.clone(),
        }
    }

    fn service(repo: MockLinkRepository) -> LinkService<MockLinkRepository> {
        LinkService::new(Arc::new(repo), "http://localhost:5000/")
    }

    #[tokio::test]
    async fn test_create_short_link_random_code() {
        let mut repo = MockLinkRepository::new();
        repo.expect_insert()
            .withf(|l| l.code.len() == 6 && l.original_url == "https://example.com")
            .times(1)
            .returning(|l| Ok(stored(&l)));

        let link = service(repo)
            .create_short_link("https://example.com", None)
            .await
            .unwrap();

        assert_eq!(link.code.len(), 6);
        assert!(link.code.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(link.original_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_create_short_link_invalid_url_touches_nothing() {
        let mut repo = MockLinkRepository::new();
        repo.expect_insert().times(0);

        let service = service(repo);

        for input in ["", "not-a-url", "ftp://example.com", "http://"] {
            let err = service.create_short_link(input, None).await.unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{input}");
            assert_eq!(err.to_string(), INVALID_URL_MESSAGE);
        }
    }

    #[tokio::test]
    async fn test_create_short_link_with_custom_code() {
        let mut repo = MockLinkRepository::new();
        repo.expect_insert()
            .withf(|l| l.code == "my-code")
            .times(1)
            .returning(|l| Ok(stored(&l)));

        let link = service(repo)
            .create_short_link("https://example.com", Some("my-code"))
            .await
            .unwrap();

        assert_eq!(link.code, "my-code");
    }

    #[tokio::test]
    async fn test_custom_code_conflict_is_not_retried() {
        let mut repo = MockLinkRepository::new();
        repo.expect_insert()
            .times(1)
            .returning(|l| Err(conflict(&l)));

        let err = service(repo)
            .create_short_link("https://example.com", Some("taken"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::CodeConflict { code } if code == "taken"));
    }

    #[tokio::test]
    async fn test_invalid_custom_code_is_rejected_before_insert() {
        let mut repo = MockLinkRepository::new();
        repo.expect_insert().times(0);

        let err = service(repo)
            .create_short_link("https://example.com", Some("a/b"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_random_collision_retries_with_new_code() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let mut repo = MockLinkRepository::new();
        repo.expect_insert().times(3).returning(move |l| {
            if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                Err(conflict(&l))
            } else {
                Ok(stored(&l))
            }
        });

        let link = service(repo)
            .create_short_link("https://example.com", None)
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(link.code.len(), 6);
    }

    #[tokio::test]
    async fn test_switches_to_longer_codes_after_ten_collisions() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let mut repo = MockLinkRepository::new();
        repo.expect_insert()
            .times(DEFAULT_LENGTH_ATTEMPTS + 1)
            .returning(move |l| {
                let n = counter.fetch_add(1, Ordering::SeqCst);
                if n < DEFAULT_LENGTH_ATTEMPTS {
                    assert_eq!(l.code.len(), DEFAULT_CODE_LENGTH);
                    Err(conflict(&l))
                } else {
                    assert_eq!(l.code.len(), EXTENDED_CODE_LENGTH);
                    Ok(stored(&l))
                }
            });

        let link = service(repo)
            .create_short_link("https://example.com", None)
            .await
            .unwrap();

        assert_eq!(link.code.len(), EXTENDED_CODE_LENGTH);
    }

    #[tokio::test]
    async fn test_allocation_gives_up_after_max_attempts() {
        let mut repo = MockLinkRepository::new();
        repo.expect_insert()
            .times(MAX_ALLOCATION_ATTEMPTS)
            .returning(|l| Err(conflict(&l)));

        let err = service(repo)
            .create_short_link("https://example.com", None)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::ResourceExhausted { attempts } if attempts == MAX_ALLOCATION_ATTEMPTS
        ));
    }

    #[tokio::test]
    async fn test_database_error_aborts_allocation() {
        let mut repo = MockLinkRepository::new();
        repo.expect_insert()
            .times(1)
            .returning(|_| Err(AppError::Database(sqlx::Error::PoolTimedOut)));

        let err = service(repo)
            .create_short_link("https://example.com", None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Database(_)));
    }

    #[tokio::test]
    async fn test_resolve_increments_hits() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|code| {
                Ok(Some(ShortLink::new(
                    9,
                    code.to_string(),
                    "https://example.com".to_string(),
                    4,
                    Utc::now(),
                )))
            });
        repo.expect_increment_hits()
            .withf(|id| *id == 9)
            .times(1)
            .returning(|_| Ok(true));

        let link = service(repo).resolve("abc123").await.unwrap();

        assert_eq!(link.original_url, "https://example.com");
        assert_eq!(link.hit_count, 5);
    }

    #[tokio::test]
    async fn test_resolve_survives_hit_counter_failure() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code().times(1).returning(|code| {
            Ok(Some(ShortLink::new(
                3,
                code.to_string(),
                "https://example.com/x".to_string(),
                0,
                Utc::now(),
            )))
        });
        repo.expect_increment_hits()
            .times(1)
            .returning(|_| Err(AppError::Database(sqlx::Error::PoolTimedOut)));

        let link = service(repo).resolve("x").await.unwrap();

        assert_eq!(link.original_url, "https://example.com/x");
        assert_eq!(link.hit_count, 0);
    }

    #[tokio::test]
    async fn test_resolve_unknown_code() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code().times(1).returning(|_| Ok(None));
        repo.expect_increment_hits().times(0);

        let err = service(repo).resolve("missing").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { code } if code == "missing"));
    }

    #[test]
    fn test_short_url_trims_trailing_slash() {
        let service = service(MockLinkRepository::new());
        assert_eq!(service.short_url("abc123"), "http://localhost:5000/abc123");
    }

    #[tokio::test]
    async fn test_totals_come_from_repository() {
        let mut repo = MockLinkRepository::new();
        repo.expect_totals()
            .times(1)
            .returning(|| Ok(LinkTotals { links: 3, hits: 17 }));

        let totals = service(repo).totals().await.unwrap();

        assert_eq!(totals, LinkTotals { links: 3, hits: 17 });
    }
}
