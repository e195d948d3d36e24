mod common;

use sqlx::SqlitePool;
use std::collections::HashSet;
use tokio::task::JoinSet;

const SUBMISSIONS: usize = 32;

#[sqlx::test]
async fn test_concurrent_random_submissions_get_distinct_codes(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());
    let mut tasks = JoinSet::new();

    for i in 0..SUBMISSIONS {
        let service = state.link_service.clone();
        tasks.spawn(async move {
            service
                .create_short_link(&format!("https://example.com/{i}"), None)
                .await
        });
    }

    let mut returned = HashSet::new();
    while let Some(result) = tasks.join_next().await {
        let link = result.unwrap().unwrap();
        returned.insert(link.code);
    }

    assert_eq!(returned.len(), SUBMISSIONS);

    let persisted: HashSet<String> = common::all_codes(&pool).await.into_iter().collect();
    assert_eq!(persisted.len(), SUBMISSIONS);
    assert_eq!(persisted, returned);
}

#[sqlx::test]
async fn test_concurrent_claims_on_one_custom_code(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());
    let mut tasks = JoinSet::new();

    for i in 0..8 {
        let service = state.link_service.clone();
        tasks.spawn(async move {
            service
                .create_short_link(&format!("https://claimant{i}.example"), Some("contested"))
                .await
        });
    }

    let mut winners = 0;
    let mut conflicts = 0;
    while let Some(result) = tasks.join_next().await {
        match result.unwrap() {
            Ok(_) => winners += 1,
            Err(snipurl::AppError::CodeConflict { .. }) => conflicts += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(winners, 1);
    assert_eq!(conflicts, 7);
    assert_eq!(common::count_links(&pool).await, 1);
}
