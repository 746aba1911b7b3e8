use chrono::{DateTime, Duration, TimeZone, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use url_shortener_api::domain::repositories::{AnalyticsRepository, DateRange};
use url_shortener_api::infrastructure::persistence::PgAnalyticsRepository;

async fn insert_url(pool: &PgPool, code: &str, clicks: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO urls (short_code, long_url, clicks) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(code)
    .bind(format!("https://example.com/{}", code))
    .bind(clicks)
    .fetch_one(pool)
    .await
    .unwrap()
}

async fn insert_logs(pool: &PgPool, url_id: i64, accessed_at: DateTime<Utc>, count: usize) {
    for _ in 0..count {
        sqlx::query("INSERT INTO url_access_logs (url_id, accessed_at) VALUES ($1, $2)")
            .bind(url_id)
            .bind(accessed_at)
            .execute(pool)
            .await
            .unwrap();
    }
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_top_by_clicks(pool: PgPool) {
    for i in 0..12 {
        insert_url(&pool, &format!("url{}", i), i).await;
    }

    let repo = PgAnalyticsRepository::new(Arc::new(pool));
    let top = repo.top_by_clicks(10).await.unwrap();

    assert_eq!(top.len(), 10);
    assert_eq!(top[0].short_code, "url11");
    assert_eq!(top[0].clicks, 11);
    assert_eq!(top[0].long_url, "https://example.com/url11");
    assert_eq!(top[9].short_code, "url2");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_top_by_clicks_ties_by_id(pool: PgPool) {
    let first = insert_url(&pool, "first", 3).await;
    let second = insert_url(&pool, "second", 3).await;

    let repo = PgAnalyticsRepository::new(Arc::new(pool));
    let top = repo.top_by_clicks(10).await.unwrap();

    let ids: Vec<_> = top.iter().map(|t| t.url_id).collect();
    assert_eq!(ids, vec![first, second]);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_top_by_access_range(pool: PgPool) {
    let inside = insert_url(&pool, "inside", 0).await;
    let outside = insert_url(&pool, "outside", 50).await;
    let day = Utc.with_ymd_and_hms(2025, 9, 15, 12, 0, 0).unwrap();
    insert_logs(&pool, inside, day, 2).await;
    insert_logs(&pool, outside, day - Duration::days(30), 5).await;

    let repo = PgAnalyticsRepository::new(Arc::new(pool));
    let range = DateRange::new(
        Some(Utc.with_ymd_and_hms(2025, 9, 10, 0, 0, 0).unwrap()),
        Some(Utc.with_ymd_and_hms(2025, 9, 18, 0, 0, 0).unwrap()),
    );
    let top = repo.top_by_access_range(range, 10).await.unwrap();

    assert_eq!(top.len(), 1);
    assert_eq!(top[0].url_id, inside);
    assert_eq!(top[0].clicks, 2);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_top_by_access_range_bounds_are_inclusive(pool: PgPool) {
    let url_id = insert_url(&pool, "edge", 0).await;
    let at = Utc.with_ymd_and_hms(2025, 9, 15, 0, 0, 0).unwrap();
    insert_logs(&pool, url_id, at, 1).await;

    let repo = PgAnalyticsRepository::new(Arc::new(pool));

    let exact = repo
        .top_by_access_range(DateRange::new(Some(at), Some(at)), 10)
        .await
        .unwrap();
    assert_eq!(exact.len(), 1);

    let after = repo
        .top_by_access_range(DateRange::new(Some(at + Duration::seconds(1)), None), 10)
        .await
        .unwrap();
    assert!(after.is_empty());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_top_by_access_range_open_bounds(pool: PgPool) {
    let low = insert_url(&pool, "low", 0).await;
    let high = insert_url(&pool, "high", 0).await;
    let now = Utc::now();
    insert_logs(&pool, low, now - Duration::days(400), 1).await;
    insert_logs(&pool, high, now, 3).await;

    let repo = PgAnalyticsRepository::new(Arc::new(pool));
    let top = repo
        .top_by_access_range(DateRange::default(), 10)
        .await
        .unwrap();

    let ids: Vec<_> = top.iter().map(|t| t.url_id).collect();
    assert_eq!(ids, vec![high, low]);
    assert_eq!(top[0].clicks, 3);
}
