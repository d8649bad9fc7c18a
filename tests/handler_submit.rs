mod common;

use axum::http::StatusCode;
use slug_shortener::domain::repositories::SlugRepository;
use tempfile::TempDir;

#[tokio::test]
async fn test_submit_success() {
    let dir = TempDir::new().unwrap();
    let (server, repo) = common::create_test_server(&dir).await;

    let response = server
        .post("/submit")
        .form(&[("secret", "changeme"), ("url", "http://example.com")])
        .await;

    response.assert_status_ok();

    let slug = common::slug_of(&response.text());
    assert_eq!(slug.len(), common::SLUG_LENGTH);
    assert!(slug.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(
        repo.find_by_slug(&slug).await.as_deref(),
        Some("http://example.com")
    );
}

#[tokio::test]
async fn test_submit_persists_to_storage_file() {
    let dir = TempDir::new().unwrap();
    let (server, _repo) = common::create_test_server(&dir).await;

    let response = server
        .post("/submit")
        .form(&[("secret", "changeme"), ("url", "http://example.com")])
        .await;
    let slug = common::slug_of(&response.text());

    let contents = std::fs::read_to_string(common::storage_path(&dir)).unwrap();
    assert_eq!(contents, format!("{slug} http://example.com\n"));
}

#[tokio::test]
async fn test_submit_deduplication() {
    let dir = TempDir::new().unwrap();
    let (server, repo) = common::create_test_server(&dir).await;

    let first = server
        .post("/submit")
        .form(&[("secret", "changeme"), ("url", "http://dedup.com")])
        .await;
    let second = server
        .post("/submit")
        .form(&[
            ("secret", "changeme"),
            ("url", "http://dedup.com"),
            ("slug", "another"),
        ])
        .await;

    first.assert_status_ok();
    second.assert_status_ok();
    assert_eq!(first.text(), second.text());
    assert_eq!(repo.count().await, 1);
}

#[tokio::test]
async fn test_submit_with_custom_slug() {
    let dir = TempDir::new().unwrap();
    let (server, _repo) = common::create_test_server(&dir).await;

    let response = server
        .post("/submit")
        .form(&[
            ("secret", "changeme"),
            ("url", "http://example.com"),
            ("slug", "ab"),
        ])
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), "http://localhost/ab");
}

#[tokio::test]
async fn test_submit_taken_slug_falls_back_to_random() {
    let dir = TempDir::new().unwrap();
    let (server, repo) = common::create_seeded_server(&dir, &[("taken", "http://first.com")]);

    let response = server
        .post("/submit")
        .form(&[
            ("secret", "changeme"),
            ("url", "http://second.com"),
            ("slug", "taken"),
        ])
        .await;

    response.assert_status_ok();
    let slug = common::slug_of(&response.text());
    assert_ne!(slug, "taken");
    assert_eq!(
        repo.find_by_slug("taken").await.as_deref(),
        Some("http://first.com")
    );
}

#[tokio::test]
async fn test_submit_invalid_slug_falls_back_to_random() {
    let dir = TempDir::new().unwrap();
    let (server, _repo) = common::create_test_server(&dir).await;

    let response = server
        .post("/submit")
        .form(&[
            ("secret", "changeme"),
            ("url", "http://example.com"),
            ("slug", "my-link!"),
        ])
        .await;

    response.assert_status_ok();
    let slug = common::slug_of(&response.text());
    assert_eq!(slug.len(), common::SLUG_LENGTH);
}

#[tokio::test]
async fn test_submit_wrong_secret() {
    let dir = TempDir::new().unwrap();
    let (server, repo) = common::create_test_server(&dir).await;

    let response = server
        .post("/submit")
        .form(&[("secret", "wrong"), ("url", "http://example.com")])
        .await;

    response.assert_status_unauthorized();
    assert_eq!(response.text(), "Not authorized");
    assert_eq!(repo.count().await, 0);
    assert!(!common::storage_path(&dir).exists());
}

#[tokio::test]
async fn test_submit_empty_url() {
    let dir = TempDir::new().unwrap();
    let (server, repo) = common::create_test_server(&dir).await;

    let response = server
        .post("/submit")
        .form(&[("secret", "changeme"), ("url", "")])
        .await;

    response.assert_status_unauthorized();
    assert_eq!(repo.count().await, 0);
}

#[tokio::test]
async fn test_submit_without_form_body() {
    let dir = TempDir::new().unwrap();
    let (server, repo) = common::create_test_server(&dir).await;

    let response = server.post("/submit").await;

    response.assert_status_unauthorized();
    assert_eq!(repo.count().await, 0);
}

#[tokio::test]
async fn test_post_to_other_path_not_found() {
    let dir = TempDir::new().unwrap();
    let (server, repo) = common::create_test_server(&dir).await;

    let response = server
        .post("/create")
        .form(&[("secret", "changeme"), ("url", "http://example.com")])
        .await;

    response.assert_status_not_found();
    assert_eq!(repo.count().await, 0);
}

#[tokio::test]
async fn test_put_submit_not_found() {
    let dir = TempDir::new().unwrap();
    let (server, _repo) = common::create_test_server(&dir).await;

    let response = server.put("/submit").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_submitted_mappings_survive_restart() {
    let dir = TempDir::new().unwrap();
    let mut short_urls = Vec::new();
    {
        let (server, _repo) = common::create_test_server(&dir).await;
        for url in ["http://one.com", "http://two.com/a b", "http://three.com"] {
            let response = server
                .post("/submit")
                .form(&[("secret", "changeme"), ("url", url)])
                .await;
            short_urls.push((common::slug_of(&response.text()), url));
        }
    }

    let (_server, repo) = common::create_test_server(&dir).await;

    assert_eq!(repo.count().await, 3);
    for (slug, url) in short_urls {
        assert_eq!(repo.find_by_slug(&slug).await.as_deref(), Some(url));
        assert_eq!(repo.find_by_url(url).await, Some(slug));
    }
}

#[tokio::test]
async fn test_url_with_line_break_shares_slug_after_restart() {
    let dir = TempDir::new().unwrap();
    let slug = {
        let (server, repo) = common::create_test_server(&dir).await;

        let first = server
            .post("/submit")
            .form(&[("secret", "changeme"), ("url", "http://x\n.com")])
            .await;
        let second = server
            .post("/submit")
            .form(&[("secret", "changeme"), ("url", "http://x.com")])
            .await;

        assert_eq!(first.text(), second.text());
        assert_eq!(repo.count().await, 1);
        common::slug_of(&first.text())
    };

    let (_server, repo) = common::create_test_server(&dir).await;

    assert_eq!(repo.count().await, 1);
    assert_eq!(repo.find_by_slug(&slug).await.as_deref(), Some("http://x.com"));
    assert_eq!(repo.find_by_url("http://x.com").await, Some(slug));
}

#[tokio::test]
async fn test_repeated_form_field_uses_first_value() {
    let dir = TempDir::new().unwrap();
    let (server, repo) = common::create_test_server(&dir).await;

    let response = server
        .post("/submit")
        .form(&[
            ("secret", "changeme"),
            ("url", "http://first.com"),
            ("url", "http://second.com"),
        ])
        .await;

    response.assert_status_ok();
    let slug = common::slug_of(&response.text());
    assert_eq!(
        repo.find_by_slug(&slug).await.as_deref(),
        Some("http://first.com")
    );
    assert!(repo.find_by_url("http://second.com").await.is_none());
}
