#![allow(dead_code)]

use axum_test::TestServer;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use slug_shortener::application::services::LinkService;
use slug_shortener::domain::Mappings;
use slug_shortener::infrastructure::persistence::FileSlugRepository;
use slug_shortener::routes::app_router;
use slug_shortener::state::AppState;

pub const SECRET: &str = "changeme";
pub const SERVER_NAME: &str = "http://localhost";
pub const SLUG_LENGTH: usize = 5;

/// Storage path inside a fresh temporary directory.
pub fn storage_path(dir: &TempDir) -> PathBuf {
    dir.path().join("urls")
}

pub fn create_test_state(repository: Arc<FileSlugRepository>) -> AppState {
    let link_service = LinkService::new(repository, SECRET, SERVER_NAME);
    AppState::new(Arc::new(link_service))
}

/// Full application router over a store at `storage_path(dir)`.
pub async fn create_test_server(dir: &TempDir) -> (TestServer, Arc<FileSlugRepository>) {
    let repository = Arc::new(
        FileSlugRepository::open(storage_path(dir), SLUG_LENGTH)
            .await
            .unwrap(),
    );
    let server = TestServer::new(app_router(create_test_state(repository.clone()))).unwrap();
    (server, repository)
}

/// Router over a store pre-filled with `pairs`.
pub fn create_seeded_server(
    dir: &TempDir,
    pairs: &[(&str, &str)],
) -> (TestServer, Arc<FileSlugRepository>) {
    let mut mappings = Mappings::new();
    for (slug, url) in pairs {
        mappings.put(slug.to_string(), url.to_string());
    }
    let repository = Arc::new(FileSlugRepository::new(
        storage_path(dir),
        SLUG_LENGTH,
        mappings,
    ));
    let server = TestServer::new(app_router(create_test_state(repository.clone()))).unwrap();
    (server, repository)
}

/// Extracts the slug from a `http://localhost/<slug>` response body.
pub fn slug_of(short_url: &str) -> String {
    short_url
        .strip_prefix(&format!("{SERVER_NAME}/"))
        .unwrap_or_else(|| panic!("unexpected short url {short_url}"))
        .to_string()
}
