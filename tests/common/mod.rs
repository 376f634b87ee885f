use std::sync::Arc;

use testcontainers::runners::AsyncRunner;
use testcontainers::ContainerAsync;
use testcontainers_modules::mongo::Mongo;

use wiki_api::app::build_router;
use wiki_api::config::AppConfig;
use wiki_api::db::repository::{ArticleRepository, MongoArticleRepository};
use wiki_api::state::AppState;

/// Holds the running MongoDB container and the wired Axum router.
///
/// The container is kept alive for as long as this struct lives and is
/// stopped and cleaned up automatically on drop.
pub struct TestEnv {
    _mongo: ContainerAsync<Mongo>,
    pub repo: Arc<dyn ArticleRepository>,
    router: axum::Router,
}

impl TestEnv {
    /// Spin up MongoDB and build a router wired to a real repository.
    pub async fn start() -> Self {
        let mongo_container = Mongo::default()
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let mongo_port = mongo_container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get MongoDB port");
        let mongo_uri = format!("mongodb://127.0.0.1:{}", mongo_port);
        let mongo_client = mongodb::Client::with_uri_str(&mongo_uri)
            .await
            .expect("Failed to connect to MongoDB");
        let mongo_db = mongo_client.database("wiki_test");
        let repo: Arc<dyn ArticleRepository> = Arc::new(MongoArticleRepository::new(&mongo_db));

        let state = AppState {
            articles: repo.clone(),
            config: AppConfig {
                mongodb_uri: mongo_uri,
                mongodb_database: "wiki_test".to_string(),
                bind_addr: "127.0.0.1:0".to_string(),
                public_dir: "public".to_string(),
            },
        };

        let router = build_router(state);

        Self {
            _mongo: mongo_container,
            repo,
            router,
        }
    }

    /// Build an `axum_test::TestServer` from this environment's router.
    pub fn server(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .expect_success_by_default()
            .build(self.router.clone())
    }

    /// Helper: create an article via the API.
    pub async fn create_article(
        &self,
        server: &axum_test::TestServer,
        title: &str,
        content: &str,
    ) -> axum_test::TestResponse {
        server
            .post("/articles")
            .json(&serde_json::json!({
                "title": title,
                "content": content
            }))
            .await
    }
}
