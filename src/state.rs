use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::repository::{ArticleRepository, MongoArticleRepository};

/// Shared application state handed to every request handler.
///
/// Constructed once at startup and cloned into the router; there is no other
/// process-level mutable state.
#[derive(Clone)]
pub struct AppState {
    pub articles: Arc<dyn ArticleRepository>,
    pub config: AppConfig,
}

impl AppState {
    /// Connect to MongoDB and build the state from `config`.
    pub async fn connect(config: AppConfig) -> anyhow::Result<Self> {
        use anyhow::Context;

        let client = mongodb::Client::with_uri_str(&config.mongodb_uri)
            .await
            .context("Failed to connect to MongoDB")?;
        let db = client.database(&config.mongodb_database);
        let articles: Arc<dyn ArticleRepository> = Arc::new(MongoArticleRepository::new(&db));

        Ok(Self { articles, config })
    }
}
