use async_trait::async_trait;
use mongodb::bson::Document as BsonDocument;

use crate::db::models::Article;
use crate::error::AppError;

/// Repository trait for article operations.
///
/// This trait allows mocking the database layer in tests.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Fetch every article, in store-native order.
    async fn find_all(&self) -> Result<Vec<Article>, AppError>;

    /// Persist one new article.
    async fn insert(&self, article: Article) -> Result<(), AppError>;

    /// Remove the entire collection.
    async fn delete_all(&self) -> Result<(), AppError>;

    /// Find the first article whose `title` matches.
    async fn find_by_title(&self, title: &str) -> Result<Option<Article>, AppError>;

    /// Replace the first matching article wholesale with `replacement`.
    ///
    /// Fields absent from `replacement` are absent from the stored document
    /// afterwards. No-op when nothing matches.
    async fn replace_by_title(&self, title: &str, replacement: Article)
        -> Result<(), AppError>;

    /// Overwrite only the supplied `fields` on the first matching article,
    /// preserving everything else. No-op when nothing matches.
    async fn merge_by_title(&self, title: &str, fields: BsonDocument) -> Result<(), AppError>;

    /// Remove the first article whose `title` matches.
    async fn delete_by_title(&self, title: &str) -> Result<(), AppError>;
}

/// MongoDB implementation of the ArticleRepository.
pub struct MongoArticleRepository {
    collection: mongodb::Collection<Article>,
}

impl MongoArticleRepository {
    pub fn new(db: &mongodb::Database) -> Self {
        Self {
            collection: db.collection("articles"),
        }
    }
}

#[async_trait]
impl ArticleRepository for MongoArticleRepository {
    async fn find_all(&self) -> Result<Vec<Article>, AppError> {
        use mongodb::bson::doc;

        let mut cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        let mut articles = Vec::new();
        use futures::TryStreamExt;
        while let Some(article) = cursor
            .try_next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            articles.push(article);
        }

        Ok(articles)
    }

    async fn insert(&self, article: Article) -> Result<(), AppError> {
        self.collection
            .insert_one(article)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }

    async fn delete_all(&self) -> Result<(), AppError> {
        use mongodb::bson::doc;

        self.collection
            .delete_many(doc! {})
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Article>, AppError> {
        use mongodb::bson::doc;

        self.collection
            .find_one(doc! { "title": title })
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn replace_by_title(
        &self,
        title: &str,
        replacement: Article,
    ) -> Result<(), AppError> {
        use mongodb::bson::doc;

        // Serialization skips absent fields, so the stored document ends up
        // holding exactly what the client supplied. `_id` is preserved by
        // the store.
        self.collection
            .replace_one(doc! { "title": title }, &replacement)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }

    async fn merge_by_title(&self, title: &str, fields: BsonDocument) -> Result<(), AppError> {
        use mongodb::bson::doc;

        self.collection
            .update_one(doc! { "title": title }, doc! { "$set": fields })
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }

    async fn delete_by_title(&self, title: &str) -> Result<(), AppError> {
        use mongodb::bson::doc;

        self.collection
            .delete_one(doc! { "title": title })
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }
}
