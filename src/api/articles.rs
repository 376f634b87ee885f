use axum::extract::{Path, State};
use axum::Json;

use crate::db::models::{Article, ArticlePayload};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /articles` — every stored article, unfiltered, store-native order.
pub async fn list_articles(
    State(state): State<AppState>,
) -> Result<Json<Vec<Article>>, AppError> {
    let articles = state.articles.find_all().await?;
    Ok(Json(articles))
}

/// `POST /articles` — persist one new article built from the body fields.
pub async fn create_article(
    State(state): State<AppState>,
    Json(payload): Json<ArticlePayload>,
) -> Result<&'static str, AppError> {
    state.articles.insert(payload.into_article()).await?;
    Ok("Successfully added a new article.")
}

/// `DELETE /articles` — drop every document in the collection.
pub async fn delete_all_articles(
    State(state): State<AppState>,
) -> Result<&'static str, AppError> {
    state.articles.delete_all().await?;
    Ok("Successfully deleted all articles.")
}

/// `GET /articles/{title}` — the first article matching the title.
///
/// Absence is not an error: a missing article renders as a `null` body,
/// indistinguishable from an empty success.
pub async fn get_article(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<Option<Article>>, AppError> {
    let article = state.articles.find_by_title(&title).await?;
    Ok(Json(article))
}

/// `PUT /articles/{title}` — full replace.
///
/// The replacement carries only the body's `title` and `content`; omitted
/// fields are dropped from the stored document.
pub async fn replace_article(
    State(state): State<AppState>,
    Path(title): Path<String>,
    Json(payload): Json<ArticlePayload>,
) -> Result<&'static str, AppError> {
    state
        .articles
        .replace_by_title(&title, payload.into_article())
        .await?;
    Ok("Successfully updated article.")
}

/// `PATCH /articles/{title}` — field-level merge.
///
/// The entire body is the set of fields to overwrite; everything else on the
/// document is preserved.
pub async fn update_article(
    State(state): State<AppState>,
    Path(title): Path<String>,
    Json(fields): Json<serde_json::Map<String, serde_json::Value>>,
) -> Result<&'static str, AppError> {
    let fields = mongodb::bson::to_document(&fields)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    state.articles.merge_by_title(&title, fields).await?;
    Ok("Successfully updated article.")
}

/// `DELETE /articles/{title}` — remove the first article matching the title.
pub async fn delete_article(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<&'static str, AppError> {
    state.articles.delete_by_title(&title).await?;
    Ok("Successfully deleted document.")
}
