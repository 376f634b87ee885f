use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::state::AppState;

/// Build the application router.
///
/// Two path patterns carry the whole API: the collection route and the
/// item route keyed by title. Anything else falls through to static files.
pub fn build_router(state: AppState) -> Router {
    let public_dir = state.config.public_dir.clone();

    Router::new()
        .route(
            "/articles",
            get(api::articles::list_articles)
                .post(api::articles::create_article)
                .delete(api::articles::delete_all_articles),
        )
        .route(
            "/articles/{title}",
            get(api::articles::get_article)
                .put(api::articles::replace_article)
                .patch(api::articles::update_article)
                .delete(api::articles::delete_article),
        )
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
