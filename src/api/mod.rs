//! API handlers for Bookshelf REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use std::future::{ready, Ready};

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{error::AppError, AppState};

/// Extractor for the `?id=N` query parameter used by the single-book routes.
///
/// Only the first `id` pair counts; later duplicates are ignored.
pub struct BookId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for BookId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|_| AppError::BadRequest("Invalid ID format".to_string()))?;

        let raw = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "id").then_some(value))
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::BadRequest("id parameter is required".to_string()))?;

        let id = raw
            .parse::<i64>()
            .map_err(|_| AppError::BadRequest("Invalid ID format".to_string()))?;

        Ok(BookId(id))
    }
}

/// Handler rejecting any verb a route does not serve, advertising `allow`
fn method_not_allowed(allow: &'static str) -> impl Fn() -> Ready<AppError> + Clone + Send + Sync + 'static {
    move || ready(AppError::MethodNotAllowed(allow))
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Books
        .route(
            "/books",
            get(books::list_books)
                .post(books::create_book)
                .head(method_not_allowed(books::BOOKS_ALLOW))
                .fallback(method_not_allowed(books::BOOKS_ALLOW)),
        )
        .route(
            "/book",
            get(books::get_book)
                .delete(books::delete_book)
                .head(method_not_allowed(books::BOOK_ALLOW))
                .fallback(method_not_allowed(books::BOOK_ALLOW)),
        )
        .route(
            "/book/read",
            post(books::mark_book_read).fallback(method_not_allowed(books::BOOK_READ_ALLOW)),
        )
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .layer(TraceLayer::new_for_http())
}
