//! OpenAPI documentation

use axum::Json;
use utoipa::OpenApi;

use crate::api::{books, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        version = "1.0.0",
        description = "In-memory book tracking REST API"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        // Books
        books::create_book,
        books::list_books,
        books::get_book,
        books::delete_book,
        books::mark_book_read,
    ),
    components(
        schemas(
            health::HealthResponse,
            crate::models::book::Book,
            crate::models::book::CreateBook,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "books", description = "Book tracking")
    )
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
