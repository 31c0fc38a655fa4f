//! Book endpoints

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook},
    AppState,
};

use super::BookId;

/// Methods served by each book route, as sent in `Allow` on a 405
pub const BOOKS_ALLOW: &str = "GET, POST";
pub const BOOK_ALLOW: &str = "GET, DELETE";
pub const BOOK_READ_ALLOW: &str = "POST";

/// Add a book to the library
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Malformed JSON body")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Book>)> {
    let data = CreateBook::from_json(&body).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let created = state.repository.books.create(data)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// List every book in the library
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books, in no particular order", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.repository.books.list()?;
    Ok(Json(books))
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/book",
    tag = "books",
    params(crate::models::book::BookIdQuery),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 400, description = "Missing or invalid id"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> AppResult<Json<Book>> {
    let book = state.repository.books.get_by_id(id)?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/book",
    tag = "books",
    params(crate::models::book::BookIdQuery),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 400, description = "Missing or invalid id"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> AppResult<StatusCode> {
    state.repository.books.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Mark a book as read
#[utoipa::path(
    post,
    path = "/book/read",
    tag = "books",
    params(crate::models::book::BookIdQuery),
    responses(
        (status = 200, description = "Book marked as read", body = Book),
        (status = 400, description = "Missing or invalid id"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn mark_book_read(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> AppResult<Json<Book>> {
    let book = state.repository.books.mark_read(id)?;
    Ok(Json(book))
}
