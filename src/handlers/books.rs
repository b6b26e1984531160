//! Book CRUD handlers: list, create, read, update, delete.

use crate::error::AppError;
use crate::extractors::{JsonBody, RawId};
use crate::model::BookInput;
use crate::response::{book_created, book_ok, books_ok, message_ok, rows_affected_message};
use crate::state::AppState;
use axum::extract::State;

/// Any id that is not an `i32` cannot match a row, so it is reported as not found.
fn parse_id(id_str: &str) -> Result<i32, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::book_not_found(id_str))
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let books = state.store.list().await?;
    Ok(books_ok(books))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<BookInput>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let book = state.store.create(&input).await?;
    tracing::info!(id = book.id, "book created");
    Ok(book_created(book))
}

pub async fn read(
    State(state): State<AppState>,
    RawId(id_str): RawId,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let book = state
        .store
        .read(id)
        .await?
        .ok_or_else(|| AppError::book_not_found(id_str))?;
    Ok(book_ok(book))
}

pub async fn update(
    State(state): State<AppState>,
    RawId(id_str): RawId,
    JsonBody(input): JsonBody<BookInput>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let rows = state.store.update(id, &input).await?;
    if rows == 0 {
        return Err(AppError::book_not_found(id_str));
    }
    tracing::info!(id, rows, "book updated");
    Ok(message_ok(rows_affected_message(rows, &id_str, "updated")))
}

pub async fn delete(
    State(state): State<AppState>,
    RawId(id_str): RawId,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let rows = state.store.delete(id).await?;
    if rows == 0 {
        return Err(AppError::book_not_found(id_str));
    }
    tracing::info!(id, rows, "book deleted");
    Ok(message_ok(rows_affected_message(rows, &id_str, "deleted")))
}
