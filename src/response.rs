//! Response envelope helpers.

use crate::model::Book;
use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct BookEnvelope {
    pub book: Book,
}

#[derive(Serialize)]
pub struct BooksEnvelope {
    pub books: Vec<Book>,
}

/// Body of every failure response and of the update/delete confirmations.
#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

pub fn book_created(book: Book) -> (StatusCode, Json<BookEnvelope>) {
    (StatusCode::CREATED, Json(BookEnvelope { book }))
}

pub fn book_ok(book: Book) -> (StatusCode, Json<BookEnvelope>) {
    (StatusCode::OK, Json(BookEnvelope { book }))
}

pub fn books_ok(books: Vec<Book>) -> (StatusCode, Json<BooksEnvelope>) {
    (StatusCode::OK, Json(BooksEnvelope { books }))
}

pub fn message_ok(message: String) -> (StatusCode, Json<MessageBody>) {
    (StatusCode::OK, Json(MessageBody { message }))
}

/// "{n} row affected. Book with id {id} has been successfully {verb}"
pub fn rows_affected_message(rows: u64, id: &str, verb: &str) -> String {
    format!(
        "{} row affected. Book with id {} has been successfully {}",
        rows, id, verb
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_serializes_as_array() {
        let (_, Json(body)) = books_ok(Vec::new());
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "books": [] })
        );
    }

    #[test]
    fn rows_affected_message_format() {
        assert_eq!(
            rows_affected_message(1, "1", "updated"),
            "1 row affected. Book with id 1 has been successfully updated"
        );
        assert_eq!(
            rows_affected_message(1, "42", "deleted"),
            "1 row affected. Book with id 42 has been successfully deleted"
        );
    }
}
