//! Storage seam for books. Handlers only see `BookStore`; the server injects a
//! Postgres-backed store, tests inject the in-memory one.

mod memory;
mod postgres;

pub use memory::MemoryBookStore;
pub use postgres::PgBookStore;

use crate::error::AppError;
use crate::model::{Book, BookInput};
use async_trait::async_trait;

/// One method per statement. Each call is a single round trip and a single
/// implicit transaction; implementations hold no per-request state.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All rows, in no particular order.
    async fn list(&self) -> Result<Vec<Book>, AppError>;

    /// Insert and return the stored row with its generated id.
    async fn create(&self, input: &BookInput) -> Result<Book, AppError>;

    async fn read(&self, id: i32) -> Result<Option<Book>, AppError>;

    /// Overwrite the three mutable fields. Returns rows affected (0 when `id` is absent).
    async fn update(&self, id: i32, input: &BookInput) -> Result<u64, AppError>;

    /// Returns rows affected (0 when `id` is absent).
    async fn delete(&self, id: i32) -> Result<u64, AppError>;

    /// Cheap connectivity check used by startup and the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}
