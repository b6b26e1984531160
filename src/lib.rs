//! Books API: CRUD REST service for a single `books` table.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod sql;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use model::{Book, BookInput};
pub use routes::{app, book_routes, common_routes};
pub use state::AppState;
pub use store::{BookStore, MemoryBookStore, PgBookStore};
