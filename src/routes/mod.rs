//! Router assembly.

mod books;
mod common;

pub use books::book_routes;
pub use common::common_routes;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Full service: book routes, common routes, request tracing and a body size cap.
/// Over-limit bodies surface through `JsonBody` as a JSON 413.
pub fn app(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(book_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(max_body_bytes)),
        )
}
