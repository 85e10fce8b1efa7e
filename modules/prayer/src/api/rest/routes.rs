use axum::{
    routing::{delete, get},
    Extension, Router,
};
use std::sync::Arc;

use crate::api::rest::handlers;
use crate::domain::service::Service;

pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route(
            "/prayer/goals",
            get(handlers::list_goals).post(handlers::create_goal),
        )
        .route(
            "/prayer/goals/{id}",
            axum::routing::put(handlers::update_goal).delete(handlers::delete_goal),
        )
        .route(
            "/prayer/entries",
            get(handlers::list_entries).post(handlers::create_entry),
        )
        .route("/prayer/entries/{id}", delete(handlers::delete_entry))
        .layer(Extension(service))
}
