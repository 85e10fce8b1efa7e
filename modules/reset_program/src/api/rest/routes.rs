use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;

use crate::api::rest::handlers;
use crate::domain::service::Service;

pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route(
            "/reset",
            get(handlers::get_plan).patch(handlers::patch_plan),
        )
        .route("/reset/today", get(handlers::today))
        .route("/reset/complete-task", post(handlers::complete_task))
        .route("/reset/reflections", post(handlers::add_reflection))
        .route("/reset/program", get(handlers::program_table))
        .layer(Extension(service))
}
