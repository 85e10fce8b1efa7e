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
            "/budget",
            get(handlers::get_budget).post(handlers::upsert_budget),
        )
        .route(
            "/budget/default-categories",
            get(handlers::default_categories),
        )
        .route(
            "/transactions",
            get(handlers::list_transactions).post(handlers::create_transaction),
        )
        .route("/transactions/{id}", delete(handlers::delete_transaction))
        .route(
            "/giving",
            get(handlers::list_giving).post(handlers::create_giving),
        )
        .route("/giving/{id}", delete(handlers::delete_giving))
        .route("/reports", get(handlers::monthly_report))
        .layer(Extension(service))
}
