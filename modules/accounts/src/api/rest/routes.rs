use axum::{
    routing::{get, patch, post},
    Extension, Router,
};
use std::sync::Arc;

use crate::api::rest::handlers;
use crate::domain::service::Service;

pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route("/auth/signup", post(handlers::signup))
        .route("/auth/login", post(handlers::login))
        .route(
            "/user",
            get(handlers::get_user).put(handlers::update_user),
        )
        .route("/user/onboarding", post(handlers::onboard))
        .route("/user/password", patch(handlers::change_password))
        .route("/meta/catalogs", get(handlers::catalogs))
        .layer(Extension(service))
}
