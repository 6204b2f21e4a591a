// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::articles, error::HttpError, middleware::scanner_block::block_scanners,
};
use axum::{
    Extension, Json, Router, middleware,
    response::Redirect,
    routing::get,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route(
            "/articles",
            get(articles::index).post(articles::create),
        )
        .route(
            "/articles/new",
            get(articles::new_article).route_layer(middleware::from_fn(block_scanners)),
        )
        .route(
            "/articles/{id}",
            get(articles::show)
                .patch(articles::update)
                .put(articles::update)
                .delete(articles::destroy)
                .post(articles::override_method),
        )
        .route("/articles/{id}/edit", get(articles::edit))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

pub async fn root() -> Redirect {
    Redirect::to("/articles")
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}

async fn not_found() -> HttpError {
    HttpError::not_found()
}
