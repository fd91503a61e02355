use std::any::Any;
use std::sync::Arc;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::error;
use crate::params::responses::common::ApiResponse;
use crate::routes::notification::register_notification_routes;
use crate::services::message_sender::MessageSender;

pub fn init_routes(sender: Arc<dyn MessageSender>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::POST])
        .allow_headers(AnyOrigin);

    Router::new()
        .merge(register_notification_routes())
        .layer(Extension(sender))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_handler))
}

fn panic_handler(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    error!("handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::failure("internal server error")),
    )
        .into_response()
}
