use axum::routing::{post, Router};
use crate::handles::notification::create;

pub fn register_notification_routes() -> Router {
    Router::new().route("/api/v1/notification", post(create))
}
