use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, Json};
use axum::Extension;
use tracing::{error, info};

use crate::params::requests::notification::NotificationParams;
use crate::params::responses::common::ApiResponse;
use crate::services::message_sender::MessageSender;
use crate::services::notification::{formatter, validation};
use crate::utils::error::AppError;

pub async fn create(
    connect_info: Option<ConnectInfo<SocketAddr>>,
    Extension(sender): Extension<Arc<dyn MessageSender>>,
    payload: Result<Json<NotificationParams>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    match connect_info {
        Some(ConnectInfo(addr)) => info!(ip = %addr.ip(), "received request"),
        None => info!("received request"),
    }

    let Json(params) = payload.map_err(|e| {
        error!("failed to parse request: {}", e);
        AppError::bad_request("failed to parse request")
    })?;

    if let Err(e) = validation::validate(&params) {
        error!("failed to validate request: {}", e);
        return Err(AppError::bad_request("failed to validate request"));
    }

    let message = formatter::format(&params);

    if let Err(e) = sender.send_message(&message).await {
        error!("failed to send message: {}", e);
        return Err(AppError::internal("failed to send message"));
    }

    info!(request = ?params, "sent message successfully");
    Ok(ApiResponse::success("sent message successfully"))
}
