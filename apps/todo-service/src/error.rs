//! # Todo Service エラー定義
//!
//! Todo Service 固有のエラーと、HTTP レスポンスへの変換を定義する。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use todo_domain::DomainError;
use todo_shared::ErrorResponse;

/// Todo Service で発生するエラー
#[derive(Debug, Error)]
pub enum CoreError {
    /// リソースが見つからない
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] todo_infra::InfraError),
}

impl From<DomainError> for CoreError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::NotFound { .. } => CoreError::NotFound(error.to_string()),
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let body = match &self {
            CoreError::NotFound(msg) => ErrorResponse::not_found(msg.clone()),
            CoreError::Database(e) => {
                tracing::error!(error = %e, span_trace = %e.span_trace(), "データベースエラー");
                ErrorResponse::internal_error()
            }
        };

        let status =
            StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}
