//! # アプリケーション構築
//!
//! ルーターとミドルウェアの組み立てを担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, routing::get};
use todo_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{
        ReadinessState,
        TodoState,
        create_todo,
        delete_todo,
        get_todo,
        health_check,
        list_todos,
        readiness_check,
        update_todo,
    },
    openapi::swagger_ui,
};

/// ルーターを構築する
///
/// `expose_api_docs` が `true` の場合のみ `/swagger-ui` と `/openapi.json` を公開する。
pub fn build_app(
    todo_state: Arc<TodoState>,
    readiness_state: Arc<ReadinessState>,
    expose_api_docs: bool,
) -> Router {
    let mut app = Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(todo_state);

    if expose_api_docs {
        app = app.merge(swagger_ui());
    }

    app.layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
