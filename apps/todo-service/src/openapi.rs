//! # OpenAPI 仕様定義
//!
//! utoipa を使用して Todo Service の OpenAPI 仕様を Rust の型から生成する。
//! `ApiDoc::openapi()` で OpenAPI ドキュメントを取得できる。
//! 開発環境では [`swagger_ui`] で Swagger UI と JSON を配信する。

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handler::{health, todo};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo Service API",
        version = "0.1.0",
        description = "Todo 項目を管理する CRUD API"
    ),
    paths(
        // health
        health::health_check,
        health::readiness_check,
        // todos
        todo::list_todos,
        todo::get_todo,
        todo::create_todo,
        todo::update_todo,
        todo::delete_todo,
    ),
    components(schemas(
        todo_shared::ErrorResponse,
    )),
    tags(
        (name = "health", description = "ヘルスチェック"),
        (name = "todos", description = "Todo 項目管理"),
    )
)]
pub struct ApiDoc;

/// Swagger UI（`/swagger-ui`）と OpenAPI JSON（`/openapi.json`）
///
/// 開発環境でのみルーティングされる。
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/openapi.json", ApiDoc::openapi())
}
