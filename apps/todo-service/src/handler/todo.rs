//! # Todo ハンドラ
//!
//! Todo 項目の CRUD API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /todos` - 全件取得
//! - `GET /todos/{id}` - 1 件取得
//! - `POST /todos` - 作成（`Location` ヘッダー付き）
//! - `PUT /todos/{id}` - 上書き更新
//! - `DELETE /todos/{id}` - 削除（削除した項目を返す）

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use todo_domain::todo::{NewTodoItem, TodoItem, TodoItemId};
use todo_shared::ErrorResponse;
use utoipa::ToSchema;

use crate::{error::CoreError, usecase::TodoUseCaseImpl};

/// Todo API の共有状態
pub struct TodoState {
    pub usecase: TodoUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// Todo 項目の作成・更新リクエスト
///
/// `id` を含めても無視される。省略した項目は空タイトル・未完了として扱う。
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemRequest {
    #[serde(default)]
    pub title:       String,
    #[serde(default)]
    pub is_complete: bool,
}

impl From<TodoItemRequest> for NewTodoItem {
    fn from(req: TodoItemRequest) -> Self {
        NewTodoItem::new(req.title, req.is_complete)
    }
}

/// Todo 項目 DTO
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemDto {
    pub id:          i32,
    pub title:       String,
    pub is_complete: bool,
}

impl From<&TodoItem> for TodoItemDto {
    fn from(item: &TodoItem) -> Self {
        Self {
            id:          item.id().as_i32(),
            title:       item.title().to_string(),
            is_complete: item.is_complete(),
        }
    }
}

// --- ハンドラ ---

/// GET /todos
///
/// 全件を返す。フィルタ・ページングはしない。
#[utoipa::path(
    get,
    path = "/todos",
    tag = "todos",
    responses(
        (status = 200, description = "Todo 項目一覧", body = Vec<TodoItemDto>)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_todos(
    State(state): State<Arc<TodoState>>,
) -> Result<impl IntoResponse, CoreError> {
    let items = state.usecase.list().await?;

    let dtos: Vec<TodoItemDto> = items.iter().map(TodoItemDto::from).collect();
    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /todos/{id}
#[utoipa::path(
    get,
    path = "/todos/{id}",
    tag = "todos",
    params(("id" = i32, Path, description = "Todo 項目 ID")),
    responses(
        (status = 200, description = "Todo 項目", body = TodoItemDto),
        (status = 404, description = "Todo 項目が見つからない", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, CoreError> {
    let item = state.usecase.get(TodoItemId::new(id)).await?;

    Ok((StatusCode::OK, Json(TodoItemDto::from(&item))))
}

/// POST /todos
///
/// Todo 項目を作成する。ID はストレージが採番する。
///
/// ## レスポンス
///
/// - `201 Created`: 作成された項目。`Location: /todos/{id}` を付与する
#[utoipa::path(
    post,
    path = "/todos",
    tag = "todos",
    request_body = TodoItemRequest,
    responses(
        (status = 201, description = "作成成功", body = TodoItemDto,
         headers(("Location" = String, description = "作成された項目の URI")))
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_todo(
    State(state): State<Arc<TodoState>>,
    Json(req): Json<TodoItemRequest>,
) -> Result<impl IntoResponse, CoreError> {
    let item = state.usecase.create(req.into()).await?;

    let location = format!("/todos/{}", item.id());
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(TodoItemDto::from(&item)),
    ))
}

/// PUT /todos/{id}
///
/// タイトルと完了フラグを丸ごと上書きする。
///
/// ## レスポンス
///
/// - `204 No Content`: 更新成功
/// - `404 Not Found`: 項目が見つからない
#[utoipa::path(
    put,
    path = "/todos/{id}",
    tag = "todos",
    params(("id" = i32, Path, description = "Todo 項目 ID")),
    request_body = TodoItemRequest,
    responses(
        (status = 204, description = "更新成功"),
        (status = 404, description = "Todo 項目が見つからない", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all, fields(%id))]
pub async fn update_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<i32>,
    Json(req): Json<TodoItemRequest>,
) -> Result<impl IntoResponse, CoreError> {
    state
        .usecase
        .replace(TodoItemId::new(id), req.into())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /todos/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 削除した項目
/// - `404 Not Found`: 項目が見つからない
#[utoipa::path(
    delete,
    path = "/todos/{id}",
    tag = "todos",
    params(("id" = i32, Path, description = "Todo 項目 ID")),
    responses(
        (status = 200, description = "削除した Todo 項目", body = TodoItemDto),
        (status = 404, description = "Todo 項目が見つからない", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, CoreError> {
    let removed = state.usecase.delete(TodoItemId::new(id)).await?;

    Ok((StatusCode::OK, Json(TodoItemDto::from(&removed))))
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::{
        Router,
        body::Body,
        http::{Method, Request},
        routing::get,
    };
    use pretty_assertions::assert_eq;
    use todo_infra::{InfraError, mock::MockTodoRepository, repository::TodoRepository};
    use tower::ServiceExt;

    use super::*;

    // --- スタブ ---

    /// すべての操作がデータベースエラーになるリポジトリ
    struct FailingTodoRepository;

    #[async_trait]
    impl TodoRepository for FailingTodoRepository {
        async fn find_all(&self) -> Result<Vec<TodoItem>, InfraError> {
            Err(InfraError::unexpected("接続断"))
        }

        async fn find_by_id(&self, _id: &TodoItemId) -> Result<Option<TodoItem>, InfraError> {
            Err(InfraError::unexpected("接続断"))
        }

        async fn insert(&self, _new_item: &NewTodoItem) -> Result<TodoItem, InfraError> {
            Err(InfraError::unexpected("接続断"))
        }

        async fn update(&self, _item: &TodoItem) -> Result<Option<TodoItem>, InfraError> {
            Err(InfraError::unexpected("接続断"))
        }

        async fn delete(&self, _id: &TodoItemId) -> Result<Option<TodoItem>, InfraError> {
            Err(InfraError::unexpected("接続断"))
        }
    }

    // --- ヘルパー ---

    fn create_test_app(repo: Arc<dyn TodoRepository>) -> Router {
        let state = Arc::new(TodoState {
            usecase: TodoUseCaseImpl::new(repo),
        });

        Router::new()
            .route("/todos", get(list_todos).post(create_todo))
            .route(
                "/todos/{id}",
                get(get_todo).put(update_todo).delete(delete_todo),
            )
            .with_state(state)
    }

    fn buy_milk(id: i32, is_complete: bool) -> TodoItem {
        TodoItem::from_db(TodoItemId::new(id), "Buy milk".to_string(), is_complete)
    }

    fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn response_body<T: serde::de::DeserializeOwned>(
        response: axum::http::Response<Body>,
    ) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    // --- テストケース ---

    #[tokio::test]
    async fn test_get_一覧が空なら空配列が返る() {
        // Given
        let sut = create_test_app(Arc::new(MockTodoRepository::new()));

        // When
        let response = sut.oneshot(empty_request(Method::GET, "/todos")).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        let body: Vec<TodoItemDto> = response_body(response).await;
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_get_存在するidで200とcamel_caseの項目が返る() {
        // Given
        let repo = MockTodoRepository::new();
        repo.add_item(buy_milk(1, false));
        let sut = create_test_app(Arc::new(repo));

        // When
        let response = sut.oneshot(empty_request(Method::GET, "/todos/1")).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = response_body(response).await;
        assert_eq!(
            body,
            serde_json::json!({ "id": 1, "title": "Buy milk", "isComplete": false })
        );
    }

    #[tokio::test]
    async fn test_get_存在しないidで404が返る() {
        let sut = create_test_app(Arc::new(MockTodoRepository::new()));

        let response = sut.oneshot(empty_request(Method::GET, "/todos/1")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: ErrorResponse = response_body(response).await;
        assert_eq!(body.status, 404);
    }

    #[tokio::test]
    async fn test_post_作成すると201とlocationヘッダーが返る() {
        // Given
        let sut = create_test_app(Arc::new(MockTodoRepository::new()));
        let request = json_request(
            Method::POST,
            "/todos",
            serde_json::json!({ "title": "Buy milk", "isComplete": false }),
        );

        // When
        let response = sut.oneshot(request).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::LOCATION], "/todos/1");
        let body: TodoItemDto = response_body(response).await;
        assert_eq!(
            body,
            TodoItemDto {
                id:          1,
                title:       "Buy milk".to_string(),
                is_complete: false,
            }
        );
    }

    #[tokio::test]
    async fn test_post_ボディのidは無視されストレージが採番する() {
        // Given
        let repo = MockTodoRepository::new();
        let sut = create_test_app(Arc::new(repo.clone()));
        let request = json_request(
            Method::POST,
            "/todos",
            serde_json::json!({ "id": 500, "title": "Buy milk" }),
        );

        // When
        let response = sut.oneshot(request).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::CREATED);
        let body: TodoItemDto = response_body(response).await;
        assert_eq!(body.id, 1);
        assert!(!body.is_complete, "isComplete 省略時は false");
        assert_eq!(repo.items(), vec![buy_milk(1, false)]);
    }

    #[tokio::test]
    async fn test_put_存在するidで204が返り値が上書きされる() {
        // Given
        let repo = MockTodoRepository::new();
        repo.add_item(buy_milk(1, false));
        let sut = create_test_app(Arc::new(repo.clone()));
        let request = json_request(
            Method::PUT,
            "/todos/1",
            serde_json::json!({ "title": "Buy oat milk", "isComplete": true }),
        );

        // When
        let response = sut.oneshot(request).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            repo.items(),
            vec![TodoItem::from_db(
                TodoItemId::new(1),
                "Buy oat milk".to_string(),
                true
            )]
        );
    }

    #[tokio::test]
    async fn test_put_存在しないidで404が返り状態は変わらない() {
        // Given
        let repo = MockTodoRepository::new();
        repo.add_item(buy_milk(1, false));
        let sut = create_test_app(Arc::new(repo.clone()));
        let request = json_request(
            Method::PUT,
            "/todos/2",
            serde_json::json!({ "title": "ghost", "isComplete": true }),
        );

        // When
        let response = sut.oneshot(request).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(repo.items(), vec![buy_milk(1, false)]);
    }

    #[tokio::test]
    async fn test_delete_存在するidで200と削除した項目が返る() {
        // Given
        let repo = MockTodoRepository::new();
        repo.add_item(buy_milk(1, true));
        let sut = create_test_app(Arc::new(repo.clone()));

        // When
        let response = sut
            .oneshot(empty_request(Method::DELETE, "/todos/1"))
            .await
            .unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        let body: TodoItemDto = response_body(response).await;
        assert_eq!(body.id, 1);
        assert!(body.is_complete);
        assert!(repo.items().is_empty());
    }

    #[tokio::test]
    async fn test_delete_存在しないidで404が返る() {
        let repo = MockTodoRepository::new();
        repo.add_item(buy_milk(1, false));
        let sut = create_test_app(Arc::new(repo.clone()));

        let response = sut
            .oneshot(empty_request(Method::DELETE, "/todos/7"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(repo.items().len(), 1);
    }

    #[tokio::test]
    async fn test_データベースエラーで500が返る() {
        let sut = create_test_app(Arc::new(FailingTodoRepository));

        let response = sut.oneshot(empty_request(Method::GET, "/todos")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = response_body(response).await;
        assert_eq!(body.detail, "内部エラーが発生しました");
    }

    #[tokio::test]
    async fn test_整数でないidは400系で拒否される() {
        let sut = create_test_app(Arc::new(MockTodoRepository::new()));

        let response = sut
            .oneshot(empty_request(Method::GET, "/todos/abc"))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }
}
