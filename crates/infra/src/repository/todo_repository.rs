//! # TodoRepository
//!
//! Todo 項目の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **1 操作 1 クエリ**: 更新・削除は `RETURNING` で存在確認と書き込みを同時に行う
//! - **存在しない ID**: エラーではなく `None` を返す。404 への変換はユースケース層の責務

use async_trait::async_trait;
use sqlx::PgPool;
use todo_domain::todo::{NewTodoItem, TodoItem, TodoItemId};

use crate::error::InfraError;

/// Todo リポジトリトレイト
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// 全件を ID 順で取得する
    async fn find_all(&self) -> Result<Vec<TodoItem>, InfraError>;

    /// ID で検索する
    async fn find_by_id(&self, id: &TodoItemId) -> Result<Option<TodoItem>, InfraError>;

    /// 挿入する。ID はストレージが採番し、保存後のエンティティを返す
    async fn insert(&self, new_item: &NewTodoItem) -> Result<TodoItem, InfraError>;

    /// タイトルと完了フラグを上書きする
    ///
    /// 対象行が存在しない場合は `None` を返す。
    async fn update(&self, item: &TodoItem) -> Result<Option<TodoItem>, InfraError>;

    /// 削除し、削除した行を返す
    ///
    /// 対象行が存在しない場合は `None` を返す。
    async fn delete(&self, id: &TodoItemId) -> Result<Option<TodoItem>, InfraError>;
}

/// `todo_items` テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct TodoItemRow {
    id:          i32,
    title:       String,
    is_complete: bool,
}

impl From<TodoItemRow> for TodoItem {
    fn from(row: TodoItemRow) -> Self {
        TodoItem::from_db(TodoItemId::new(row.id), row.title, row.is_complete)
    }
}

/// PostgreSQL 実装の TodoRepository
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<TodoItem>, InfraError> {
        let rows = sqlx::query_as::<_, TodoItemRow>(
            r#"
            SELECT id, title, is_complete
            FROM todo_items
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TodoItem::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: &TodoItemId) -> Result<Option<TodoItem>, InfraError> {
        let row = sqlx::query_as::<_, TodoItemRow>(
            r#"
            SELECT id, title, is_complete
            FROM todo_items
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TodoItem::from))
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, new_item: &NewTodoItem) -> Result<TodoItem, InfraError> {
        let row = sqlx::query_as::<_, TodoItemRow>(
            r#"
            INSERT INTO todo_items (title, is_complete)
            VALUES ($1, $2)
            RETURNING id, title, is_complete
            "#,
        )
        .bind(new_item.title.as_str())
        .bind(new_item.is_complete)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %item.id()))]
    async fn update(&self, item: &TodoItem) -> Result<Option<TodoItem>, InfraError> {
        let row = sqlx::query_as::<_, TodoItemRow>(
            r#"
            UPDATE todo_items
            SET title = $2, is_complete = $3
            WHERE id = $1
            RETURNING id, title, is_complete
            "#,
        )
        .bind(item.id().as_i32())
        .bind(item.title())
        .bind(item.is_complete())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TodoItem::from))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: &TodoItemId) -> Result<Option<TodoItem>, InfraError> {
        let row = sqlx::query_as::<_, TodoItemRow>(
            r#"
            DELETE FROM todo_items
            WHERE id = $1
            RETURNING id, title, is_complete
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TodoItem::from))
    }
}
