//! Todo 項目ユースケース

use std::sync::Arc;

use todo_domain::{
    DomainError,
    todo::{NewTodoItem, TodoItem, TodoItemId},
};
use todo_infra::repository::TodoRepository;

use crate::error::CoreError;

/// Todo 項目ユースケース
pub struct TodoUseCaseImpl {
    todo_repository: Arc<dyn TodoRepository>,
}

impl TodoUseCaseImpl {
    pub fn new(todo_repository: Arc<dyn TodoRepository>) -> Self {
        Self { todo_repository }
    }

    /// 全件を取得する（フィルタ・ページングなし）
    pub async fn list(&self) -> Result<Vec<TodoItem>, CoreError> {
        let items = self.todo_repository.find_all().await?;
        Ok(items)
    }

    /// ID で取得する
    pub async fn get(&self, id: TodoItemId) -> Result<TodoItem, CoreError> {
        self.todo_repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::todo_not_found(id).into())
    }

    /// 作成する。ID はストレージが採番する
    pub async fn create(&self, input: NewTodoItem) -> Result<TodoItem, CoreError> {
        let item = self.todo_repository.insert(&input).await?;
        tracing::info!(todo_id = %item.id(), "Todo 項目を作成しました");
        Ok(item)
    }

    /// タイトルと完了フラグを丸ごと置き換える
    ///
    /// 読み込みと書き込みの間に削除された場合も NotFound を返す。
    pub async fn replace(&self, id: TodoItemId, input: NewTodoItem) -> Result<TodoItem, CoreError> {
        let current = self.get(id).await?;
        self.todo_repository
            .update(&current.overwrite(input))
            .await?
            .ok_or_else(|| DomainError::todo_not_found(id).into())
    }

    /// 削除し、削除した項目を返す
    pub async fn delete(&self, id: TodoItemId) -> Result<TodoItem, CoreError> {
        let removed = self
            .todo_repository
            .delete(&id)
            .await?
            .ok_or_else(|| CoreError::from(DomainError::todo_not_found(id)))?;
        tracing::info!(todo_id = %id, "Todo 項目を削除しました");
        Ok(removed)
    }
}
