//! # テスト用モックリポジトリ
//!
//! ユースケース・ハンドラのテストで使用するインメモリリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! todo-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use todo_domain::todo::{NewTodoItem, TodoItem, TodoItemId};

use crate::{error::InfraError, repository::TodoRepository};

// ===== MockTodoRepository =====

#[derive(Default)]
struct MockTodoStore {
    /// 最後に採番した ID（IDENTITY 列と同じく 1 から始まり、再利用しない）
    last_id: i32,
    items:   BTreeMap<TodoItemId, TodoItem>,
}

/// インメモリの TodoRepository
///
/// `Clone` したインスタンス同士は同じストアを共有する。
#[derive(Clone, Default)]
pub struct MockTodoRepository {
    store: Arc<Mutex<MockTodoStore>>,
}

impl MockTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 採番済みの項目をストアに直接追加する
    pub fn add_item(&self, item: TodoItem) {
        let mut store = self.store.lock().unwrap();
        store.last_id = store.last_id.max(item.id().as_i32());
        store.items.insert(*item.id(), item);
    }

    /// 現在の全項目を ID 順で返す
    pub fn items(&self) -> Vec<TodoItem> {
        self.store.lock().unwrap().items.values().cloned().collect()
    }
}

#[async_trait]
impl TodoRepository for MockTodoRepository {
    async fn find_all(&self) -> Result<Vec<TodoItem>, InfraError> {
        Ok(self.items())
    }

    async fn find_by_id(&self, id: &TodoItemId) -> Result<Option<TodoItem>, InfraError> {
        Ok(self.store.lock().unwrap().items.get(id).cloned())
    }

    async fn insert(&self, new_item: &NewTodoItem) -> Result<TodoItem, InfraError> {
        let mut store = self.store.lock().unwrap();
        store.last_id += 1;
        let item = TodoItem::from_db(
            TodoItemId::new(store.last_id),
            new_item.title.clone(),
            new_item.is_complete,
        );
        store.items.insert(*item.id(), item.clone());
        Ok(item)
    }

    async fn update(&self, item: &TodoItem) -> Result<Option<TodoItem>, InfraError> {
        let mut store = self.store.lock().unwrap();
        match store.items.get_mut(item.id()) {
            Some(stored) => {
                *stored = item.clone();
                Ok(Some(item.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &TodoItemId) -> Result<Option<TodoItem>, InfraError> {
        Ok(self.store.lock().unwrap().items.remove(id))
    }
}
