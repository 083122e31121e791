//! # Todo 項目
//!
//! タイトルと完了フラグを持つ単一のエンティティ。
//!
//! ## ライフサイクル
//!
//! - 作成: ID はストレージ側で採番される（[`NewTodoItem`] には ID がない）
//! - 更新: タイトルと完了フラグを丸ごと上書きする（部分更新はしない）
//! - 削除: 物理削除。論理削除・バージョン管理・監査証跡は持たない
//!
//! ## 使用例
//!
//! ```rust
//! use todo_domain::todo::{NewTodoItem, TodoItem, TodoItemId};
//!
//! let item = TodoItem::from_db(TodoItemId::new(1), "Buy milk".to_string(), false);
//! let updated = item.overwrite(NewTodoItem::new("Buy milk", true));
//!
//! assert_eq!(updated.id(), &TodoItemId::new(1));
//! assert!(updated.is_complete());
//! ```

use serde::{Deserialize, Serialize};

/// Todo 項目の一意識別子
///
/// ストレージが採番する整数 ID。採番後は変更されず、再利用もされない。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("{_0}")]
#[serde(transparent)]
pub struct TodoItemId(i32);

impl TodoItemId {
    /// 既存の整数値から ID を作成する
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    /// 内部の整数値を取得する
    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

/// 永続化前の Todo 項目
///
/// 作成リクエストと更新リクエストの両方で使用する。
/// タイトルには長さ・空文字の制約を設けない。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewTodoItem {
    pub title:       String,
    pub is_complete: bool,
}

impl NewTodoItem {
    pub fn new(title: impl Into<String>, is_complete: bool) -> Self {
        Self {
            title: title.into(),
            is_complete,
        }
    }
}

/// Todo 項目エンティティ
///
/// # 不変条件
///
/// - `id` は生成後に変更されない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    id:          TodoItemId,
    title:       String,
    is_complete: bool,
}

impl TodoItem {
    /// データベースから Todo 項目を復元する
    pub fn from_db(id: TodoItemId, title: String, is_complete: bool) -> Self {
        Self {
            id,
            title,
            is_complete,
        }
    }

    /// タイトルと完了フラグを上書きした新インスタンスを返す
    ///
    /// 値のマージは行わない。ID のみ引き継ぐ。
    pub fn overwrite(self, contents: NewTodoItem) -> Self {
        Self {
            id:          self.id,
            title:       contents.title,
            is_complete: contents.is_complete,
        }
    }

    pub fn id(&self) -> &TodoItemId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn buy_milk() -> TodoItem {
        TodoItem::from_db(TodoItemId::new(1), "Buy milk".to_string(), false)
    }

    #[test]
    fn test_from_dbで全フィールドが復元される() {
        let item = buy_milk();

        assert_eq!(item.id(), &TodoItemId::new(1));
        assert_eq!(item.title(), "Buy milk");
        assert!(!item.is_complete());
    }

    #[rstest]
    #[case("Buy milk", true)]
    #[case("Walk the dog", false)]
    #[case("", true)]
    fn test_overwriteでタイトルと完了フラグが丸ごと置き換わる(
        #[case] title: &str,
        #[case] is_complete: bool,
    ) {
        let sut = buy_milk();

        let updated = sut.overwrite(NewTodoItem::new(title, is_complete));

        assert_eq!(updated.id(), &TodoItemId::new(1));
        assert_eq!(updated.title(), title);
        assert_eq!(updated.is_complete(), is_complete);
    }

    #[test]
    fn test_new_todo_itemのデフォルトは未完了で空タイトル() {
        let new_item = NewTodoItem::default();

        assert_eq!(new_item.title, "");
        assert!(!new_item.is_complete);
    }

    #[test]
    fn test_todo_item_idは整数としてシリアライズされる() {
        let json = serde_json::to_value(TodoItemId::new(5)).unwrap();

        assert_eq!(json, serde_json::json!(5));
        assert_eq!(TodoItemId::new(5).to_string(), "5");
    }
}
