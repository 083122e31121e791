//! # ドメイン層エラー定義
//!
//! ドメイン固有の例外状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `NotFound` | 404 Not Found | エンティティが存在しない |

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// エンティティが見つからない
    ///
    /// 指定された ID のエンティティがデータベースに存在しない場合に使用する。
    #[error("{entity_type} が見つかりません: {id}")]
    NotFound {
        /// エンティティの種類（"TodoItem" など）
        entity_type: &'static str,
        /// 検索に使用した識別子
        id:          String,
    },
}

impl DomainError {
    /// Todo 項目が見つからないエラーを生成する
    pub fn todo_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "TodoItem",
            id:          id.to_string(),
        }
    }
}
