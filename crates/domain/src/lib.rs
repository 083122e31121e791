//! # Todo ドメイン層
//!
//! Todo サービスのドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! todo-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、外部サービス）に一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`todo`] - Todo 項目エンティティ
//!
//! ## 使用例
//!
//! ```rust
//! use todo_domain::{
//!     DomainError,
//!     todo::{TodoItem, TodoItemId},
//! };
//!
//! let item = TodoItem::from_db(TodoItemId::new(1), "Buy milk".to_string(), false);
//! assert_eq!(item.title(), "Buy milk");
//!
//! let error = DomainError::NotFound {
//!     entity_type: "TodoItem",
//!     id:          item.id().to_string(),
//! };
//! assert_eq!(error.to_string(), "TodoItem が見つかりません: 1");
//! ```

pub mod error;
pub mod todo;

pub use error::DomainError;
