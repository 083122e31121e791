//! # リポジトリ実装
//!
//! ドメインエンティティの永続化を担当する。
//!
//! ## 設計方針
//!
//! - **トレイト定義**: ユースケース層はトレイトにのみ依存する
//! - **PostgreSQL 実装**: 本番用の具体実装
//! - **テスト容易性**: `test-utils` feature でインメモリ実装を差し替え可能

pub mod todo_repository;

pub use todo_repository::{PostgresTodoRepository, TodoRepository};
