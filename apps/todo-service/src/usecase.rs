//! # ユースケース層
//!
//! ハンドラとリポジトリの間を仲介する。
//! リポジトリの「存在しない」結果を [`CoreError`](crate::error::CoreError) に変換する。

pub mod todo;

pub use todo::TodoUseCaseImpl;
