//! # Todo Service ライブラリ
//!
//! ハンドラ・ユースケース・ルーター構築を公開する。
//! 統合テストと OpenAPI 生成ツールから利用する。
//!
//! ## モジュール構成
//!
//! - `app_builder`: ルーターとミドルウェアの組み立て
//! - `config`: 環境変数からの設定読み込み
//! - `handler`: HTTP ハンドラ
//! - `openapi`: OpenAPI 仕様定義
//! - `usecase`: ユースケース

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod openapi;
pub mod usecase;
