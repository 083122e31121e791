//! # Todo Service 設定
//!
//! 環境変数から Todo Service サーバーの設定を読み込む。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `TODO_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `TODO_PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `APP_ENV` | No | `development` で API ドキュメントを公開（デフォルト: `production`） |

use std::env;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 必須の環境変数が設定されていない
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    /// 環境変数の値が不正
    #[error("{name} の値が不正です: {value}")]
    Invalid {
        name:  &'static str,
        value: String,
    },
}

/// 実行環境
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnv {
    /// 開発環境（API ドキュメントを公開する）
    Development,
    #[default]
    Production,
}

impl AppEnv {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(ConfigError::Invalid {
                name:  "APP_ENV",
                value: other.to_string(),
            }),
        }
    }

    pub fn is_development(self) -> bool {
        self == Self::Development
    }
}

/// Todo Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    /// バインドアドレス
    pub host:         String,
    /// ポート番号
    pub port:         u16,
    /// データベース接続 URL
    pub database_url: String,
    /// 実行環境
    pub app_env:      AppEnv,
}

impl TodoConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("TODO_PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "TODO_PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let app_env = match lookup("APP_ENV") {
            Some(value) => AppEnv::parse(&value)?,
            None => AppEnv::default(),
        };

        Ok(Self {
            host: lookup("TODO_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url: lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            app_env,
        })
    }
}
