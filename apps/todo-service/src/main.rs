//! # Todo Service サーバー
//!
//! Todo 項目の CRUD API を提供する HTTP サーバー。
//!
//! ## 構成
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │    Client    │────▶│ Todo Service │────▶│  PostgreSQL  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! 依存コンポーネントは起動時に明示的に組み立てる:
//! `PgPool` → `PostgresTodoRepository` → `TodoUseCaseImpl` → `TodoState`
//!
//! ## 環境変数
//!
//! 詳細は [`config`](todo_service::config) を参照。
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（/openapi.json を公開）
//! APP_ENV=development DATABASE_URL=postgres://... cargo run -p todo-service
//!
//! # 本番環境
//! TODO_PORT=8080 DATABASE_URL=postgres://... LOG_FORMAT=json cargo run -p todo-service --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use todo_infra::{
    db,
    repository::{PostgresTodoRepository, TodoRepository},
};
use todo_service::{
    app_builder::build_app,
    config::TodoConfig,
    handler::{ReadinessState, TodoState},
    usecase::TodoUseCaseImpl,
};
use todo_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// Todo Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    init_tracing(TracingConfig::from_env("todo-service"));
    let _tracing_guard = tracing::info_span!("app", service = "todo-service").entered();

    // 設定読み込み
    let config = TodoConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "Todo Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // データベース接続プールを作成
    let pool = db::create_pool(&config.database_url)
        .await
        .context("データベース接続に失敗しました")?;
    tracing::info!("データベースに接続しました");

    // マイグレーション実行
    db::run_migrations(&pool)
        .await
        .context("マイグレーションの実行に失敗しました")?;
    tracing::info!("マイグレーションを適用しました");

    // Readiness Check 用 State（pool が move される前に clone）
    let readiness_state = Arc::new(ReadinessState { pool: pool.clone() });

    // 依存コンポーネントを初期化
    let todo_repository: Arc<dyn TodoRepository> = Arc::new(PostgresTodoRepository::new(pool));
    let todo_state = Arc::new(TodoState {
        usecase: TodoUseCaseImpl::new(todo_repository),
    });

    let expose_api_docs = config.app_env.is_development();
    if expose_api_docs {
        tracing::info!("開発環境のため /swagger-ui と /openapi.json を公開します");
    }
    let app = build_app(todo_state, readiness_state, expose_api_docs);

    // サーバー起動
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Todo Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
