//! # OpenAPI YAML 生成ツール
//!
//! Todo Service の Rust 型から OpenAPI 仕様を YAML 形式で標準出力に出力する。
//!
//! ## 使い方
//!
//! ```bash
//! cargo run --bin generate-openapi -p todo-service > openapi/openapi.yaml
//! ```

use anyhow::Context as _;
use todo_service::openapi::ApiDoc;
use utoipa::OpenApi;

fn main() -> anyhow::Result<()> {
    let yaml = ApiDoc::openapi()
        .to_yaml()
        .context("OpenAPI YAML 生成に失敗しました")?;
    print!("{yaml}");
    Ok(())
}
