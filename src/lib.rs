//! coverage-comment library root.
//! Clean Architecture + DDD 계층을 외부에 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use domain::comment::{RunOptions, UpsertOutcome};
use interface::composition::AppComposition;

/// 라이브러리 직접 호출용 실행 함수.
pub async fn run(options: RunOptions) -> Result<Option<UpsertOutcome>> {
    let composition = AppComposition::default();
    composition.post_coverage_usecase().execute(options).await
}
