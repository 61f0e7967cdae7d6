//! 커버리지 리포트 명령 포트 구현 어댑터.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::ports::CoverageReportRunner;
use crate::infrastructure::coverage::{COVERAGE_REPORT_COMMAND, run_shell_command};

/// `go tool cover -func`를 셸로 실행하는 어댑터.
pub struct GoCoverRunner;

#[async_trait]
impl CoverageReportRunner for GoCoverRunner {
    async fn run(&self) -> Result<String> {
        run_shell_command(COVERAGE_REPORT_COMMAND).await
    }
}
