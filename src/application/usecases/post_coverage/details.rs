//! 커버리지 detail 텍스트 확보 단계.

use crate::application::ports::CoverageReportRunner;

/// 외부 명령 실행에 실패했을 때 본문에 대신 싣는 문구.
pub const DETAILS_UNAVAILABLE: &str =
    "Coverage details unavailable (could not run \"go tool cover -func\").";

/// 미리 주어진 detail이 있으면 그대로 쓰고, 없으면 리포트 명령을 실행한다.
/// 명령 실패는 실행 전체를 멈추지 않고 안내 문구로 대체한다.
pub(super) async fn resolve_details(
    supplied: Option<&str>,
    runner: &dyn CoverageReportRunner,
) -> String {
    if let Some(details) = supplied.filter(|d| !d.is_empty()) {
        return details.to_string();
    }

    match runner.run().await {
        Ok(output) => output,
        Err(err) => {
            tracing::warn!(error = %format!("{err:#}"), "coverage report command failed");
            DETAILS_UNAVAILABLE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use anyhow::{Result, bail};
    use async_trait::async_trait;

    use super::*;

    struct FakeRunner {
        output: Option<&'static str>,
        calls: AtomicUsize,
    }

    impl FakeRunner {
        fn new(output: Option<&'static str>) -> Self {
            Self {
                output,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CoverageReportRunner for FakeRunner {
        async fn run(&self) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.output {
                Some(out) => Ok(out.to_string()),
                None => bail!("bash: go: command not found"),
            }
        }
    }

    #[tokio::test]
    async fn supplied_details_skip_the_command() {
        let runner = FakeRunner::new(Some("unused"));
        let details = resolve_details(Some("a.go:1: A 10.0%"), &runner).await;
        assert_eq!(details, "a.go:1: A 10.0%");
        assert_eq!(runner.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn command_output_is_returned_unchanged() {
        let runner = FakeRunner::new(Some("a.go:1: A 10.0%\n"));
        let details = resolve_details(None, &runner).await;
        assert_eq!(details, "a.go:1: A 10.0%\n");
        assert_eq!(runner.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn command_failure_yields_placeholder() {
        let runner = FakeRunner::new(None);
        assert_eq!(resolve_details(None, &runner).await, DETAILS_UNAVAILABLE);
    }
}
