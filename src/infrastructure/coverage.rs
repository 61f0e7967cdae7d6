//! 외부 커버리지 리포트 명령 실행기.

use std::process::Stdio;

use anyhow::{Context, Result, bail};
use tokio::process::Command;

/// detail 텍스트가 주어지지 않았을 때 셸로 실행하는 명령.
pub const COVERAGE_REPORT_COMMAND: &str = "go tool cover -func=coverage.out";

/// 로그인 셸(`bash -lc`)로 명령을 실행하고 stdout을 그대로 반환한다.
/// 실행 실패나 0이 아닌 종료 코드는 오류로 돌려준다.
pub async fn run_shell_command(command: &str) -> Result<String> {
    let output = Command::new("bash")
        .arg("-lc")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .with_context(|| format!("failed to spawn shell for '{command}'"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "'{}' failed ({}): {}",
            command,
            output.status,
            if stderr.trim().is_empty() {
                "no stderr output"
            } else {
                stderr.trim()
            }
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn captures_stdout_verbatim() {
        let out = run_shell_command("printf 'a.go:1:\\tA\\t10.0%%\\n'").await.unwrap();
        assert_eq!(out, "a.go:1:\tA\t10.0%\n");
    }

    #[tokio::test]
    async fn non_zero_exit_is_an_error() {
        let err = run_shell_command("echo boom >&2; exit 3").await.unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("boom"), "{msg}");
    }
}
