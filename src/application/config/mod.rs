//! 애플리케이션이 사용하는 실행 설정 스키마(순수 데이터).
//!
//! 주의: 환경변수/프로세스 접근은 `infrastructure`에서만 수행한다.

use std::fmt;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_MIN_COVERAGE: &str = "N/A";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// 프로세스 시작 시 한 번 로딩되고 이후 변경되지 않는 설정.
#[derive(Clone)]
pub struct Settings {
    /// Bearer 토큰(민감정보)
    pub token: String,
    /// 끝의 `/`가 제거된 API base URL
    pub api_base: String,
    pub owner: String,
    pub repo: String,
    /// 코멘트 대상 커밋
    pub sha: String,
    pub coverage_total: Option<String>,
    /// 미리 렌더링된 detail 텍스트(없으면 외부 명령으로 생성)
    pub coverage_details: Option<String>,
    /// 표시 전용 최소 커버리지 기준값
    pub min_coverage: String,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("token", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("sha", &self.sha)
            .field("coverage_total", &self.coverage_total)
            .field(
                "coverage_details",
                &self.coverage_details.as_ref().map(|d| d.len()),
            )
            .field("min_coverage", &self.min_coverage)
            .finish()
    }
}
