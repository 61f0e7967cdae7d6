//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::Settings;
use crate::domain::comment::{PullRequestSummary, RemoteComment};
use crate::domain::coverage::CoverageSummary;

/// 실행 설정을 로딩하는 포트.
pub trait SettingsSource: Send + Sync {
    fn load(&self) -> Result<Settings>;
}

/// 외부 커버리지 리포트 명령 실행 포트.
#[async_trait]
pub trait CoverageReportRunner: Send + Sync {
    /// 명령의 표준 출력을 그대로 반환한다.
    async fn run(&self) -> Result<String>;
}

/// 코멘트 마크다운 렌더링 포트.
pub trait CommentRenderer: Send + Sync {
    fn render(&self, summary: &CoverageSummary) -> String;
}

/// 코멘트 호스팅 플랫폼(GitHub) 연동 포트.
#[async_trait]
pub trait CommentGateway: Send + Sync {
    async fn list_commit_pull_requests(&self, sha: &str) -> Result<Vec<PullRequestSummary>>;
    async fn list_pull_request_comments(&self, number: u64) -> Result<Vec<RemoteComment>>;
    async fn create_pull_request_comment(&self, number: u64, body: &str) -> Result<()>;
    async fn update_pull_request_comment(&self, comment_id: u64, body: &str) -> Result<()>;
    async fn list_commit_comments(&self, sha: &str) -> Result<Vec<RemoteComment>>;
    async fn create_commit_comment(&self, sha: &str, body: &str) -> Result<()>;
    async fn update_commit_comment(&self, comment_id: u64, body: &str) -> Result<()>;
}

/// 설정에 맞는 게이트웨이를 생성하는 팩토리 포트.
pub trait GatewayFactory: Send + Sync {
    fn build(&self, settings: &Settings) -> Result<Box<dyn CommentGateway>>;
}

/// 콘솔/로그 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn section(&self, name: &str);
    fn kv(&self, key: &str, value: &str);
    fn status(&self, scope: &str, message: &str);
    fn raw(&self, line: &str);
}
