//! 커버리지 요약 코멘트 게시의 전체 오케스트레이션 유스케이스.

mod details;
mod publish;
mod target;

use anyhow::{Context, Result};

use crate::application::ports::{
    CommentRenderer, CoverageReportRunner, GatewayFactory, Reporter, SettingsSource,
};
use crate::domain::comment::{RunOptions, UpsertOutcome};
use crate::domain::coverage::CoverageSummary;

pub use details::DETAILS_UNAVAILABLE;

use details::resolve_details;
use publish::upsert_comment;
use target::resolve_target;

/// 설정 로딩 → detail 확보 → 본문 렌더링 → 코멘트 upsert 순으로 실행한다.
pub struct PostCoverageUseCase<'a> {
    pub settings_source: &'a dyn SettingsSource,
    pub report_runner: &'a dyn CoverageReportRunner,
    pub renderer: &'a dyn CommentRenderer,
    pub gateway_factory: &'a dyn GatewayFactory,
    pub reporter: &'a dyn Reporter,
}

impl<'a> PostCoverageUseCase<'a> {
    /// 실행 진입점.
    /// dry-run이면 본문만 출력하고 `None`을 반환하며 네트워크 호출은 하지 않는다.
    pub async fn execute(&self, options: RunOptions) -> Result<Option<UpsertOutcome>> {
        // 필수 설정이 없으면 네트워크 호출 전에 중단한다.
        let settings = self
            .settings_source
            .load()
            .context("failed to load settings")?;

        self.reporter.section("Session");
        self.reporter
            .kv("Repository", &format!("{}/{}", settings.owner, settings.repo));
        self.reporter.kv("Commit", &settings.sha);
        self.reporter.kv(
            "Mode",
            if options.dry_run {
                "dry-run"
            } else {
                "post-comment"
            },
        );

        let details =
            resolve_details(settings.coverage_details.as_deref(), self.report_runner).await;
        let body = self.renderer.render(&CoverageSummary {
            total: settings.coverage_total.clone(),
            min_coverage: settings.min_coverage.clone(),
            details,
        });

        if options.dry_run {
            self.reporter.section("Dry Run: Coverage Comment");
            self.reporter.raw(&body);
            return Ok(None);
        }

        let gateway = self.gateway_factory.build(&settings)?;

        self.reporter.section("Resolve Target");
        let target = resolve_target(gateway.as_ref(), &settings.sha).await;
        self.reporter.kv("Target", &target.to_string());

        self.reporter.section("Post Comment");
        let outcome = upsert_comment(self, gateway.as_ref(), &target, &body).await?;
        Ok(Some(outcome))
    }
}
