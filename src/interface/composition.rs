//! 애플리케이션 조립(composition root) 모듈.

use crate::application::usecases::post_coverage::PostCoverageUseCase;
use crate::infrastructure::adapters::{
    ConsoleReporter, EnvSettingsSource, GitHubGatewayFactory, GoCoverRunner,
    MarkdownRendererAdapter,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    settings_source: EnvSettingsSource,
    report_runner: GoCoverRunner,
    renderer: MarkdownRendererAdapter,
    gateway_factory: GitHubGatewayFactory,
    reporter: ConsoleReporter,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self {
            settings_source: EnvSettingsSource,
            report_runner: GoCoverRunner,
            renderer: MarkdownRendererAdapter,
            gateway_factory: GitHubGatewayFactory,
            reporter: ConsoleReporter,
        }
    }
}

impl AppComposition {
    /// 커버리지 코멘트 게시 유스케이스를 생성한다.
    pub fn post_coverage_usecase(&self) -> PostCoverageUseCase<'_> {
        PostCoverageUseCase {
            settings_source: &self.settings_source,
            report_runner: &self.report_runner,
            renderer: &self.renderer,
            gateway_factory: &self.gateway_factory,
            reporter: &self.reporter,
        }
    }
}
