//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod gateway_factory;
mod markdown_renderer;
mod report_runner;
mod reporter;
mod settings_source;

pub use gateway_factory::GitHubGatewayFactory;
pub use markdown_renderer::MarkdownRendererAdapter;
pub use report_runner::GoCoverRunner;
pub use reporter::ConsoleReporter;
pub use settings_source::EnvSettingsSource;
