//! 코드 호스팅 플랫폼 연동 계층.

pub mod github;

use std::time::Duration;

use anyhow::Result;

use crate::application::config::{DEFAULT_HTTP_TIMEOUT_SECS, Settings};

/// 설정으로부터 GitHub 클라이언트를 구성한다.
pub fn build_github_client(settings: &Settings) -> Result<github::GitHubClient> {
    github::GitHubClient::new(
        settings.api_base.clone(),
        settings.owner.clone(),
        settings.repo.clone(),
        settings.token.clone(),
        Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
    )
}
