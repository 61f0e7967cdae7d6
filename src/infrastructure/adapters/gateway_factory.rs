//! 코멘트 게이트웨이 포트 구현 어댑터.

use anyhow::Result;

use crate::application::config::Settings;
use crate::application::ports::{CommentGateway, GatewayFactory};
use crate::infrastructure::vcs;

/// GitHub 게이트웨이 팩토리 어댑터.
pub struct GitHubGatewayFactory;

impl GatewayFactory for GitHubGatewayFactory {
    fn build(&self, settings: &Settings) -> Result<Box<dyn CommentGateway>> {
        Ok(Box::new(vcs::build_github_client(settings)?))
    }
}
