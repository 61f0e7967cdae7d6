//! 코멘트 대상(PR 또는 커밋) 결정 단계.

use crate::application::ports::CommentGateway;
use crate::domain::comment::{CommentTarget, select_pull_request};

/// 커밋에 연결된 PR이 있으면 PR을, 없거나 조회에 실패하면 커밋 자체를 대상으로 한다.
pub(super) async fn resolve_target(gateway: &dyn CommentGateway, sha: &str) -> CommentTarget {
    let pulls = match gateway.list_commit_pull_requests(sha).await {
        Ok(pulls) => pulls,
        Err(err) => {
            tracing::warn!(error = %format!("{err:#}"), "failed to list pull requests for commit");
            Vec::new()
        }
    };

    match select_pull_request(&pulls) {
        Some(number) => CommentTarget::PullRequest(number),
        None => CommentTarget::Commit(sha.to_string()),
    }
}
