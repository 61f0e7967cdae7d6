//! 마커 기반 코멘트 upsert 단계.

use anyhow::Result;

use crate::application::ports::CommentGateway;
use crate::application::usecases::post_coverage::PostCoverageUseCase;
use crate::domain::comment::{
    COMMENT_MARKER, CommentTarget, UpsertOutcome, find_comment_with_marker,
};

/// 대상에 마커 코멘트가 있으면 수정하고, 없으면 새로 만든다.
/// 조회 실패는 "없음"으로 취급하고, 마지막 생성/수정 실패만 호출자에게 전파한다.
pub(super) async fn upsert_comment(
    use_case: &PostCoverageUseCase<'_>,
    gateway: &dyn CommentGateway,
    target: &CommentTarget,
    body: &str,
) -> Result<UpsertOutcome> {
    match target {
        CommentTarget::PullRequest(number) => {
            upsert_pull_request_comment(use_case, gateway, *number, body).await
        }
        CommentTarget::Commit(sha) => upsert_commit_comment(use_case, gateway, sha, body).await,
    }
}

async fn upsert_pull_request_comment(
    use_case: &PostCoverageUseCase<'_>,
    gateway: &dyn CommentGateway,
    number: u64,
    body: &str,
) -> Result<UpsertOutcome> {
    let target = CommentTarget::PullRequest(number);
    let comments = match gateway.list_pull_request_comments(number).await {
        Ok(comments) => comments,
        Err(err) => {
            tracing::warn!(error = %format!("{err:#}"), number, "failed to list pull request comments");
            Vec::new()
        }
    };

    if let Some(existing) = find_comment_with_marker(&comments, COMMENT_MARKER) {
        let comment_id = existing.id;
        use_case
            .reporter
            .status("GitHub", &format!("updating comment {comment_id} on {target}"));
        gateway.update_pull_request_comment(comment_id, body).await?;
        return Ok(UpsertOutcome::Updated { target, comment_id });
    }

    use_case
        .reporter
        .status("GitHub", &format!("creating comment on {target}"));
    gateway.create_pull_request_comment(number, body).await?;
    Ok(UpsertOutcome::Created { target })
}

async fn upsert_commit_comment(
    use_case: &PostCoverageUseCase<'_>,
    gateway: &dyn CommentGateway,
    sha: &str,
    body: &str,
) -> Result<UpsertOutcome> {
    let target = CommentTarget::Commit(sha.to_string());

    // 커밋 코멘트는 조회나 수정이 실패해도 새 코멘트 생성으로 넘어간다.
    match gateway.list_commit_comments(sha).await {
        Ok(comments) => {
            if let Some(existing) = find_comment_with_marker(&comments, COMMENT_MARKER) {
                let comment_id = existing.id;
                use_case
                    .reporter
                    .status("GitHub", &format!("updating comment {comment_id} on {target}"));
                match gateway.update_commit_comment(comment_id, body).await {
                    Ok(()) => return Ok(UpsertOutcome::Updated { target, comment_id }),
                    Err(err) => {
                        tracing::warn!(error = %format!("{err:#}"), comment_id, "failed to update commit comment");
                    }
                }
            }
        }
        Err(err) => {
            tracing::warn!(error = %format!("{err:#}"), sha, "failed to list commit comments");
        }
    }

    use_case
        .reporter
        .status("GitHub", &format!("creating comment on {target}"));
    gateway.create_commit_comment(sha, body).await?;
    Ok(UpsertOutcome::Created { target })
}
