//! 코멘트 upsert 대상/정책.

use std::fmt;

/// 이 도구가 남긴 코멘트를 다시 찾기 위한 숨김 마커.
pub const COMMENT_MARKER: &str = "<!-- coverage-comment -->";

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// 본문만 출력하고 게시하지 않음
    pub dry_run: bool,
}

/// 커밋에 연결된 PR 목록의 한 항목. 응답 JSON이 느슨하므로 필드는 모두 선택적이다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestSummary {
    pub number: Option<u64>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteComment {
    pub id: u64,
    pub body: String,
}

/// 코멘트를 남길 위치.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentTarget {
    PullRequest(u64),
    Commit(String),
}

impl fmt::Display for CommentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommentTarget::PullRequest(number) => write!(f, "pull request #{number}"),
            CommentTarget::Commit(sha) => write!(f, "commit {sha}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    Updated {
        target: CommentTarget,
        comment_id: u64,
    },
    Created {
        target: CommentTarget,
    },
}

/// 열린 PR을 우선하고, 없으면 첫 번째 PR의 번호를 고른다.
pub fn select_pull_request(pulls: &[PullRequestSummary]) -> Option<u64> {
    pulls
        .iter()
        .find(|p| p.state.as_deref() == Some("open"))
        .or_else(|| pulls.first())
        .and_then(|p| p.number)
        .filter(|n| *n > 0)
}

pub fn find_comment_with_marker<'a>(
    comments: &'a [RemoteComment],
    marker: &str,
) -> Option<&'a RemoteComment> {
    comments.iter().find(|c| c.body.contains(marker))
}
