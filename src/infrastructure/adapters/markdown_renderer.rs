//! 마크다운 렌더링 포트 구현 어댑터.

use crate::application::ports::CommentRenderer;
use crate::domain::coverage::CoverageSummary;
use crate::infrastructure::render;

/// 마크다운 렌더링 어댑터.
pub struct MarkdownRendererAdapter;

impl CommentRenderer for MarkdownRendererAdapter {
    fn render(&self, summary: &CoverageSummary) -> String {
        render::render_coverage_markdown(summary)
    }
}
