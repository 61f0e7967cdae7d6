//! 커버리지 코멘트용 Markdown 렌더링 모듈.

use crate::domain::comment::COMMENT_MARKER;
use crate::domain::coverage::{
    CoverageRow, CoverageSummary, MAX_TABLE_ROWS, parse_coverage_rows,
};

const ELLIPSIS_ROW: &str = "| … | … | … |";

/// 마커, 요약 헤더, 접힌 detail 섹션으로 이루어진 코멘트 본문을 생성한다.
pub fn render_coverage_markdown(summary: &CoverageSummary) -> String {
    let mut out = render_header(summary);

    let rows = parse_coverage_rows(&summary.details);
    let section = if rows.is_empty() {
        // 파싱 가능한 행이 없으면 원문을 그대로 보여준다.
        format!("```\n{}\n```", summary.details)
    } else {
        render_table(&rows)
    };

    out.push_str("\n\n<details>\n<summary>Coverage details</summary>\n\n");
    out.push_str(&section);
    out.push_str("\n</details>");
    out
}

fn render_header(summary: &CoverageSummary) -> String {
    match summary.total.as_deref() {
        Some(total) => format!(
            "{COMMENT_MARKER}\n**Coverage**: {total}% (min: {}%)",
            summary.min_coverage
        ),
        None => format!(
            "{COMMENT_MARKER}\n**Coverage**: unavailable (tests failed before coverage generation)"
        ),
    }
}

/// 최대 `MAX_TABLE_ROWS`행까지 표로 만들고, 잘린 경우 생략 행을 덧붙인다.
fn render_table(rows: &[CoverageRow]) -> String {
    let mut lines = vec![
        "| File | Function | Coverage |".to_string(),
        "| --- | --- | ---: |".to_string(),
    ];
    lines.extend(
        rows.iter()
            .take(MAX_TABLE_ROWS)
            .map(|r| format!("| {} | {} | {} |", r.file, r.function, r.percent)),
    );
    if rows.len() > MAX_TABLE_ROWS {
        lines.push(ELLIPSIS_ROW.to_string());
    }
    lines.join("\n")
}
