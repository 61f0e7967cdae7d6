//! 커버리지 도메인 값 객체와 `go tool cover -func` 출력 파서.

use std::sync::LazyLock;

use regex::Regex;

/// 표에 싣는 최대 행 수. 초과분은 생략 행 하나로 대체된다.
pub const MAX_TABLE_ROWS: usize = 300;

static TRAILING_PERCENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)%\s*$").expect("valid percent regex"));
static TRAILING_PERCENT_WITH_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[0-9]+(?:\.[0-9]+)?%\s*$").expect("valid percent regex"));
static FILE_AND_FUNCTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?):(?:[0-9]+:)?\s*(.+)$").expect("valid row regex"));
static TRAILING_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+[0-9]+$").expect("valid integer regex"));

/// 함수 단위 커버리지 한 줄.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageRow {
    pub file: String,
    pub function: String,
    pub percent: String,
}

/// 코멘트 본문을 만들기 위한 입력값 묶음.
#[derive(Debug, Clone)]
pub struct CoverageSummary {
    /// 전체 커버리지(%) 문자열. 없으면 테스트가 커버리지 생성 전에 실패한 것으로 본다.
    pub total: Option<String>,
    /// 표시용 최소 커버리지 기준값
    pub min_coverage: String,
    pub details: String,
}

/// detail 텍스트를 행 단위로 파싱한다.
/// 형식에 맞지 않는 줄은 조용히 버리고 원래 순서를 유지한다.
pub fn parse_coverage_rows(details: &str) -> Vec<CoverageRow> {
    details.lines().filter_map(parse_coverage_line).collect()
}

/// `pkg/foo.go:42: MyFunc 87.5%` 형태의 한 줄을 해석한다.
pub fn parse_coverage_line(raw: &str) -> Option<CoverageRow> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with("total:") || !line.contains('%') {
        return None;
    }

    let percent = format!("{}%", TRAILING_PERCENT.captures(line)?.get(1)?.as_str());
    let left = TRAILING_PERCENT_WITH_SPACE.replace(line, "");
    let left = left.trim();

    // 첫 콜론이 파일과 함수명을 가르고, 바로 뒤의 `N:` 라인 번호는 버린다.
    let (file, function) = match FILE_AND_FUNCTION.captures(left) {
        Some(caps) => (
            caps.get(1).map_or("", |m| m.as_str()).trim(),
            caps.get(2).map_or("", |m| m.as_str()).trim(),
        ),
        None => match left.split_once(':') {
            Some((file, function)) => (file.trim(), function.trim()),
            None => ("", ""),
        },
    };

    let function = TRAILING_INTEGER.replace(function, "");
    let function = function.strip_suffix(':').unwrap_or(&*function);

    if file.is_empty() || function.is_empty() {
        return None;
    }

    Some(CoverageRow {
        file: file.to_string(),
        function: function.to_string(),
        percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(file: &str, function: &str, percent: &str) -> CoverageRow {
        CoverageRow {
            file: file.to_string(),
            function: function.to_string(),
            percent: percent.to_string(),
        }
    }

    #[test]
    fn parses_go_cover_func_line() {
        assert_eq!(
            parse_coverage_line("pkg/foo.go:42: MyFunc 87.5%"),
            Some(row("pkg/foo.go", "MyFunc", "87.5%"))
        );
    }

    #[test]
    fn parses_tab_separated_columns() {
        assert_eq!(
            parse_coverage_line("github.com/acme/datagen/parser/lex.go:17:\t\tNewLexer\t\t100.0%"),
            Some(row("github.com/acme/datagen/parser/lex.go", "NewLexer", "100.0%"))
        );
    }

    #[test]
    fn integer_percent_is_kept_verbatim() {
        assert_eq!(
            parse_coverage_line("main.go:9: main 0%"),
            Some(row("main.go", "main", "0%"))
        );
    }

    #[test]
    fn line_without_line_number_splits_on_first_colon() {
        assert_eq!(
            parse_coverage_line("utils/logger.go: Init 50.0%"),
            Some(row("utils/logger.go", "Init", "50.0%"))
        );
    }

    #[test]
    fn strips_trailing_integer_from_function_name() {
        assert_eq!(
            parse_coverage_line("a.go:3: Handle 12 75.0%"),
            Some(row("a.go", "Handle", "75.0%"))
        );
    }

    #[test]
    fn drops_lines_without_percent() {
        assert_eq!(parse_coverage_line("pkg/foo.go:42: MyFunc"), None);
        assert_eq!(parse_coverage_line("ok  \tgithub.com/acme/datagen\t0.3s"), None);
    }

    #[test]
    fn drops_total_blank_and_non_trailing_percent_lines() {
        assert_eq!(parse_coverage_line("total:\t(statements)\t81.2%"), None);
        assert_eq!(parse_coverage_line("   "), None);
        assert_eq!(parse_coverage_line("coverage: 50% of statements"), None);
    }

    #[test]
    fn drops_lines_missing_file_or_function() {
        assert_eq!(parse_coverage_line("NoColonHere 40.0%"), None);
        assert_eq!(parse_coverage_line("foo.go: 40.0%"), None);
    }

    #[test]
    fn keeps_source_order() {
        let details = "\
b.go:1: Beta 10.0%
not a row
a.go:2: Alpha 20.0%

total:\t(statements)\t15.0%
";
        let rows = parse_coverage_rows(details);
        assert_eq!(
            rows,
            vec![row("b.go", "Beta", "10.0%"), row("a.go", "Alpha", "20.0%")]
        );
    }
}
