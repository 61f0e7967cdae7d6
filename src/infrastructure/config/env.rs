//! 환경변수 기반 설정 로더.

use std::env;

use anyhow::{Context, Result, bail};
use url::Url;

use crate::application::config::{DEFAULT_API_BASE, DEFAULT_MIN_COVERAGE, Settings};

pub const ENV_TOKEN: &str = "GITHUB_TOKEN";
pub const ENV_API_URL: &str = "GITHUB_API_URL";
pub const ENV_REPOSITORY: &str = "GITHUB_REPOSITORY";
pub const ENV_SHA: &str = "GITHUB_SHA";
pub const ENV_COVERAGE_TOTAL: &str = "COVERAGE_TOTAL";
pub const ENV_COVERAGE_DETAILS: &str = "COVERAGE_DETAILS";
pub const ENV_MIN_COVERAGE: &str = "MIN_COVERAGE";

/// 현재 프로세스 환경변수에서 설정을 읽는다.
pub fn load_settings_from_env() -> Result<Settings> {
    load_settings_with(|name| env::var(name).ok())
}

/// 조회 함수를 주입받아 설정을 구성한다.
/// 빈 문자열은 미설정으로 취급한다.
pub fn load_settings_with<F>(lookup: F) -> Result<Settings>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|v| !v.is_empty());
    let require = |name: &str| -> Result<String> {
        match get(name) {
            Some(v) => Ok(v),
            None => bail!("Missing required env var: {name}"),
        }
    };

    let token = require(ENV_TOKEN)?;
    let api_base = parse_api_base(get(ENV_API_URL).as_deref().unwrap_or(DEFAULT_API_BASE))?;
    let repository = require(ENV_REPOSITORY)?;
    let sha = require(ENV_SHA)?;
    let (owner, repo) = split_repository(&repository)?;

    Ok(Settings {
        token,
        api_base,
        owner,
        repo,
        sha,
        coverage_total: get(ENV_COVERAGE_TOTAL),
        coverage_details: get(ENV_COVERAGE_DETAILS),
        min_coverage: get(ENV_MIN_COVERAGE).unwrap_or_else(|| DEFAULT_MIN_COVERAGE.to_string()),
    })
}

fn parse_api_base(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    Url::parse(trimmed).with_context(|| format!("invalid {ENV_API_URL}: {raw}"))?;
    Ok(trimmed.to_string())
}

/// `owner/repo` 슬러그를 분리한다.
fn split_repository(slug: &str) -> Result<(String, String)> {
    match slug.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => bail!("{ENV_REPOSITORY} must be in owner/repo form, got '{slug}'"),
    }
}
