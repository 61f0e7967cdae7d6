//! 실행 설정 로딩 모듈.
//! 모든 설정은 프로세스 시작 시 환경변수에서 한 번만 읽는다.

mod env;

pub use env::{
    ENV_API_URL, ENV_COVERAGE_DETAILS, ENV_COVERAGE_TOTAL, ENV_MIN_COVERAGE, ENV_REPOSITORY,
    ENV_SHA, ENV_TOKEN, load_settings_from_env, load_settings_with,
};
