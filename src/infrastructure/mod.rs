//! Infrastructure layer
//! 외부 시스템(환경변수/셸 명령/GitHub API)과 직접 통신하는 구현체 집합.

pub mod adapters;
pub mod config;
pub mod coverage;
pub mod render;
pub mod vcs;
