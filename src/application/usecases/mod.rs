//! 유스케이스 모음.

pub mod post_coverage;
