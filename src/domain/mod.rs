//! Domain layer
//! 커버리지 파싱/코멘트 upsert 규칙을 외부 의존성 없이 표현한다.

pub mod comment;
pub mod coverage;
