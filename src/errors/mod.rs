//! 애플리케이션 전역 에러 모듈
//!
//! 외부 인증 백엔드에서 사용하는 통합 에러 타입과 HTTP 변환 로직을 제공합니다.

pub mod errors;

pub use errors::{AppError, AppResult};
