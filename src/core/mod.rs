//! 애플리케이션 핵심 인프라 모듈
//!
//! 서비스 조립과 의존성 주입을 담당합니다.

pub mod context;

pub use context::AppContext;
