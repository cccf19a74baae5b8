//! # Domain Models Module
//!
//! 외부 시스템 통합 모델과 값 객체를 정의하는 모듈입니다.
//! entities와 달리 저장되지 않으며, 프로바이더 응답을 역직렬화하고
//! 프로바이더 중립적인 형태로 정규화하는 역할을 담당합니다.
//!
//! ## 모듈 구성
//!
//! - [`oauth`] - 프로바이더별 응답 모델 (Google tokeninfo 클레임,
//!   Facebook Graph 프로필)
//! - [`profile`] - 프로바이더 중립적인 검증된 프로필 (`VerifiedProfile`)
//!
//! ## 데이터 흐름
//!
//! ```text
//! 프로바이더 JSON 응답
//!        │  serde 역직렬화
//!        ▼
//! GoogleTokenClaims / FacebookProfile
//!        │  into_profile() 정규화
//!        ▼
//! VerifiedProfile  ──►  Identity Linker
//! ```

pub mod oauth;
pub mod profile;
