//! 프로바이더별 응답 모델 모듈
//!
//! 각 프로바이더의 검증/프로필 엔드포인트가 반환하는 JSON 형태를
//! 그대로 역직렬화하는 구조체들입니다. 서비스 계층은 이 구조체들을
//! `VerifiedProfile`로 정규화한 뒤에만 사용합니다.

pub mod facebook_profile;
pub mod google_token;

pub use facebook_profile::FacebookProfile;
pub use google_token::GoogleTokenClaims;
