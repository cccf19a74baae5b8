//! # 프로바이더 토큰 검증 모듈
//!
//! 클라이언트가 전달한 불투명 토큰을 프로바이더의 아이덴티티 서비스에
//! 확인하여 검증된 프로필로 교환합니다.
//!
//! ## 계약
//!
//! 모든 검증기는 [`TokenVerifier`] trait을 구현하며, 두 가지 실패를
//! 명확히 구분합니다:
//!
//! - `AppError::TokenRejected` — 프로바이더가 토큰 자체를 거부함
//! - `AppError::ProfileUnavailable` — 프로바이더에 도달하지 못했거나
//!   응답을 해석할 수 없음 (네트워크 오류, 타임아웃, 파싱 실패)
//!
//! 어느 쪽이든 엔드포인트 계층은 요청을 거부해야 합니다. 원본 구현은
//! Google 경로에서 검증 실패를 로그만 남기고 계속 진행했는데, 이는
//! 재현하지 않는 결함입니다.
//!
//! ## HTTP 클라이언트
//!
//! 프로바이더 호출은 프로세스 전역에서 하나의 `reqwest::Client`를
//! 공유합니다. 커넥션 풀 재사용을 위해 `once_cell::Lazy`로 1회만
//! 생성하며, 설정된 타임아웃을 적용합니다.

pub mod facebook_verifier;
pub mod google_verifier;

use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::config::ProviderHttpConfig;
use crate::domain::models::profile::VerifiedProfile;
use crate::errors::AppResult;

pub use facebook_verifier::FacebookTokenVerifier;
pub use google_verifier::GoogleTokenVerifier;

/// 프로바이더 토큰 검증기 공통 인터페이스
///
/// 엔드포인트 라우트가 프로바이더를 결정하므로 검증기는 토큰만 받습니다.
/// 핸들러 테스트에서는 이 trait의 스텁 구현을 주입합니다.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// 토큰을 검증하고 프로바이더 중립적인 프로필을 반환합니다.
    async fn verify(&self, token: &str) -> AppResult<VerifiedProfile>;
}

/// 프로바이더 호출용 공유 HTTP 클라이언트
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(ProviderHttpConfig::timeout_secs()))
        .build()
        .expect("프로바이더 HTTP 클라이언트 생성 실패")
});

/// 공유 HTTP 클라이언트 핸들을 반환합니다.
pub(crate) fn http_client() -> &'static reqwest::Client {
    &HTTP_CLIENT
}
