//! # Google ID 토큰 검증기
//!
//! 클라이언트가 전달한 Google ID 토큰을 tokeninfo 엔드포인트에 확인하여
//! 검증된 프로필로 교환합니다.
//!
//! ## 검증 절차
//!
//! 1. `GET {tokeninfo_uri}?id_token=<token>` 호출
//! 2. 4xx 응답 → 토큰 거부 (`TokenRejected`)
//! 3. 2xx 응답의 클레임 역직렬화 — 서명/만료/발급자 검증은 Google이 수행
//! 4. `GOOGLE_CLIENT_ID`가 설정된 경우 `aud` 클레임 대조 (audience 강제)
//! 5. 클레임을 프로바이더 중립 프로필로 정규화
//!
//! 네트워크 장애, 타임아웃, 예상 밖의 응답은 모두 `ProfileUnavailable`로
//! 처리되어 요청이 거부됩니다. 검증 실패를 무시하고 진행하는 경로는
//! 존재하지 않습니다.

use async_trait::async_trait;

use crate::config::GoogleVerifyConfig;
use crate::domain::models::oauth::google_token::GoogleTokenClaims;
use crate::domain::models::profile::VerifiedProfile;
use crate::errors::{AppError, AppResult};
use crate::services::verify::{http_client, TokenVerifier};

/// Google tokeninfo 기반 토큰 검증기
#[derive(Debug, Default)]
pub struct GoogleTokenVerifier;

impl GoogleTokenVerifier {
    /// 새 검증기를 생성합니다.
    pub fn new() -> Self {
        Self
    }

    /// 설정된 audience 제약을 클레임에 적용합니다.
    fn enforce_audience(claims: &GoogleTokenClaims) -> AppResult<()> {
        if let Some(expected) = GoogleVerifyConfig::client_id() {
            if claims.aud != expected {
                log::warn!(
                    "Google 토큰 audience 불일치: aud={}, 기대값과 다름",
                    claims.aud
                );
                return Err(AppError::TokenRejected(
                    "이 애플리케이션을 위해 발급된 토큰이 아닙니다".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl TokenVerifier for GoogleTokenVerifier {
    async fn verify(&self, token: &str) -> AppResult<VerifiedProfile> {
        let response = http_client()
            .get(GoogleVerifyConfig::tokeninfo_uri())
            .query(&[("id_token", token)])
            .send()
            .await
            .map_err(|e| {
                log::error!("Google tokeninfo 호출 실패: {}", e);
                AppError::ProfileUnavailable(
                    "Google 아이덴티티 서비스에 연결할 수 없습니다".to_string(),
                )
            })?;

        let status = response.status();

        // 4xx는 토큰 자체가 거부된 것 (서명 불일치, 만료, 형식 오류 등)
        if status.is_client_error() {
            log::info!("Google이 토큰을 거부함: status={}", status);
            return Err(AppError::TokenRejected(
                "Google 토큰 검증에 실패했습니다".to_string(),
            ));
        }

        if !status.is_success() {
            log::error!("Google tokeninfo 비정상 응답: status={}", status);
            return Err(AppError::ProfileUnavailable(
                "Google 아이덴티티 서비스가 응답하지 않습니다".to_string(),
            ));
        }

        let claims: GoogleTokenClaims = response.json().await.map_err(|e| {
            log::error!("Google tokeninfo 응답 파싱 실패: {}", e);
            AppError::ProfileUnavailable(
                "Google 응답을 해석할 수 없습니다".to_string(),
            )
        })?;

        Self::enforce_audience(&claims)?;

        log::debug!("Google 토큰 검증 성공: sub={}", claims.sub);
        Ok(claims.into_profile())
    }
}
