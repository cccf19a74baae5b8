//! # Facebook 액세스 토큰 검증기
//!
//! 클라이언트가 전달한 Facebook 액세스 토큰으로 Graph API `/me`를
//! 호출하여 프로필을 조회합니다. Graph가 프로필을 반환했다는 것이
//! 곧 토큰이 유효하다는 의미입니다.
//!
//! ## 요청 형식
//!
//! ```text
//! GET {graph_uri}?fields=name,first_name,last_name,email,picture,id,graphDomain
//!     &access_token=<token>
//! ```
//!
//! 토큰은 쿼리 스트링에 포함되므로 URL 인코딩하여 전달합니다.

use async_trait::async_trait;

use crate::config::FacebookGraphConfig;
use crate::domain::models::oauth::facebook_profile::FacebookProfile;
use crate::domain::models::profile::VerifiedProfile;
use crate::errors::{AppError, AppResult};
use crate::services::verify::{http_client, TokenVerifier};

/// Graph `/me` 조회에 요청하는 프로필 필드 목록
const PROFILE_FIELDS: &str = "name,first_name,last_name,email,picture,id,graphDomain";

/// Facebook Graph API 기반 토큰 검증기
#[derive(Debug, Default)]
pub struct FacebookTokenVerifier;

impl FacebookTokenVerifier {
    /// 새 검증기를 생성합니다.
    pub fn new() -> Self {
        Self
    }

    /// Graph `/me` 요청 URL을 구성합니다.
    fn build_request_url(token: &str) -> String {
        format!(
            "{}?fields={}&access_token={}",
            FacebookGraphConfig::graph_uri(),
            PROFILE_FIELDS,
            urlencoding::encode(token)
        )
    }
}

#[async_trait]
impl TokenVerifier for FacebookTokenVerifier {
    async fn verify(&self, token: &str) -> AppResult<VerifiedProfile> {
        let response = http_client()
            .get(Self::build_request_url(token))
            .send()
            .await
            .map_err(|e| {
                log::error!("Facebook Graph 호출 실패: {}", e);
                AppError::ProfileUnavailable(
                    "Facebook 아이덴티티 서비스에 연결할 수 없습니다".to_string(),
                )
            })?;

        let status = response.status();

        // Graph는 유효하지 않은 토큰에 400과 오류 본문으로 응답
        if status.is_client_error() {
            log::info!("Facebook이 토큰을 거부함: status={}", status);
            return Err(AppError::TokenRejected(
                "Facebook 토큰 검증에 실패했습니다".to_string(),
            ));
        }

        if !status.is_success() {
            log::error!("Facebook Graph 비정상 응답: status={}", status);
            return Err(AppError::ProfileUnavailable(
                "Facebook 아이덴티티 서비스가 응답하지 않습니다".to_string(),
            ));
        }

        let profile: FacebookProfile = response.json().await.map_err(|e| {
            log::error!("Facebook Graph 응답 파싱 실패: {}", e);
            AppError::ProfileUnavailable(
                "Facebook 응답을 해석할 수 없습니다".to_string(),
            )
        })?;

        log::debug!("Facebook 토큰 검증 성공: id={}", profile.id);
        Ok(profile.into_profile())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_contains_required_fields() {
        let url = FacebookTokenVerifier::build_request_url("some-token");

        assert!(url.contains("fields=name,first_name,last_name,email,picture,id,graphDomain"));
        assert!(url.contains("access_token=some-token"));
    }

    #[test]
    fn test_request_url_encodes_token() {
        // 특수 문자가 포함된 토큰은 쿼리 스트링을 깨뜨리지 않아야 함
        let url = FacebookTokenVerifier::build_request_url("a&b=c d");

        assert!(url.contains("access_token=a%26b%3Dc%20d"));
        assert!(!url.ends_with("a&b=c d"));
    }
}
