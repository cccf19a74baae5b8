//! # Authentication Configuration Module
//!
//! 외부 아이덴티티 프로바이더(Google, Facebook)와의 통신에 필요한
//! 엔드포인트, 타임아웃, 클라이언트 ID 설정을 관리하는 모듈입니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # Google 토큰 검증 (선택 - 기본값 제공)
//! export GOOGLE_TOKENINFO_URI="https://oauth2.googleapis.com/tokeninfo"
//! # 설정 시 토큰의 aud 클레임을 이 값과 대조합니다 (audience 강제)
//! export GOOGLE_CLIENT_ID="123456789-abcdef.apps.googleusercontent.com"
//!
//! # Facebook Graph API (선택 - 기본값 제공)
//! export FACEBOOK_GRAPH_URI="https://graph.facebook.com/v2.12/me"
//!
//! # 프로바이더 호출 타임아웃 (초, 기본값 10)
//! export PROVIDER_TIMEOUT_SECS="10"
//! ```

use std::env;

/// Google 토큰 검증 설정을 관리하는 구조체
///
/// Google의 tokeninfo 엔드포인트는 ID 토큰의 서명, 만료, 발급자를
/// Google 측에서 검증한 뒤 클레임을 반환합니다. 검증에 실패한 토큰은
/// 4xx 응답으로 거부됩니다.
pub struct GoogleVerifyConfig;

impl GoogleVerifyConfig {
    /// Google tokeninfo 엔드포인트 URI를 반환합니다.
    ///
    /// 일반적으로 변경할 필요가 없으므로 기본값을 제공합니다.
    /// 테스트에서 로컬 목 서버로 교체할 때 환경 변수를 사용합니다.
    ///
    /// # 기본값
    ///
    /// `https://oauth2.googleapis.com/tokeninfo`
    pub fn tokeninfo_uri() -> String {
        env::var("GOOGLE_TOKENINFO_URI")
            .unwrap_or_else(|_| "https://oauth2.googleapis.com/tokeninfo".to_string())
    }

    /// Google OAuth Client ID를 반환합니다 (선택값).
    ///
    /// 설정된 경우 검증된 토큰의 `aud` 클레임이 이 값과 일치해야 합니다.
    /// 다른 애플리케이션을 위해 발급된 토큰으로 로그인하는 것을 막는
    /// audience 강제 검사입니다. 설정되지 않으면 검사를 생략합니다.
    pub fn client_id() -> Option<String> {
        env::var("GOOGLE_CLIENT_ID").ok().filter(|v| !v.is_empty())
    }
}

/// Facebook Graph API 설정을 관리하는 구조체
///
/// 클라이언트가 전달한 액세스 토큰을 Graph API의 `/me` 엔드포인트에
/// 그대로 전달하여 프로필을 조회합니다. 토큰이 유효하지 않으면
/// Graph API가 4xx 응답으로 거부합니다.
pub struct FacebookGraphConfig;

impl FacebookGraphConfig {
    /// Facebook Graph API `/me` 엔드포인트 URI를 반환합니다.
    ///
    /// # 기본값
    ///
    /// `https://graph.facebook.com/v2.12/me`
    pub fn graph_uri() -> String {
        env::var("FACEBOOK_GRAPH_URI")
            .unwrap_or_else(|_| "https://graph.facebook.com/v2.12/me".to_string())
    }
}

/// 프로바이더 아웃바운드 호출 공통 설정
///
/// 원본 구현에는 타임아웃이 없어 프로바이더 장애 시 요청이 무한정
/// 대기할 수 있었습니다. 모든 프로바이더 호출에 동일한 상한을 적용하고,
/// 초과 시 `ProfileUnavailable`로 처리합니다.
pub struct ProviderHttpConfig;

impl ProviderHttpConfig {
    /// 프로바이더 HTTP 호출 타임아웃을 초 단위로 반환합니다.
    ///
    /// # 기본값
    ///
    /// 10초
    pub fn timeout_secs() -> u64 {
        env::var("PROVIDER_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10)
    }
}

/// 지원하는 인증 프로바이더를 나타내는 열거형
///
/// 엔드포인트 라우트가 프로바이더를 결정하며, 연동 레코드에는
/// 짧은 소문자 태그(`"google"`, `"facebook"`)로 저장됩니다.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// Google ID 토큰 기반 인증
    Google,

    /// Facebook Graph API 액세스 토큰 기반 인증
    Facebook,
}

impl AuthProvider {
    /// 문자열에서 AuthProvider를 생성합니다.
    ///
    /// # 지원되는 값
    ///
    /// - `"google"` → `AuthProvider::Google`
    /// - `"facebook"` → `AuthProvider::Facebook`
    ///
    /// 대소문자는 구분하지 않습니다.
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "google" => Ok(AuthProvider::Google),
            "facebook" => Ok(AuthProvider::Facebook),
            _ => Err(format!("Unsupported auth provider: {}", s)),
        }
    }

    /// AuthProvider를 문자열 태그로 변환합니다.
    ///
    /// 연동 레코드 저장과 로깅에 사용되는 소문자 표현입니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Google => "google",
            AuthProvider::Facebook => "facebook",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_provider_from_string() {
        assert_eq!(
            AuthProvider::from_str("google").unwrap(),
            AuthProvider::Google
        );
        assert_eq!(
            AuthProvider::from_str("facebook").unwrap(),
            AuthProvider::Facebook
        );

        // 대소문자 무관 테스트
        assert_eq!(
            AuthProvider::from_str("GOOGLE").unwrap(),
            AuthProvider::Google
        );
        assert_eq!(
            AuthProvider::from_str("Facebook").unwrap(),
            AuthProvider::Facebook
        );

        // 지원하지 않는 프로바이더 테스트
        assert!(AuthProvider::from_str("twitter").is_err());
        assert!(AuthProvider::from_str("local").is_err());
    }

    #[test]
    fn test_auth_provider_as_string() {
        assert_eq!(AuthProvider::Google.as_str(), "google");
        assert_eq!(AuthProvider::Facebook.as_str(), "facebook");
    }

    #[test]
    fn test_auth_provider_roundtrip() {
        for &provider_str in &["google", "facebook"] {
            let provider = AuthProvider::from_str(provider_str).unwrap();
            assert_eq!(provider.as_str(), provider_str);
        }
    }

    #[test]
    fn test_auth_provider_serialization() {
        // JSON 직렬화 시 소문자 태그로 표현되는지 확인
        let provider = AuthProvider::Google;
        let json = serde_json::to_string(&provider).unwrap();
        assert_eq!(json, "\"google\"");

        let deserialized: AuthProvider = serde_json::from_str(&json).unwrap();
        assert_eq!(provider, deserialized);
    }
}
