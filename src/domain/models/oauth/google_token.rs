//! # Google tokeninfo 클레임 모델
//!
//! Google의 tokeninfo 엔드포인트가 ID 토큰 검증 성공 시 반환하는
//! 클레임 집합을 역직렬화하기 위한 구조체입니다.
//!
//! ## API 엔드포인트
//!
//! `GET https://oauth2.googleapis.com/tokeninfo?id_token=<token>`
//!
//! 서명, 만료, 발급자 검증은 Google 측에서 수행되며, 유효하지 않은
//! 토큰은 4xx 응답으로 거부됩니다. 따라서 이 구조체로 역직렬화에
//! 성공했다는 것 자체가 토큰이 검증되었음을 의미합니다.
//!
//! ## 응답 예시
//!
//! ```json
//! {
//!   "iss": "https://accounts.google.com",
//!   "sub": "1234567890",
//!   "aud": "646454628737-xxxx.apps.googleusercontent.com",
//!   "email": "user@gmail.com",
//!   "email_verified": "true",
//!   "name": "John Doe",
//!   "given_name": "John",
//!   "family_name": "Doe",
//!   "picture": "https://lh3.googleusercontent.com/.../photo.jpg",
//!   "exp": "1716239022"
//! }
//! ```
//!
//! tokeninfo는 불리언/숫자 클레임도 문자열로 반환하는 점에 주의합니다.

use serde::Deserialize;

use crate::domain::models::profile::VerifiedProfile;
use crate::utils::string_utils::{clean_optional_string, split_display_name};

/// Google tokeninfo 검증 응답 클레임
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleTokenClaims {
    /// 외부 주체 식별자 (변경되지 않는 Google 계정 고유 ID)
    pub sub: String,
    /// 토큰이 발급된 대상 애플리케이션의 Client ID
    pub aud: String,
    /// 발급자 (accounts.google.com)
    pub iss: Option<String>,
    /// 이메일 주소 (email 스코프가 있을 때만)
    pub email: Option<String>,
    /// 이메일 검증 여부 — tokeninfo는 "true"/"false" 문자열로 반환
    pub email_verified: Option<String>,
    /// 표시 이름
    pub name: Option<String>,
    /// 이름
    pub given_name: Option<String>,
    /// 성
    pub family_name: Option<String>,
    /// 프로필 사진 URL
    pub picture: Option<String>,
    /// 만료 시각 (epoch 초, 문자열)
    pub exp: Option<String>,
}

impl GoogleTokenClaims {
    /// 클레임을 프로바이더 중립적인 프로필로 정규화합니다.
    ///
    /// `given_name`/`family_name`이 없으면 표시 이름을 첫 공백에서
    /// 분리하여 사용합니다.
    pub fn into_profile(self) -> VerifiedProfile {
        let (split_first, split_sur) = split_display_name(self.name.as_deref());

        VerifiedProfile {
            subject_id: self.sub,
            email: clean_optional_string(self.email),
            first_name: clean_optional_string(self.given_name).or(split_first),
            sur_name: clean_optional_string(self.family_name).or(split_sur),
            picture: clean_optional_string(self.picture),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "iss": "https://accounts.google.com",
            "sub": "1234567890",
            "aud": "646454628737-xxxx.apps.googleusercontent.com",
            "email": "user@gmail.com",
            "email_verified": "true",
            "name": "John Doe",
            "given_name": "John",
            "family_name": "Doe",
            "picture": "https://lh3.googleusercontent.com/photo.jpg",
            "exp": "1716239022"
        }"#
    }

    #[test]
    fn test_deserialize_tokeninfo_response() {
        let claims: GoogleTokenClaims = serde_json::from_str(sample_json()).unwrap();

        assert_eq!(claims.sub, "1234567890");
        assert_eq!(claims.aud, "646454628737-xxxx.apps.googleusercontent.com");
        assert_eq!(claims.email.as_deref(), Some("user@gmail.com"));
        assert_eq!(claims.email_verified.as_deref(), Some("true"));
    }

    #[test]
    fn test_deserialize_minimal_claims() {
        // email/profile 스코프가 없는 토큰은 필수 클레임만 반환
        let json = r#"{"sub": "42", "aud": "client-id"}"#;
        let claims: GoogleTokenClaims = serde_json::from_str(json).unwrap();

        assert_eq!(claims.sub, "42");
        assert!(claims.email.is_none());
        assert!(claims.name.is_none());
    }

    #[test]
    fn test_into_profile_prefers_explicit_name_parts() {
        let claims: GoogleTokenClaims = serde_json::from_str(sample_json()).unwrap();
        let profile = claims.into_profile();

        assert_eq!(profile.subject_id, "1234567890");
        assert_eq!(profile.first_name.as_deref(), Some("John"));
        assert_eq!(profile.sur_name.as_deref(), Some("Doe"));
        assert_eq!(
            profile.picture.as_deref(),
            Some("https://lh3.googleusercontent.com/photo.jpg")
        );
    }

    #[test]
    fn test_into_profile_splits_display_name_as_fallback() {
        let json = r#"{"sub": "42", "aud": "client-id", "name": "Chisom Nwisu"}"#;
        let claims: GoogleTokenClaims = serde_json::from_str(json).unwrap();
        let profile = claims.into_profile();

        assert_eq!(profile.first_name.as_deref(), Some("Chisom"));
        assert_eq!(profile.sur_name.as_deref(), Some("Nwisu"));
    }
}
