//! # Facebook Graph 프로필 모델
//!
//! Facebook Graph API `/me` 엔드포인트의 JSON 응답을 역직렬화하기 위한
//! 구조체들입니다.
//!
//! ## API 호출 형식
//!
//! ```text
//! GET https://graph.facebook.com/v2.12/me
//!     ?fields=name,first_name,last_name,email,picture,id,graphDomain
//!     &access_token=<token>
//! ```
//!
//! ## 응답 예시
//!
//! ```json
//! {
//!   "name": "Chisom Nwisu",
//!   "first_name": "Chisom",
//!   "last_name": "Nwisu",
//!   "email": "chisom@example.com",
//!   "picture": { "data": { "url": "https://platform-lookaside.fbsbx.com/..." } },
//!   "id": "102158419794321",
//!   "graphDomain": "facebook"
//! }
//! ```
//!
//! `email`과 `picture`는 사용자의 공개 설정에 따라 생략될 수 있습니다.

use serde::Deserialize;

use crate::domain::models::profile::VerifiedProfile;
use crate::utils::string_utils::{clean_optional_string, split_display_name};

/// Facebook Graph `/me` 응답 프로필
#[derive(Debug, Clone, Deserialize)]
pub struct FacebookProfile {
    /// 외부 주체 식별자 (앱 범위의 Facebook 사용자 ID)
    pub id: String,
    /// 표시 이름
    pub name: Option<String>,
    /// 이름
    pub first_name: Option<String>,
    /// 성
    pub last_name: Option<String>,
    /// 이메일 주소 (공개 설정에 따라 생략 가능)
    pub email: Option<String>,
    /// 프로필 사진
    pub picture: Option<FacebookPicture>,
    /// 그래프 도메인 (facebook / instagram 등)
    #[serde(rename = "graphDomain")]
    pub graph_domain: Option<String>,
}

/// Graph API의 중첩된 프로필 사진 컨테이너
#[derive(Debug, Clone, Deserialize)]
pub struct FacebookPicture {
    pub data: Option<FacebookPictureData>,
}

/// 프로필 사진 데이터
#[derive(Debug, Clone, Deserialize)]
pub struct FacebookPictureData {
    pub url: Option<String>,
}

impl FacebookProfile {
    /// 프로필을 프로바이더 중립적인 형태로 정규화합니다.
    ///
    /// Graph가 `first_name`/`last_name`을 제공하면 그대로 사용하고,
    /// 없으면 표시 이름을 첫 공백에서 분리합니다 — 원본 구현이 TODO로
    /// 남겨 두었던 이름 분리 로직입니다.
    pub fn into_profile(self) -> VerifiedProfile {
        let (split_first, split_sur) = split_display_name(self.name.as_deref());
        let picture = self.picture.and_then(|p| p.data).and_then(|d| d.url);

        VerifiedProfile {
            subject_id: self.id,
            email: clean_optional_string(self.email),
            first_name: clean_optional_string(self.first_name).or(split_first),
            sur_name: clean_optional_string(self.last_name).or(split_sur),
            picture: clean_optional_string(picture),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_graph_response() {
        let json = r#"{
            "name": "Chisom Nwisu",
            "first_name": "Chisom",
            "last_name": "Nwisu",
            "email": "chisom@example.com",
            "picture": { "data": { "url": "https://platform-lookaside.fbsbx.com/p.jpg" } },
            "id": "102158419794321",
            "graphDomain": "facebook"
        }"#;

        let profile: FacebookProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.id, "102158419794321");
        assert_eq!(profile.graph_domain.as_deref(), Some("facebook"));

        let normalized = profile.into_profile();
        assert_eq!(normalized.subject_id, "102158419794321");
        assert_eq!(normalized.email.as_deref(), Some("chisom@example.com"));
        assert_eq!(normalized.first_name.as_deref(), Some("Chisom"));
        assert_eq!(normalized.sur_name.as_deref(), Some("Nwisu"));
        assert_eq!(
            normalized.picture.as_deref(),
            Some("https://platform-lookaside.fbsbx.com/p.jpg")
        );
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        // 이메일/사진 비공개 사용자
        let json = r#"{ "name": "Chisom Nwisu", "id": "42" }"#;
        let profile: FacebookProfile = serde_json::from_str(json).unwrap();
        let normalized = profile.into_profile();

        assert_eq!(normalized.subject_id, "42");
        assert!(normalized.email.is_none());
        assert!(normalized.picture.is_none());
        // 표시 이름 분리 폴백
        assert_eq!(normalized.first_name.as_deref(), Some("Chisom"));
        assert_eq!(normalized.sur_name.as_deref(), Some("Nwisu"));
    }

    #[test]
    fn test_reject_profile_without_id() {
        // id 없는 응답은 기대한 형태가 아니므로 역직렬화 실패
        let json = r#"{ "name": "Nobody" }"#;
        let result: Result<FacebookProfile, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }
}
