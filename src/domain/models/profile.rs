//! 검증된 프로필 모델
//!
//! 프로바이더 토큰 검증에 성공했을 때 얻는 프로바이더 중립적인
//! 속성 집합입니다. Identity Linker는 이 형태만을 입력으로 받으므로
//! 프로바이더별 응답 구조를 알 필요가 없습니다.

use serde::{Deserialize, Serialize};

/// 검증된 프로필
///
/// 토큰 검증 성공 후 프로바이더가 보증하는 사용자 속성입니다.
/// `subject_id`만 필수이며 나머지는 프로바이더와 사용자의 공개 설정에
/// 따라 비어 있을 수 있습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifiedProfile {
    /// 프로바이더가 발급한 외부 주체 식별자
    pub subject_id: String,
    /// 이메일 주소 (프로바이더가 제공하지 않을 수 있음)
    pub email: Option<String>,
    /// 이름
    pub first_name: Option<String>,
    /// 성
    pub sur_name: Option<String>,
    /// 프로필 사진 URL
    pub picture: Option<String>,
}

impl VerifiedProfile {
    /// 비어 있지 않은 이메일을 반환합니다.
    ///
    /// 빈 문자열 이메일은 자연키로 쓸 수 없으므로 `None`으로 취급합니다.
    pub fn email_key(&self) -> Option<&str> {
        self.email.as_deref().filter(|e| !e.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_key_filters_empty() {
        let mut profile = VerifiedProfile {
            subject_id: "999".to_string(),
            email: Some("a@x.com".to_string()),
            first_name: None,
            sur_name: None,
            picture: None,
        };
        assert_eq!(profile.email_key(), Some("a@x.com"));

        profile.email = Some(String::new());
        assert_eq!(profile.email_key(), None);

        profile.email = None;
        assert_eq!(profile.email_key(), None);
    }
}
