//! User Entity Implementation
//!
//! 로컬 사용자 계정의 핵심 구현체입니다.
//! 외부 프로바이더 로그인을 통해 처음 만나는 이메일마다 하나씩 생성되며,
//! 이메일을 자연키로 사용하여 서로 다른 프로바이더의 로그인을
//! 같은 계정에 연동합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 사용자 엔티티
///
/// 시스템의 모든 로컬 계정을 표현하는 핵심 도메인 엔티티입니다.
/// 식별자는 저장 계층이 생성 시점에 부여합니다 (UUID v4) — 원본 구현의
/// 고정 리터럴 ID 할당은 결함이었으므로 재현하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 사용자 고유 식별자 (저장 계층이 부여)
    pub id: Uuid,
    /// 사용자 이메일 — 계정 연동 시 자연키로 사용 (대소문자 무시 비교)
    ///
    /// Facebook 프로필은 이메일을 제공하지 않을 수 있으므로 선택값입니다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// 이름
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// 성
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sur_name: Option<String>,
    /// 프로필 이미지 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// 생성 시간
    pub created_at: DateTime<Utc>,
}

impl User {
    /// 검증된 프로필 속성으로 새 사용자를 생성합니다.
    ///
    /// 식별자와 생성 시각을 이 자리에서 부여하므로, 저장 계층의
    /// `create_user` 경로에서만 호출해야 합니다.
    pub fn new(
        email: Option<String>,
        first_name: Option<String>,
        sur_name: Option<String>,
        image: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            first_name,
            sur_name,
            image,
            created_at: Utc::now(),
        }
    }

    /// 주어진 이메일과 대소문자를 무시하고 일치하는지 확인합니다.
    ///
    /// 이메일이 없는 계정은 어떤 이메일과도 일치하지 않습니다.
    pub fn email_matches(&self, email: &str) -> bool {
        match &self.email {
            Some(own) => !own.is_empty() && own.eq_ignore_ascii_case(email),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_assigns_unique_ids() {
        let a = User::new(Some("a@x.com".to_string()), None, None, None);
        let b = User::new(Some("a@x.com".to_string()), None, None, None);

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_email_matches_case_insensitive() {
        let user = User::new(Some("Chisom@Example.com".to_string()), None, None, None);

        assert!(user.email_matches("chisom@example.com"));
        assert!(user.email_matches("CHISOM@EXAMPLE.COM"));
        assert!(!user.email_matches("other@example.com"));
    }

    #[test]
    fn test_email_matches_without_email() {
        let user = User::new(None, Some("Chisom".to_string()), None, None);

        assert!(!user.email_matches("chisom@example.com"));
        assert!(!user.email_matches(""));
    }
}
