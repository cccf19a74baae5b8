//! ExternalLogin Entity Implementation
//!
//! 로컬 계정과 외부 프로바이더 아이덴티티의 연결 레코드입니다.
//!
//! 원본 구현은 레코드 자체의 ID와 프로바이더의 외부 주체 ID를 하나의
//! `Id` 필드에 겹쳐 사용했습니다. 이는 잠재적 설계 결함이므로 여기서는
//! `record_id`(레코드 고유 식별자)와 `provider_subject_id`(프로바이더가
//! 발급한 주체 식별자)로 분리합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AuthProvider;

/// 외부 연동 레코드 엔티티
///
/// `(provider, provider_subject_id)` 쌍이 복합 아이덴티티이며,
/// 쌍당 최대 하나의 레코드만 존재해야 합니다 (저장 계층이 강제).
/// 각 레코드는 정확히 하나의 `User`를 참조합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalLogin {
    /// 레코드 고유 식별자 (저장 계층이 부여)
    pub record_id: Uuid,
    /// 인증 프로바이더 태그
    pub provider: AuthProvider,
    /// 프로바이더가 발급한 외부 주체 식별자 (Google `sub`, Facebook `id`)
    pub provider_subject_id: String,
    /// 연결된 사용자의 식별자
    pub user_id: Uuid,
    /// 생성 시간
    pub created_at: DateTime<Utc>,
}

impl ExternalLogin {
    /// 새 연동 레코드를 생성합니다.
    ///
    /// 저장 계층의 `create_login` 경로에서만 호출해야 합니다.
    pub fn new(provider: AuthProvider, provider_subject_id: String, user_id: Uuid) -> Self {
        Self {
            record_id: Uuid::new_v4(),
            provider,
            provider_subject_id,
            user_id,
            created_at: Utc::now(),
        }
    }

    /// 주어진 (프로바이더, 주체 ID) 쌍과 일치하는지 확인합니다.
    pub fn matches_pair(&self, provider: &AuthProvider, provider_subject_id: &str) -> bool {
        self.provider == *provider && self.provider_subject_id == provider_subject_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_pair() {
        let user_id = Uuid::new_v4();
        let login = ExternalLogin::new(AuthProvider::Google, "874757567".to_string(), user_id);

        assert!(login.matches_pair(&AuthProvider::Google, "874757567"));
        assert!(!login.matches_pair(&AuthProvider::Facebook, "874757567"));
        assert!(!login.matches_pair(&AuthProvider::Google, "999"));
    }

    #[test]
    fn test_record_id_distinct_from_subject_id() {
        // 레코드 ID와 프로바이더 주체 ID가 별개의 값인지 확인
        let login = ExternalLogin::new(AuthProvider::Google, "874757567".to_string(), Uuid::new_v4());

        assert_eq!(login.provider_subject_id, "874757567");
        assert_ne!(login.record_id.to_string(), login.provider_subject_id);
    }
}
