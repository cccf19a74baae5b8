//! # 아이덴티티 리포지토리 구현
//!
//! 사용자와 외부 연동 레코드의 데이터 액세스 계층입니다.
//!
//! ## 설계 배경
//!
//! 원본 구현은 요청 핸들러 안의 전역 가변 리스트를 직접 조작했습니다.
//! 여기서는 저장소를 trait으로 추상화하여 서비스 계층이 저장 방식과
//! 무관하게 동작하도록 하고, 유니크 제약을 저장 계층에서 강제합니다.
//!
//! ## 강제되는 불변식
//!
//! - `(provider, provider_subject_id)` 쌍당 최대 하나의 `ExternalLogin`
//!   — 위반 시 `create_login`이 `DuplicateLinkConflict`를 반환
//! - 식별자는 저장 계층이 생성 (UUID v4) — 원본의 고정 리터럴 ID는 결함
//!
//! ## 범위
//!
//! 영속성은 범위 밖이므로 제공되는 구현은 프로세스 메모리 기반 하나뿐입니다.
//! `tokio::sync::RwLock`으로 내부 일관성을 보장하지만, 조회-후-삽입
//! 시퀀스 전체의 직렬화는 Identity Linker의 책임입니다.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::AuthProvider;
use crate::domain::entities::logins::external_login::ExternalLogin;
use crate::domain::entities::users::user::User;
use crate::domain::models::profile::VerifiedProfile;
use crate::errors::{AppError, AppResult};

/// 아이덴티티 저장소 추상화
///
/// 외부 로그인 연동에 필요한 네 가지 연산만을 노출합니다.
/// 트랜잭셔널 저장소로 교체할 때에도 이 인터페이스는 유지됩니다.
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// `(provider, provider_subject_id)` 쌍으로 연동 레코드를 조회합니다.
    async fn find_login_by_provider_and_key(
        &self,
        provider: &AuthProvider,
        provider_subject_id: &str,
    ) -> AppResult<Option<ExternalLogin>>;

    /// 이메일로 사용자를 조회합니다 (대소문자 무시).
    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 검증된 프로필 속성으로 새 사용자를 생성합니다.
    ///
    /// 식별자는 저장 계층이 부여합니다.
    async fn create_user(&self, profile: &VerifiedProfile) -> AppResult<User>;

    /// 새 연동 레코드를 생성합니다.
    ///
    /// 동일한 `(provider, provider_subject_id)` 쌍이 이미 존재하면
    /// `AppError::DuplicateLinkConflict`를 반환합니다 — 유니크 제약 위반과
    /// 동일한 의미입니다.
    async fn create_login(
        &self,
        provider: AuthProvider,
        provider_subject_id: &str,
        user_id: Uuid,
    ) -> AppResult<ExternalLogin>;
}

/// 저장소 내부 상태
#[derive(Debug, Default)]
struct StoreInner {
    users: Vec<User>,
    logins: Vec<ExternalLogin>,
}

/// 프로세스 메모리 기반 아이덴티티 리포지토리
///
/// 프로세스 생명주기 동안만 유지되는 저장소입니다. 개별 연산의
/// 일관성은 `RwLock`으로 보장하며, `create_login`은 쓰기 락 안에서
/// 유니크 제약을 재확인한 뒤 삽입합니다.
#[derive(Debug, Default)]
pub struct InMemoryIdentityRepository {
    inner: RwLock<StoreInner>,
}

impl InMemoryIdentityRepository {
    /// 빈 저장소를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 사용자 수를 반환합니다.
    ///
    /// 변이 여부를 검증하는 테스트에서 사용합니다.
    pub async fn user_count(&self) -> usize {
        self.inner.read().await.users.len()
    }

    /// 저장된 연동 레코드 수를 반환합니다.
    pub async fn login_count(&self) -> usize {
        self.inner.read().await.logins.len()
    }

    /// 주어진 쌍과 일치하는 연동 레코드 수를 반환합니다.
    pub async fn login_count_for_pair(
        &self,
        provider: &AuthProvider,
        provider_subject_id: &str,
    ) -> usize {
        self.inner
            .read()
            .await
            .logins
            .iter()
            .filter(|l| l.matches_pair(provider, provider_subject_id))
            .count()
    }
}

#[async_trait]
impl IdentityRepository for InMemoryIdentityRepository {
    async fn find_login_by_provider_and_key(
        &self,
        provider: &AuthProvider,
        provider_subject_id: &str,
    ) -> AppResult<Option<ExternalLogin>> {
        let inner = self.inner.read().await;
        Ok(inner
            .logins
            .iter()
            .find(|l| l.matches_pair(provider, provider_subject_id))
            .cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        if email.is_empty() {
            return Ok(None);
        }

        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.email_matches(email)).cloned())
    }

    async fn create_user(&self, profile: &VerifiedProfile) -> AppResult<User> {
        let user = User::new(
            profile.email.clone(),
            profile.first_name.clone(),
            profile.sur_name.clone(),
            profile.picture.clone(),
        );

        let mut inner = self.inner.write().await;
        inner.users.push(user.clone());

        log::debug!("사용자 생성됨: id={}", user.id);
        Ok(user)
    }

    async fn create_login(
        &self,
        provider: AuthProvider,
        provider_subject_id: &str,
        user_id: Uuid,
    ) -> AppResult<ExternalLogin> {
        let mut inner = self.inner.write().await;

        // 쓰기 락 안에서 유니크 제약 재확인 (조회와 삽입 사이의 경합 대비)
        if inner
            .logins
            .iter()
            .any(|l| l.matches_pair(&provider, provider_subject_id))
        {
            return Err(AppError::DuplicateLinkConflict(format!(
                "{}/{} 쌍의 연동 레코드가 이미 존재합니다",
                provider.as_str(),
                provider_subject_id
            )));
        }

        let login = ExternalLogin::new(provider, provider_subject_id.to_string(), user_id);
        inner.logins.push(login.clone());

        log::debug!(
            "연동 레코드 생성됨: provider={}, subject={}, user_id={}",
            login.provider.as_str(),
            login.provider_subject_id,
            login.user_id
        );
        Ok(login)
    }
}
