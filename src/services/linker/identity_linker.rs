//! # 아이덴티티 연동 서비스
//!
//! 검증된 외부 프로필을 로컬 사용자 계정에 연결합니다.
//!
//! ## 결정 절차
//!
//! 1. `(provider, subject_id)` 쌍의 연동 레코드 조회 → 있으면 기존
//!    연동으로 즉시 완료
//! 2. 프로필 이메일로 사용자 조회 (이메일이 없거나 빈 값이면 생략)
//! 3. 사용자가 없으면 프로필 속성으로 새 사용자 생성
//! 4. 쌍과 사용자를 잇는 연동 레코드 생성
//!
//! ## 동시성
//!
//! 위 절차는 조회-판단-기록 시퀀스이므로 그대로 두면 동일 쌍의 동시
//! 요청이 레코드를 중복 생성할 수 있습니다. 연동 뮤텍스로 절차 전체를
//! 직렬화하고, 저장 계층의 유니크 제약을 최후 방어선으로 둡니다.
//! 제약 위반(`DuplicateLinkConflict`)은 "다른 요청이 먼저 연동을
//! 완료했다"는 의미이므로 기존 연동 성공으로 흡수합니다.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::AuthProvider;
use crate::domain::entities::logins::external_login::ExternalLogin;
use crate::domain::models::profile::VerifiedProfile;
use crate::errors::{AppError, AppResult};
use crate::repositories::identity::IdentityRepository;

/// 연동 절차의 결과
#[derive(Debug, Clone, PartialEq)]
pub enum LinkOutcome {
    /// 해당 쌍의 연동 레코드가 이미 존재함
    ExistingLogin,
    /// 새 연동 레코드가 생성됨 (필요 시 새 사용자 포함)
    NewLink,
}

/// 외부 아이덴티티 연동 서비스
///
/// 저장소 추상화 위에서 동작하므로 저장 방식과 무관하게 동일한
/// 결정 절차를 수행합니다.
pub struct IdentityLinker {
    repo: Arc<dyn IdentityRepository>,
    /// 조회-판단-기록 시퀀스 전체를 직렬화하는 연동 뮤텍스
    link_lock: Mutex<()>,
}

impl IdentityLinker {
    /// 주어진 저장소 위에서 동작하는 연동 서비스를 생성합니다.
    pub fn new(repo: Arc<dyn IdentityRepository>) -> Self {
        Self {
            repo,
            link_lock: Mutex::new(()),
        }
    }

    /// 검증된 프로필을 로컬 계정에 연결합니다.
    ///
    /// 같은 프로바이더·주체로 다시 로그인하면 추가 변이 없이
    /// `ExistingLogin`을 반환합니다 (멱등성).
    pub async fn link(
        &self,
        provider: AuthProvider,
        profile: &VerifiedProfile,
    ) -> AppResult<LinkOutcome> {
        let _guard = self.link_lock.lock().await;

        if let Some(login) = self
            .repo
            .find_login_by_provider_and_key(&provider, &profile.subject_id)
            .await?
        {
            log::debug!(
                "기존 연동 사용: provider={}, subject={}, user_id={}",
                provider.as_str(),
                profile.subject_id,
                login.user_id
            );
            return Ok(LinkOutcome::ExistingLogin);
        }

        let user = match self.resolve_user(profile).await? {
            Some(user) => user,
            None => self.repo.create_user(profile).await?,
        };

        match self
            .repo
            .create_login(provider.clone(), &profile.subject_id, user.id)
            .await
        {
            Ok(_) => {
                log::info!(
                    "새 연동 생성: provider={}, subject={}, user_id={}",
                    provider.as_str(),
                    profile.subject_id,
                    user.id
                );
                Ok(LinkOutcome::NewLink)
            }
            // 유니크 제약 위반 = 경합한 요청이 먼저 연동을 완료함
            Err(AppError::DuplicateLinkConflict(_)) => Ok(LinkOutcome::ExistingLogin),
            Err(e) => Err(e),
        }
    }

    /// 프로필 이메일로 기존 사용자를 찾습니다.
    ///
    /// 이메일이 없거나 빈 값이면 조회 없이 `None`을 반환합니다 —
    /// 이메일 없는 프로필이 임의의 계정과 연결되는 것을 막습니다.
    async fn resolve_user(
        &self,
        profile: &VerifiedProfile,
    ) -> AppResult<Option<crate::domain::entities::users::user::User>> {
        match profile.email_key() {
            Some(email) => self.repo.find_user_by_email(email).await,
            None => Ok(None),
        }
    }

    /// 쌍으로 연동 레코드를 조회합니다.
    ///
    /// 연동 이후 후속 처리(세션 발급 등)가 사용자를 특정할 때 씁니다.
    pub async fn find_login(
        &self,
        provider: &AuthProvider,
        subject_id: &str,
    ) -> AppResult<Option<ExternalLogin>> {
        self.repo
            .find_login_by_provider_and_key(provider, subject_id)
            .await
    }
}
