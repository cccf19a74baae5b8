//! # 애플리케이션 컨텍스트
//!
//! 핸들러가 사용하는 서비스들을 하나의 주입 가능한 구조체로 조립합니다.
//! `web::Data<AppContext>`로 등록되어 모든 워커가 동일한 저장소와
//! 연동 서비스를 공유합니다.
//!
//! 테스트에서는 [`AppContext::with_parts`]로 스텁 검증기를 주입하여
//! 프로바이더 호출 없이 엔드포인트 동작을 검증합니다.

use std::sync::Arc;

use crate::repositories::identity::InMemoryIdentityRepository;
use crate::services::linker::IdentityLinker;
use crate::services::verify::{FacebookTokenVerifier, GoogleTokenVerifier, TokenVerifier};

/// 핸들러 계층에 주입되는 서비스 묶음
pub struct AppContext {
    /// Google ID 토큰 검증기
    pub google_verifier: Arc<dyn TokenVerifier>,
    /// Facebook 액세스 토큰 검증기
    pub facebook_verifier: Arc<dyn TokenVerifier>,
    /// 아이덴티티 연동 서비스
    pub linker: Arc<IdentityLinker>,
}

impl AppContext {
    /// 운영 구성으로 컨텍스트를 조립합니다.
    ///
    /// 실제 프로바이더 검증기와 프로세스 메모리 저장소를 사용합니다.
    pub fn bootstrap() -> Self {
        let repo = Arc::new(InMemoryIdentityRepository::new());

        Self {
            google_verifier: Arc::new(GoogleTokenVerifier::new()),
            facebook_verifier: Arc::new(FacebookTokenVerifier::new()),
            linker: Arc::new(IdentityLinker::new(repo)),
        }
    }

    /// 구성 요소를 직접 주입하여 컨텍스트를 만듭니다.
    ///
    /// 핸들러 테스트에서 스텁 검증기를 주입할 때 사용합니다.
    pub fn with_parts(
        google_verifier: Arc<dyn TokenVerifier>,
        facebook_verifier: Arc<dyn TokenVerifier>,
        linker: Arc<IdentityLinker>,
    ) -> Self {
        Self {
            google_verifier,
            facebook_verifier,
            linker,
        }
    }
}
