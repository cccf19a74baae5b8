//! External Identity Login Handlers
//!
//! 외부 아이덴티티 프로바이더(Google, Facebook)의 토큰으로 로그인하는
//! HTTP 엔드포인트 핸들러들입니다. 프로바이더는 라우트가 결정합니다.
//!
//! # Auth Providers
//!
//! - **Google**: ID 토큰 검증 (`POST /auth/google`)
//! - **Facebook**: Graph API 액세스 토큰 검증 (`POST /auth/facebook`)
//!
//! # 응답 계약
//!
//! - 성공: `204 No Content` — 토큰이 검증되고 아이덴티티가 연동됨
//! - 실패: `{"Message": "..."}` 본문의 오류 응답 (상태 코드는 오류
//!   종류에 따라 결정)
//!
//! 검증 실패는 어떤 경우에도 연동 절차로 이어지지 않습니다. 저장소
//! 변이는 검증 성공 이후에만 일어납니다.

use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::config::AuthProvider;
use crate::core::AppContext;
use crate::domain::TokenQuery;
use crate::errors::AppError;

/// Google 토큰 로그인 핸들러
///
/// 클라이언트가 Google SDK로 획득한 ID 토큰을 검증하고 로컬 계정에
/// 연동합니다.
///
/// # Endpoint
/// `POST /auth/google?token=<id-token>`
#[post("/google")]
pub async fn google_login(
    query: web::Query<TokenQuery>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, AppError> {
    login_with_provider(AuthProvider::Google, &query, &ctx).await
}

/// Facebook 토큰 로그인 핸들러
///
/// 클라이언트가 Facebook SDK로 획득한 액세스 토큰을 검증하고 로컬
/// 계정에 연동합니다.
///
/// # Endpoint
/// `POST /auth/facebook?token=<access-token>`
#[post("/facebook")]
pub async fn facebook_login(
    query: web::Query<TokenQuery>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, AppError> {
    login_with_provider(AuthProvider::Facebook, &query, &ctx).await
}

/// 프로바이더 공통 로그인 절차
///
/// 검증 → 연동 순서로 진행하며, 검증 오류는 그대로 전파됩니다.
async fn login_with_provider(
    provider: AuthProvider,
    query: &TokenQuery,
    ctx: &AppContext,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    query
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let verifier = match provider {
        AuthProvider::Google => &ctx.google_verifier,
        AuthProvider::Facebook => &ctx.facebook_verifier,
    };

    let profile = verifier.verify(&query.token).await?;

    log::info!(
        "{} 토큰 검증 완료 - 주체: {}",
        provider.as_str(),
        profile.subject_id
    );

    ctx.linker.link(provider, &profile).await?;

    Ok(HttpResponse::NoContent().finish())
}
