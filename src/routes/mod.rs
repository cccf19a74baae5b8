//! API 라우트 설정 모듈
//!
//! 외부 아이덴티티 로그인 엔드포인트와 헬스체크 엔드포인트를
//! 애플리케이션에 등록합니다.
//!
//! # Features
//!
//! - 프로바이더별 로그인 엔드포인트 (`/auth/google`, `/auth/facebook`)
//! - 헬스체크 엔드포인트
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::web;
use serde_json::json;

use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_auth_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// 프로바이더는 경로가 결정합니다 — 요청 본문에는 토큰만 담깁니다.
///
/// # Available Routes
///
/// - `POST /auth/google?token=<id-token>` - Google ID 토큰 로그인
/// - `POST /auth/facebook?token=<access-token>` - Facebook 액세스 토큰 로그인
///
/// # Examples
///
/// ```bash
/// curl -X POST "http://localhost:8080/auth/google?token=<google-id-token>"
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(handlers::auth::google_login)
            .service(handlers::auth::facebook_login),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "external_auth_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "providers": ["google", "facebook"]
    }))
}
