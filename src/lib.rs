//! 외부 아이덴티티 인증 서비스 백엔드
//!
//! 외부 아이덴티티 프로바이더(Google, Facebook)의 토큰으로 로그인하는
//! HTTP 서비스입니다. 클라이언트가 프로바이더 SDK로 획득한 토큰을
//! 서버가 프로바이더에 확인하고, 검증된 프로필을 로컬 사용자 계정에
//! 연동합니다.
//!
//! # Features
//!
//! - **Google 로그인**: tokeninfo 엔드포인트 기반 ID 토큰 검증
//! - **Facebook 로그인**: Graph API 기반 액세스 토큰 검증
//! - **아이덴티티 연동**: `(provider, subject)` 쌍 기준의 멱등한 계정 연결
//! - **이메일 병합**: 검증된 이메일이 일치하면 기존 계정에 연동
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← POST /auth/{google,facebook}
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 토큰 검증 + 아이덴티티 연동
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 사용자/연동 레코드 저장
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use external_auth_backend::core::AppContext;
//! use external_auth_backend::routes::configure_all_routes;
//!
//! let ctx = web::Data::new(AppContext::bootstrap());
//! let app = App::new().app_data(ctx).configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
