//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 외부 인증 도메인의 엔티티와
//! 값 객체, API 계약을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 핵심 비즈니스 객체 (User, ExternalLogin)
//! ├── Models    - 외부 시스템 통합 모델 (프로바이더 응답, 검증된 프로필)
//! └── DTOs      - 데이터 전송 객체 (Request/Response)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! 프로세스 메모리에 저장되는 도메인 객체입니다. `User`는 로컬 계정을,
//! `ExternalLogin`은 로컬 계정과 (프로바이더, 외부 주체 ID) 쌍의 연결을
//! 표현합니다.
//!
//! ### [`models`] - 프로바이더 통합 모델
//!
//! Google tokeninfo 응답, Facebook Graph 프로필 등 외부 시스템의 데이터
//! 형태와, 이를 프로바이더 중립적으로 정규화한 `VerifiedProfile`을
//! 정의합니다.
//!
//! ### [`dto`] - API 계약
//!
//! HTTP 경계의 요청 매핑을 정의합니다. `validator`를 통한 입력 검증을
//! 내장합니다.

pub mod dto;
pub mod entities;
pub mod models;

pub use dto::auth::request::TokenQuery;
pub use entities::logins::external_login::ExternalLogin;
pub use entities::users::user::User;
pub use models::profile::VerifiedProfile;
