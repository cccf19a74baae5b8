//! # Configuration Module
//!
//! 외부 인증 백엔드의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`auth_config`] - 프로바이더 검증 엔드포인트와 인증 프로바이더 관련 설정
//!
//! ## 설계 원칙
//!
//! - **환경 분리**: 개발/운영 환경별로 다른 설정값 제공 (`.env.dev`, `.env.prod`)
//! - **안전한 기본값**: 프로바이더 엔드포인트는 공식 기본값을 제공하고,
//!   민감하거나 선택적인 값(클라이언트 ID)은 환경 변수로만 주입
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{AuthProvider, GoogleVerifyConfig};
//!
//! let tokeninfo = GoogleVerifyConfig::tokeninfo_uri();
//! let provider = AuthProvider::from_str("google")?;
//! ```

pub mod auth_config;

pub use auth_config::{AuthProvider, FacebookGraphConfig, GoogleVerifyConfig, ProviderHttpConfig};
