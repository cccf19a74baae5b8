//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 프로바이더 토큰 검증과 아이덴티티 연동 로직을 제공합니다.
//!
//! # Features
//!
//! - 프로바이더 토큰 검증 (Google tokeninfo, Facebook Graph API)
//! - 외부 아이덴티티 → 로컬 계정 연동 (조회-후-연결 결정 절차)
//! - 검증 실패의 명시적 전파 — 원본 구현처럼 실패를 삼키고
//!   null 프로필을 사용하는 일이 없습니다
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{linker::IdentityLinker, verify::GoogleTokenVerifier};
//!
//! let profile = verifier.verify(&token).await?;
//! let outcome = linker.link(AuthProvider::Google, &profile).await?;
//! ```

pub mod linker;
pub mod verify;
