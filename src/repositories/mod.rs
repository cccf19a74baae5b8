//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 사용자/연동 레코드 저장소를 trait으로 추상화하고, 프로세스 메모리
//! 기반 구현을 제공합니다. 원본 구현의 전역 가변 리스트를 주입 가능한
//! 리포지토리 추상화로 대체한 것입니다.
//!
//! # Features
//!
//! - `IdentityRepository` trait을 통한 저장소 추상화 (추후 트랜잭셔널
//!   저장소로 교체 가능)
//! - `(provider, provider_subject_id)` 쌍에 대한 유니크 제약 강제
//! - 저장 계층 주도의 식별자 생성 (UUID v4)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::identity::{IdentityRepository, InMemoryIdentityRepository};
//!
//! let repo = InMemoryIdentityRepository::new();
//! let user = repo.find_user_by_email("user@example.com").await?;
//! ```

pub mod identity;
