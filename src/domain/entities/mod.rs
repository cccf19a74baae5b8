//! # Domain Entities Module
//!
//! 외부 인증 도메인의 핵심 엔티티들을 정의합니다.
//!
//! ## 주요 역할
//!
//! - **도메인 모델링**: 로컬 사용자와 외부 연동 레코드를 Rust 구조체로 표현
//! - **불변식 표현**: `(provider, provider_subject_id)` 쌍당 최대 하나의
//!   `ExternalLogin`, 각 `ExternalLogin`은 정확히 하나의 `User`를 참조
//! - **직렬화 지원**: `serde`를 통한 JSON 변환
//!
//! ## 생명주기
//!
//! 두 엔티티 모두 프로세스 메모리에서만 존재하며 삭제되지 않습니다.
//! 식별자는 저장 계층이 생성 시점에 부여합니다 (UUID v4).

pub mod logins;
pub mod users;
