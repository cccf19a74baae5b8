//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의하며,
//! `validator` crate를 통한 입력값 검증을 내장합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! └── auth/               # 인증 관련 DTO
//!     └── request.rs      # 요청 DTO (클라이언트 → 서버)
//! ```
//!
//! 에러 응답 본문(`{"Message": "..."}`)은 [`crate::errors`]의
//! `ResponseError` 구현이 직접 생성하므로 별도 응답 DTO는 없습니다.

pub mod auth;
