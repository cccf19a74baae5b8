//! 인증 요청/응답 DTO 모듈

pub mod request;

pub use request::TokenQuery;
