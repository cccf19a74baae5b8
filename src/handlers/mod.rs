//! HTTP 요청/응답 처리를 담당하는 핸들러 모듈
//!
//! 외부 아이덴티티 로그인 엔드포인트의 요청 파싱, 유효성 검사,
//! 서비스 호출, 응답 변환을 담당합니다.

pub mod auth;
