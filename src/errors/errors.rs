//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 외부 인증 백엔드를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 에러 분류
//!
//! | 에러 | HTTP 상태 | 의미 |
//! |------|-----------|------|
//! | `TokenRejected` | 400 | 프로바이더가 토큰을 거부함 (위조, 만료, 잘못된 발급자) |
//! | `ProfileUnavailable` | 400 | 프로바이더 통신 실패 또는 응답 파싱 실패 |
//! | `DuplicateLinkConflict` | 409 | 동일 (provider, subject) 쌍에 대한 삽입 경합 |
//! | `ValidationError` | 400 | 요청 입력값 검증 실패 |
//! | `InternalError` | 500 | 예기치 못한 내부 오류 |
//!
//! 모든 에러는 원본 API와 동일한 `{"Message": "..."}` 형태의 JSON 본문으로
//! 클라이언트에 전달됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, AppResult};
//!
//! async fn verify(token: &str) -> AppResult<VerifiedProfile> {
//!     if token.is_empty() {
//!         return Err(AppError::ValidationError("토큰이 필요합니다".to_string()));
//!     }
//!     // ...
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 외부 인증 플로우에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 프로바이더가 토큰을 거부함 (400 Bad Request)
    ///
    /// 토큰이 위조되었거나, 만료되었거나, 기대한 발급자가 서명하지 않은 경우입니다.
    #[error("Token rejected: {0}")]
    TokenRejected(String),

    /// 프로바이더로부터 프로필을 얻지 못함 (400 Bad Request)
    ///
    /// 네트워크 오류, 타임아웃, 빈 응답, 파싱 불가능한 응답 본문이 여기에 해당합니다.
    #[error("Profile unavailable: {0}")]
    ProfileUnavailable(String),

    /// 동일 (provider, subject) 쌍에 대한 삽입 충돌 (409 Conflict)
    ///
    /// 조회와 삽입 사이에 다른 요청이 동일한 연동 행을 먼저 삽입한 경우입니다.
    /// Identity Linker는 이 에러를 `ExistingLogin` 결과로 흡수하므로,
    /// 리포지토리를 직접 사용할 때에만 외부로 드러납니다.
    #[error("Duplicate link conflict: {0}")]
    DuplicateLinkConflict(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 `{"Message": "..."}` 형태의
    /// JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::TokenRejected(_) => StatusCode::BAD_REQUEST,
            AppError::ProfileUnavailable(_) => StatusCode::BAD_REQUEST,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::DuplicateLinkConflict(_) => StatusCode::CONFLICT,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "Message": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_token_rejected_response() {
        let error = AppError::TokenRejected("Invalid signature".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_profile_unavailable_response() {
        let error = AppError::ProfileUnavailable("Graph API timeout".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_duplicate_link_conflict_response() {
        let error = AppError::DuplicateLinkConflict("google/123".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("token is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_display_contains_context() {
        let error = AppError::TokenRejected("expired".to_string());
        assert!(error.to_string().contains("expired"));
        assert!(error.to_string().contains("Token rejected"));
    }
}
