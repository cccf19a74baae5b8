//! 인증 요청 관련 DTO
//!
//! 외부 로그인 엔드포인트의 요청 정보를 매핑합니다.
use serde::Deserialize;
use validator::Validate;

/// 프로바이더 토큰 쿼리 파라미터 구조체
///
/// `POST /auth/google?token=...` / `POST /auth/facebook?token=...`에서
/// 클라이언트가 전달하는 불투명한 프로바이더 토큰입니다.
#[derive(Debug, Deserialize, Validate)]
pub struct TokenQuery {
    #[validate(length(min = 1, message = "프로바이더 토큰이 필요합니다"))]
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_query_requires_non_empty_token() {
        let valid = TokenQuery {
            token: "opaque-token".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty = TokenQuery {
            token: String::new(),
        };
        assert!(empty.validate().is_err());
    }
}
