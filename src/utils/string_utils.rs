//! # 문자열 유틸리티
//!
//! 프로바이더 프로필 정규화에 사용하는 문자열 처리 함수들입니다.

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  Hello  ".to_string())), Some("Hello".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 표시 이름을 이름/성으로 분리
///
/// 프로바이더가 이름을 구성 요소로 제공하지 않을 때의 폴백입니다.
/// 첫 번째 공백을 기준으로 분리하며, 공백이 없으면 전체를 이름으로
/// 취급하고 성은 비워 둡니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::split_display_name;
///
/// assert_eq!(
///     split_display_name(Some("Chisom Nwisu")),
///     (Some("Chisom".to_string()), Some("Nwisu".to_string()))
/// );
/// assert_eq!(split_display_name(Some("Cher")), (Some("Cher".to_string()), None));
/// assert_eq!(split_display_name(None), (None, None));
/// ```
pub fn split_display_name(name: Option<&str>) -> (Option<String>, Option<String>) {
    let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) else {
        return (None, None);
    };

    match name.split_once(char::is_whitespace) {
        Some((first, rest)) => (
            Some(first.to_string()),
            Some(rest.trim().to_string()).filter(|r| !r.is_empty()),
        ),
        None => (Some(name.to_string()), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(
            clean_optional_string(Some("  Hello  ".to_string())),
            Some("Hello".to_string())
        );
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(Some(String::new())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_split_display_name_two_parts() {
        assert_eq!(
            split_display_name(Some("Chisom Nwisu")),
            (Some("Chisom".to_string()), Some("Nwisu".to_string()))
        );
    }

    #[test]
    fn test_split_display_name_multi_part_surname() {
        // 첫 공백에서만 분리하고 나머지는 성으로 합친다
        assert_eq!(
            split_display_name(Some("Mary Jane Watson")),
            (Some("Mary".to_string()), Some("Jane Watson".to_string()))
        );
    }

    #[test]
    fn test_split_display_name_single_word() {
        assert_eq!(
            split_display_name(Some("Cher")),
            (Some("Cher".to_string()), None)
        );
    }

    #[test]
    fn test_split_display_name_empty() {
        assert_eq!(split_display_name(Some("   ")), (None, None));
        assert_eq!(split_display_name(None), (None, None));
    }
}
