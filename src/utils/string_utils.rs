//! # 문자열 유틸리티
//!
//! 설정값 검사, 스코프 분리, 민감 정보 마스킹 등 공통 문자열 처리 함수들입니다.

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::is_valid_string;
///
/// assert_eq!(is_valid_string("Hello"), true);
/// assert_eq!(is_valid_string("   "), false);
/// assert_eq!(is_valid_string(""), false);
/// ```
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 선택적 문자열 정리
///
/// None 이거나 공백만 있는 경우 None, 그 외에는 앞뒤 공백을 제거한 값을 반환합니다.
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

/// 프로바이더가 돌려준 스코프 문자열을 분리합니다.
///
/// 지정된 구분자와 공백 모두를 경계로 취급하고 빈 토큰은 버립니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(split_scopes("oauth-user-show oauth-donation-index", " "),
///            vec!["oauth-user-show", "oauth-donation-index"]);
/// assert!(split_scopes("   ", " ").is_empty());
/// ```
pub fn split_scopes(value: &str, separator: &str) -> Vec<String> {
    let pieces: Vec<&str> = if separator.trim().is_empty() {
        vec![value]
    } else {
        value.split(separator).collect()
    };

    pieces
        .into_iter()
        .flat_map(str::split_whitespace)
        .map(str::to_string)
        .collect()
}

/// 로그/Debug 출력용으로 비밀값을 가립니다.
///
/// 앞 4글자만 남기고 나머지는 `*`로 치환합니다. 8글자 이하의 값은 전부 가립니다.
pub fn mask_secret(value: &str) -> String {
    let count = value.chars().count();
    if count <= 8 {
        return "*".repeat(count);
    }

    let visible: String = value.chars().take(4).collect();
    format!("{}{}", visible, "*".repeat(count - 4))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_string() {
        assert!(is_valid_string("client-id"));
        assert!(!is_valid_string("   "));
        assert!(!is_valid_string(""));
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  Hello  ".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_split_scopes_with_space_separator() {
        assert_eq!(
            split_scopes("oauth-user-show  oauth-donation-index", " "),
            vec!["oauth-user-show", "oauth-donation-index"]
        );
        assert!(split_scopes("", " ").is_empty());
    }

    #[test]
    fn test_split_scopes_with_comma_separator() {
        assert_eq!(
            split_scopes("oauth-user-show, oauth-donation-index", ","),
            vec!["oauth-user-show", "oauth-donation-index"]
        );
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("short"), "*****");
        assert_eq!(mask_secret("client-secret"), "clie*********");
    }
}
