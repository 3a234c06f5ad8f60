//! OAuth State 매개변수 생성/검증
//!
//! CSRF(Cross-Site Request Forgery) 방지를 위한 state 값을 다룹니다.
//! 어댑터 자체는 state를 저장하지 않습니다. 호출자가 `generate_state`로 만든 값을
//! 세션 등에 보관했다가, 콜백에서 `verify_state`로 비교합니다.
//!
//! ```text
//! 로그인 시작: generate_state() ──► 세션 저장 ──► 인가 URL의 state
//! 콜백 수신:   세션의 state  ─┐
//!                             ├─► verify_state() ──► Ok / InvalidState
//!              쿼리의 state  ─┘
//! ```

use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::errors::{AuthError, AuthResult};
use crate::utils::string_utils::is_valid_string;

/// 예측 불가능한 state 값을 생성합니다.
///
/// UUID v4 두 개를 이어 붙인 64자리 16진수 문자열입니다.
pub fn generate_state() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

/// 발급한 state와 콜백으로 돌아온 state를 비교합니다.
///
/// 둘 중 하나라도 비어 있으면 실패입니다. 비교는 길이가 같을 때 상수 시간으로 수행됩니다.
///
/// # 반환값
///
/// * `Ok(())` - 일치
/// * `Err(AuthError::InvalidState)` - 불일치 또는 빈 값
pub fn verify_state(expected: &str, received: &str) -> AuthResult<()> {
    if !is_valid_string(expected) || !is_valid_string(received) {
        return Err(AuthError::InvalidState);
    }

    if expected.len() != received.len() {
        return Err(AuthError::InvalidState);
    }

    if bool::from(expected.as_bytes().ct_eq(received.as_bytes())) {
        Ok(())
    } else {
        Err(AuthError::InvalidState)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_state_format() {
        let state = generate_state();

        assert_eq!(state.len(), 64);
        assert!(state.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generated_states_differ() {
        assert_ne!(generate_state(), generate_state());
    }

    #[test]
    fn test_verify_matching_state() {
        let state = generate_state();

        assert!(verify_state(&state, &state.clone()).is_ok());
    }

    #[test]
    fn test_verify_rejects_mismatch() {
        assert!(matches!(verify_state("state-123", "state-124"), Err(AuthError::InvalidState)));
        assert!(matches!(verify_state("state-123", "state-1234"), Err(AuthError::InvalidState)));
    }

    #[test]
    fn test_verify_rejects_same_length_difference_anywhere() {
        let state = generate_state();
        let mut first = state.clone().into_bytes();
        first[0] = if first[0] == b'0' { b'1' } else { b'0' };
        let mut last = state.clone().into_bytes();
        last[63] = if last[63] == b'0' { b'1' } else { b'0' };

        for tampered in [first, last] {
            let tampered = String::from_utf8(tampered).unwrap();
            assert!(matches!(verify_state(&state, &tampered), Err(AuthError::InvalidState)));
        }
    }

    #[test]
    fn test_verify_rejects_empty() {
        assert!(verify_state("", "").is_err());
        assert!(verify_state("state-123", "").is_err());
    }
}
