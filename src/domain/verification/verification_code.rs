//! 발급된 인증 코드 값 객체

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// 발급된 인증 코드
///
/// 발급 서비스가 생성해 저장소에 넣고, 게이트만 읽고 삭제합니다.
/// 생성 후에는 변경되지 않습니다.
///
/// # Examples
///
/// ```rust,ignore
/// let code = VerificationCode::new("7421", 60);
/// assert!(!code.is_expired());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    /// 코드 문자열
    pub code: String,
    /// 만료 시각
    pub expires_at: DateTime<Utc>,
}

impl VerificationCode {
    /// 지금부터 `expire_in_seconds`초 동안 유효한 코드를 생성합니다.
    pub fn new(code: impl Into<String>, expire_in_seconds: i64) -> Self {
        Self::expiring_at(code, Utc::now() + Duration::seconds(expire_in_seconds))
    }

    /// 만료 시각을 직접 지정해 코드를 생성합니다.
    pub fn expiring_at(code: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            code: code.into(),
            expires_at,
        }
    }

    /// 주어진 시각 기준으로 만료되었는지 확인합니다.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// 만료까지 남은 시간 (초). 이미 만료되었으면 0
    pub fn remaining_seconds(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at - now).num_seconds().max(0)
    }

    /// 제출된 코드와 대소문자 구분 없이 비교합니다.
    pub fn matches(&self, submitted: &str) -> bool {
        crate::utils::string_utils::equals_ignore_case(&self.code, submitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_boundaries() {
        let now = Utc::now();
        let code = VerificationCode::expiring_at("7421", now);

        assert!(!code.is_expired_at(now));
        assert!(code.is_expired_at(now + Duration::milliseconds(1)));
        assert!(!code.is_expired_at(now - Duration::seconds(1)));
    }

    #[test]
    fn test_new_code_is_valid() {
        let code = VerificationCode::new("7421", 60);

        assert!(!code.is_expired());
        assert!(code.remaining_seconds(Utc::now()) > 50);
    }

    #[test]
    fn test_remaining_seconds_never_negative() {
        let now = Utc::now();
        let code = VerificationCode::expiring_at("7421", now - Duration::seconds(30));

        assert_eq!(code.remaining_seconds(now), 0);
    }

    #[test]
    fn test_matches_ignores_case() {
        let code = VerificationCode::new("AB12", 60);

        assert!(code.matches("ab12"));
        assert!(code.matches("AB12"));
        assert!(!code.matches("ab13"));
    }

    #[test]
    fn test_json_shape() {
        let code = VerificationCode::new("7421", 60);
        let json = serde_json::to_value(&code).unwrap();

        assert_eq!(json["code"], "7421");
        assert!(json["expires_at"].is_string());
    }
}
