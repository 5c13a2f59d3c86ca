//! 게이트가 요청에서 필요로 하는 최소한의 기능
//!
//! 게이트는 웹 프레임워크의 요청 타입에 직접 의존하지 않고
//! 경로, 파라미터, 세션 식별자만 노출하는 [`CodeRequest`]를 통해 요청을 읽습니다.

use std::collections::HashMap;

/// 게이트가 요청에서 읽는 세 가지 정보
pub trait CodeRequest {
    /// 요청 경로 (쿼리 문자열 제외)
    fn path(&self) -> &str;

    /// 쿼리 문자열 또는 폼 본문의 파라미터 값
    fn parameter(&self, name: &str) -> Option<&str>;

    /// 코드 저장소의 파티션 키로 쓰이는 세션 식별자
    fn session_key(&self) -> Option<&str>;
}

/// 전송 계층과 무관한 [`CodeRequest`] 구현
///
/// actix 미들웨어는 `ServiceRequest`에서 이 구조체를 만들어 게이트에 넘기고,
/// 테스트는 직접 구성합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let request = GateRequest::new("/authentication/mobile")
///     .with_session("session-1")
///     .with_parameter("smsCode", "123456");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateRequest {
    path: String,
    parameters: HashMap<String, String>,
    session_key: Option<String>,
}

impl GateRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_session(mut self, session_key: impl Into<String>) -> Self {
        self.session_key = Some(session_key.into());
        self
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// 이미 있는 이름은 덮어쓰지 않고 파라미터를 추가합니다.
    pub fn with_fallback_parameters(mut self, parameters: HashMap<String, String>) -> Self {
        for (name, value) in parameters {
            self.parameters.entry(name).or_insert(value);
        }
        self
    }
}

impl CodeRequest for GateRequest {
    fn path(&self) -> &str {
        &self.path
    }

    fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    fn session_key(&self) -> Option<&str> {
        self.session_key.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_request_accessors() {
        let request = GateRequest::new("/authentication/form")
            .with_session("abc")
            .with_parameter("imageCode", "7421");

        assert_eq!(request.path(), "/authentication/form");
        assert_eq!(request.session_key(), Some("abc"));
        assert_eq!(request.parameter("imageCode"), Some("7421"));
        assert_eq!(request.parameter("smsCode"), None);
    }

    #[test]
    fn test_fallback_parameters_do_not_override() {
        let mut form = HashMap::new();
        form.insert("imageCode".to_string(), "from-body".to_string());
        form.insert("username".to_string(), "kim".to_string());

        let request = GateRequest::new("/authentication/form")
            .with_parameter("imageCode", "from-query")
            .with_fallback_parameters(form);

        assert_eq!(request.parameter("imageCode"), Some("from-query"));
        assert_eq!(request.parameter("username"), Some("kim"));
    }
}
