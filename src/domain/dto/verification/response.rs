//! 인증 코드 발급 응답 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::verification::{CodeKind, VerificationCode};

/// `GET /code/{kind}` 응답
///
/// `code`는 개발 환경에서만 채워집니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedCodeResponse {
    pub kind: CodeKind,
    pub expires_at: DateTime<Utc>,
    pub expire_in_seconds: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl IssuedCodeResponse {
    pub fn new(kind: CodeKind, issued: &VerificationCode, expose_code: bool) -> Self {
        Self {
            kind,
            expires_at: issued.expires_at,
            expire_in_seconds: issued.remaining_seconds(Utc::now()),
            code: expose_code.then(|| issued.code.clone()),
        }
    }
}
