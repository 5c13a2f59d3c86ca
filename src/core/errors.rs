//! # Application Error Handling System
//!
//! 게이트 서비스를 위한 통합 에러 처리 시스템입니다.
//! 두 종류의 에러 타입을 제공합니다.
//!
//! - [`AppError`]: 인프라/핸들러 계층의 전역 에러 (Redis, 입력 검증, 설정 등)
//! - [`VerificationError`]: 인증 코드 게이트가 요청을 거부할 때의 사유
//!
//! 두 타입 모두 `thiserror`로 `Error` trait을 구현하고,
//! `actix_web::ResponseError`를 구현하여 JSON 응답으로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | 에러 | HTTP Status | 사용 시나리오 |
//! |------|-------------|---------------|
//! | `AppError::ValidationError` | 400 Bad Request | 입력값 검증 실패 |
//! | `AppError::RedisError` | 500 Internal Server Error | 캐시 오류 |
//! | `AppError::ExternalServiceError` | 502 Bad Gateway | 코드 발송 실패 |
//! | `AppError::InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//! | `VerificationError::StoreUnavailable` | 503 Service Unavailable | 코드 저장소 장애 |
//! | 나머지 `VerificationError` | 401 Unauthorized | 인증 코드 검증 실패 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn issue(kind: &str) -> AppResult<CodeKind> {
//!     kind.parse::<CodeKind>()
//!         .map_err(|e| AppError::ValidationError(e))
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;
use crate::domain::verification::CodeKind;

/// 애플리케이션 전역 에러 타입
///
/// 게이트 외부의 모든 계층(저장소, 발급 서비스, 핸들러)에서 사용하는 에러입니다.
/// 게이트의 거부 사유는 [`VerificationError`]로 별도 표현합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// Redis 캐시 관련 에러
    ///
    /// 연결 실패, 명령 실행 오류, JSON 직렬화 실패 등을 포함합니다.
    ///
    /// # 예제
    /// ```rust,ignore
    /// redis_client.get::<VerificationCode>(&key).await
    ///     .map_err(|e| AppError::RedisError(e.to_string()))?;
    /// ```
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// 알 수 없는 코드 종류, 휴대폰 번호 누락 등 클라이언트 입력 오류입니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 외부 서비스 에러 (502 Bad Gateway)
    ///
    /// SMS 게이트웨이 등 코드 발송 채널 호출 실패를 나타냅니다.
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// ```json
    /// {
    ///   "error": "Human readable error message"
    /// }
    /// ```
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 인증 코드 게이트의 거부 사유
///
/// 게이트가 보호된 엔드포인트로 향하는 요청을 차단하는 모든 경우를 나타냅니다.
/// 모든 변형은 요청 단위의 거부이며 서버 프로세스에는 영향을 주지 않습니다.
///
/// ## 저장소 상태와의 관계
///
/// | 변형 | 저장된 코드 |
/// |------|-------------|
/// | `MissingStoredCode` | 없음 (미발급 또는 이미 소비됨) |
/// | `EmptySubmittedCode` | 유지 |
/// | `ExpiredCode` | 삭제됨 |
/// | `CodeMismatch` | 유지 (만료 전까지 재시도 가능) |
/// | `StoreUnavailable` | 알 수 없음 |
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    /// 발급된 코드가 없거나 이미 소비됨
    #[error("{0} verification code has not been issued")]
    MissingStoredCode(CodeKind),

    /// 요청 파라미터에 코드가 없거나 공백뿐임
    #[error("{0} verification code must not be empty")]
    EmptySubmittedCode(CodeKind),

    /// 저장된 코드의 유효 시간이 지남
    #[error("{0} verification code has expired")]
    ExpiredCode(CodeKind),

    /// 제출된 코드가 저장된 코드와 다름
    #[error("{0} verification code does not match")]
    CodeMismatch(CodeKind),

    /// 코드 저장소 I/O 실패
    #[error("Verification code store unavailable: {0}")]
    StoreUnavailable(String),
}

impl VerificationError {
    /// 응답 본문의 `error` 필드에 쓰이는 기계 판독용 코드
    pub fn error_code(&self) -> &'static str {
        match self {
            VerificationError::MissingStoredCode(_) => "verification_code_missing",
            VerificationError::EmptySubmittedCode(_) => "verification_code_empty",
            VerificationError::ExpiredCode(_) => "verification_code_expired",
            VerificationError::CodeMismatch(_) => "verification_code_mismatch",
            VerificationError::StoreUnavailable(_) => "verification_store_unavailable",
        }
    }

    /// 거부 대상 코드 종류 (저장소 장애의 경우 `None`)
    pub fn kind(&self) -> Option<CodeKind> {
        match self {
            VerificationError::MissingStoredCode(kind)
            | VerificationError::EmptySubmittedCode(kind)
            | VerificationError::ExpiredCode(kind)
            | VerificationError::CodeMismatch(kind) => Some(*kind),
            VerificationError::StoreUnavailable(_) => None,
        }
    }
}

impl From<AppError> for VerificationError {
    fn from(error: AppError) -> Self {
        VerificationError::StoreUnavailable(error.to_string())
    }
}

impl actix_web::ResponseError for VerificationError {
    fn status_code(&self) -> StatusCode {
        match self {
            VerificationError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.error_code(),
                "message": self.to_string()
            }))
    }
}
