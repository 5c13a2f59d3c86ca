//! 인증 코드 검증 실패 시의 응답 전략
//!
//! 게이트는 거부 사유만 판정하고, 클라이언트에게 어떤 응답을 줄지는
//! [`VerificationFailureHandler`] 구현이 결정합니다.
//!
//! ```rust,ignore
//! struct RedirectToLogin;
//!
//! impl VerificationFailureHandler for RedirectToLogin {
//!     fn on_failure(&self, _req: &HttpRequest, _error: &VerificationError) -> HttpResponse {
//!         HttpResponse::Found()
//!             .insert_header(("Location", "/signin?error=code"))
//!             .finish()
//!     }
//! }
//!
//! let gate = VerificationGate::new(table, service).failure_handler(Arc::new(RedirectToLogin));
//! ```

use actix_web::{HttpRequest, HttpResponse, ResponseError};
use crate::core::errors::VerificationError;

pub trait VerificationFailureHandler: Send + Sync {
    /// 거부된 요청에 대한 응답을 만듭니다. 이 응답으로 파이프라인이 종료됩니다.
    fn on_failure(&self, req: &HttpRequest, error: &VerificationError) -> HttpResponse;
}

/// 기본 실패 응답
///
/// ```json
/// { "error": "verification_code_mismatch", "message": "Image verification code does not match" }
/// ```
///
/// 검증 실패는 401, 저장소 장애는 503입니다.
pub struct JsonFailureHandler;

impl VerificationFailureHandler for JsonFailureHandler {
    fn on_failure(&self, _req: &HttpRequest, error: &VerificationError) -> HttpResponse {
        error.error_response()
    }
}
