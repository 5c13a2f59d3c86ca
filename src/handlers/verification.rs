//! 인증 코드 발급 HTTP 핸들러
//!
//! # Endpoint
//!
//! - `GET /code/image` - 이미지 코드 발급
//! - `GET /code/sms?mobile=01012345678` - SMS 코드 발급
//!
//! 호출자에게 세션 쿠키가 없으면 새 세션 식별자를 만들어 쿠키로 내려줍니다.
//! 이후 보호된 경로로 코드를 제출할 때 같은 쿠키가 있어야 합니다.

use actix_web::cookie::{Cookie, SameSite};
use actix_web::{get, web, HttpRequest, HttpResponse};
use uuid::Uuid;
use validator::Validate;
use crate::config::Environment;
use crate::core::errors::AppError;
use crate::domain::verification::CodeKind;
use crate::domain::{IssueCodeQuery, IssuedCodeResponse};
use crate::services::verification::VerificationCodeService;

/// 인증 코드 발급 핸들러
///
/// # Endpoint
/// `GET /code/{kind}`
///
/// # Errors
///
/// - 400: 알 수 없는 `kind`, SMS 요청에 `mobile` 누락 또는 형식 오류
/// - 500: 코드 저장 실패
#[get("/code/{kind}")]
pub async fn issue_code(
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<IssueCodeQuery>,
    verification_service: web::Data<VerificationCodeService>,
) -> Result<HttpResponse, AppError> {
    let kind: CodeKind = path.into_inner().parse().map_err(AppError::ValidationError)?;

    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let cookie_name = verification_service.config().session_cookie.clone();
    let existing_session = req
        .cookie(&cookie_name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.trim().is_empty());

    let (session_key, is_new_session) = match existing_session {
        Some(session_key) => (session_key, false),
        None => (Uuid::new_v4().to_string(), true),
    };

    let issued = verification_service
        .issue(&session_key, kind, query.mobile.as_deref())
        .await?;

    let body = IssuedCodeResponse::new(kind, &issued, Environment::current().exposes_issued_codes());

    let mut response = HttpResponse::Ok();
    if is_new_session {
        log::debug!("새 세션 발급 - {}", kind);
        response.cookie(
            Cookie::build(cookie_name, session_key)
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .finish(),
        );
    }

    Ok(response.json(body))
}
