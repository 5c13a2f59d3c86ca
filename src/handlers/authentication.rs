//! 로그인 처리 핸들러
//!
//! 게이트를 통과한 요청만 도달합니다. 실제 자격 증명 검증은
//! 하위 인증 파이프라인의 몫이며, 여기서는 요청 형식만 확인하고 수신을 알립니다.
//!
//! 경로는 설정값(`SIGNIN_PROCESS_URL_FORM`, `SIGNIN_PROCESS_URL_MOBILE`)을 따르므로
//! 라우트 매크로 대신 `routes` 모듈에서 등록합니다.

use actix_web::{web, HttpResponse};
use serde_json::json;
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::{FormSignInRequest, MobileSignInRequest};

/// 폼 로그인 (이미지 코드로 보호)
///
/// # Endpoint
/// `POST {SIGNIN_PROCESS_URL_FORM}`
pub async fn form_sign_in(
    form: web::Form<FormSignInRequest>,
) -> Result<HttpResponse, AppError> {
    form.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    log::info!("폼 로그인 요청 수신 - 사용자: {}", form.username);

    Ok(HttpResponse::Ok().json(json!({
        "status": "accepted",
        "method": "form",
        "principal": form.username
    })))
}

/// 휴대폰 로그인 (SMS 코드로 보호)
///
/// # Endpoint
/// `POST {SIGNIN_PROCESS_URL_MOBILE}`
pub async fn mobile_sign_in(
    form: web::Form<MobileSignInRequest>,
) -> Result<HttpResponse, AppError> {
    form.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    log::info!("휴대폰 로그인 요청 수신");

    Ok(HttpResponse::Ok().json(json!({
        "status": "accepted",
        "method": "mobile",
        "principal": form.mobile
    })))
}
