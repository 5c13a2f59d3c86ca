//! API 라우트 설정 모듈
//!
//! 엔드포인트들을 기능별로 그룹화하여 등록합니다.
//!
//! # Routes
//!
//! | Method | Path | 설명 |
//! |--------|------|------|
//! | `GET` | `/health` | 헬스체크 |
//! | `GET` | `/code/{kind}` | 인증 코드 발급 |
//! | `POST` | `SIGNIN_PROCESS_URL_FORM` | 폼 로그인 (이미지 코드 필요) |
//! | `POST` | `SIGNIN_PROCESS_URL_MOBILE` | 휴대폰 로그인 (SMS 코드 필요) |
//!
//! 게이트는 라우트가 아닌 앱 전체에 적용되므로,
//! 어떤 경로가 코드를 요구하는지는 라우트 구성과 무관하게 설정으로 결정됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let config = VerificationConfig::from_env();
//!
//! App::new().configure(|cfg| configure_all_routes(cfg, &config));
//! ```

use crate::config::VerificationConfig;
use crate::handlers;
use actix_web::{get, web};
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig, config: &VerificationConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_code_routes(cfg);
    configure_signin_routes(cfg, config);
}

fn configure_code_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::verification::issue_code);
}

/// 로그인 처리 라우트를 설정합니다.
///
/// 경로는 설정값을 그대로 사용하므로 게이트의 보호 경로와 항상 일치합니다.
fn configure_signin_routes(cfg: &mut web::ServiceConfig, config: &VerificationConfig) {
    cfg.service(
        web::resource(config.signin_process_url_form.as_str())
            .route(web::post().to(handlers::authentication::form_sign_in))
    );
    cfg.service(
        web::resource(config.signin_process_url_mobile.as_str())
            .route(web::post().to(handlers::authentication::mobile_sign_in))
    );
}

/// 헬스체크 엔드포인트
///
/// # Endpoint
/// `GET /health`
#[get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "verification_gate",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "cache": "Redis",
            "code_kinds": ["image", "sms"]
        }
    }))
}
