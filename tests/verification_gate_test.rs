//! 인증 코드 게이트 통합 테스트
//!
//! 메모리 저장소를 사용해 미들웨어, 라우트, 핸들러를 함께 구동합니다.

use std::sync::Arc;
use actix_web::cookie::Cookie;
use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App, HttpRequest, HttpResponse};
use chrono::{Duration, Utc};
use verification_gate::config::VerificationConfig;
use verification_gate::core::errors::VerificationError;
use verification_gate::domain::verification::{CodeKind, VerificationCode};
use verification_gate::middlewares::{VerificationFailureHandler, VerificationGate};
use verification_gate::repositories::verification_codes::{
    InMemoryVerificationCodeRepository, VerificationCodeRepository,
};
use verification_gate::routes::configure_all_routes;
use verification_gate::services::verification::{LogCodeSender, VerificationCodeService};

const SESSION: &str = "session-1";
const FORM: &str = "application/x-www-form-urlencoded";

struct Fixture {
    config: VerificationConfig,
    repository: Arc<InMemoryVerificationCodeRepository>,
    service: Arc<VerificationCodeService>,
}

impl Fixture {
    fn new() -> Self {
        let mut config = VerificationConfig::default();
        config.sms.urls = vec!["/auth/sms/*".to_string()];

        let repository = Arc::new(InMemoryVerificationCodeRepository::new());
        let service = Arc::new(VerificationCodeService::new(
            repository.clone(),
            Arc::new(config.clone()),
            Arc::new(LogCodeSender),
        ));

        Self {
            config,
            repository,
            service,
        }
    }

    fn gate(&self) -> VerificationGate {
        VerificationGate::new(Arc::new(self.config.endpoint_table()), self.service.clone())
    }

    async fn store(&self, kind: CodeKind, code: VerificationCode) {
        self.repository.save(SESSION, kind, &code).await.unwrap();
    }
}

macro_rules! init_app {
    ($fixture:expr, $gate:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::from($fixture.service.clone()))
                .wrap($gate)
                .configure(|cfg| configure_all_routes(cfg, &$fixture.config))
                .route("/auth/sms/login", web::post().to(|| async { HttpResponse::Ok().body("sms ok") })),
        )
        .await
    };
}

fn form_sign_in(body: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/authentication/form")
        .cookie(Cookie::new("SESSION", SESSION))
        .insert_header((header::CONTENT_TYPE, FORM))
        .set_payload(body.to_string())
}

#[actix_web::test]
async fn test_unprotected_path_passes_through() {
    let fixture = Fixture::new();
    let app = init_app!(fixture, fixture.gate());

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_protected_path_without_code_is_rejected() {
    let fixture = Fixture::new();
    let app = init_app!(fixture, fixture.gate());

    let req = test::TestRequest::post()
        .uri("/auth/sms/login")
        .cookie(Cookie::new("SESSION", SESSION))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "verification_code_missing");
    assert_eq!(body["message"], "SMS verification code has not been issued");
}

#[actix_web::test]
async fn test_valid_form_code_reaches_handler_with_body() {
    let fixture = Fixture::new();
    fixture.store(CodeKind::Image, VerificationCode::new("7421", 60)).await;
    let app = init_app!(fixture, fixture.gate());

    let req = form_sign_in("username=kim&password=secret&imageCode=7421").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["principal"], "kim");
    assert!(fixture.repository.is_empty());
}

#[actix_web::test]
async fn test_percent_encoded_protected_path_is_gated() {
    let fixture = Fixture::new();
    let app = init_app!(fixture, fixture.gate());

    let req = test::TestRequest::post()
        .uri("/authentication/%66orm")
        .cookie(Cookie::new("SESSION", SESSION))
        .insert_header((header::CONTENT_TYPE, FORM))
        .set_payload("username=kim&password=secret")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "verification_code_missing");
}

#[actix_web::test]
async fn test_form_content_type_is_case_insensitive() {
    let fixture = Fixture::new();
    fixture.store(CodeKind::Image, VerificationCode::new("7421", 60)).await;
    let app = init_app!(fixture, fixture.gate());

    let req = test::TestRequest::post()
        .uri("/authentication/form")
        .cookie(Cookie::new("SESSION", SESSION))
        .insert_header((header::CONTENT_TYPE, "Application/X-WWW-Form-Urlencoded"))
        .set_payload("username=kim&password=secret&imageCode=7421")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(fixture.repository.is_empty());
}

#[actix_web::test]
async fn test_code_cannot_be_replayed() {
    let fixture = Fixture::new();
    fixture.store(CodeKind::Image, VerificationCode::new("7421", 60)).await;
    let app = init_app!(fixture, fixture.gate());

    let first = test::call_service(&app, form_sign_in("username=kim&password=secret&imageCode=7421").to_request()).await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = test::call_service(&app, form_sign_in("username=kim&password=secret&imageCode=7421").to_request()).await;
    assert_eq!(second.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(second).await;
    assert_eq!(body["error"], "verification_code_missing");
}

#[actix_web::test]
async fn test_mismatch_then_retry_succeeds() {
    let fixture = Fixture::new();
    fixture.store(CodeKind::Image, VerificationCode::new("AB12", 60)).await;
    let app = init_app!(fixture, fixture.gate());

    let wrong = test::call_service(&app, form_sign_in("username=kim&password=secret&imageCode=0000").to_request()).await;
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(wrong).await;
    assert_eq!(body["error"], "verification_code_mismatch");

    let right = test::call_service(&app, form_sign_in("username=kim&password=secret&imageCode=ab12").to_request()).await;
    assert_eq!(right.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_expired_code_is_rejected_and_removed() {
    let fixture = Fixture::new();
    fixture
        .store(CodeKind::Image, VerificationCode::expiring_at("7421", Utc::now() - Duration::seconds(1)))
        .await;
    let app = init_app!(fixture, fixture.gate());

    let resp = test::call_service(&app, form_sign_in("username=kim&password=secret&imageCode=7421").to_request()).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "verification_code_expired");
    assert!(fixture.repository.is_empty());
}

#[actix_web::test]
async fn test_blank_code_is_rejected() {
    let fixture = Fixture::new();
    fixture.store(CodeKind::Image, VerificationCode::new("7421", 60)).await;
    let app = init_app!(fixture, fixture.gate());

    let resp = test::call_service(&app, form_sign_in("username=kim&password=secret&imageCode=").to_request()).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "verification_code_empty");
    assert_eq!(fixture.repository.len(), 1);
}

#[actix_web::test]
async fn test_code_in_query_string_is_accepted() {
    let fixture = Fixture::new();
    fixture.store(CodeKind::Sms, VerificationCode::new("123456", 60)).await;
    let app = init_app!(fixture, fixture.gate());

    let req = test::TestRequest::post()
        .uri("/authentication/mobile?smsCode=123456")
        .cookie(Cookie::new("SESSION", SESSION))
        .insert_header((header::CONTENT_TYPE, FORM))
        .set_payload("mobile=01012345678")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["principal"], "01012345678");
}

#[actix_web::test]
async fn test_other_session_cannot_use_code() {
    let fixture = Fixture::new();
    fixture.store(CodeKind::Image, VerificationCode::new("7421", 60)).await;
    let app = init_app!(fixture, fixture.gate());

    let req = test::TestRequest::post()
        .uri("/authentication/form")
        .cookie(Cookie::new("SESSION", "someone-else"))
        .insert_header((header::CONTENT_TYPE, FORM))
        .set_payload("username=kim&password=secret&imageCode=7421")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(fixture.repository.len(), 1);
}

struct RedirectToSignIn;

impl VerificationFailureHandler for RedirectToSignIn {
    fn on_failure(&self, _req: &HttpRequest, error: &VerificationError) -> HttpResponse {
        HttpResponse::Found()
            .insert_header((header::LOCATION, format!("/signin?error={}", error.error_code())))
            .finish()
    }
}

#[actix_web::test]
async fn test_custom_failure_handler_decides_response() {
    let fixture = Fixture::new();
    let gate = fixture.gate().failure_handler(Arc::new(RedirectToSignIn));
    let app = init_app!(fixture, gate);

    let resp = test::call_service(&app, form_sign_in("username=kim&password=secret&imageCode=7421").to_request()).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/signin?error=verification_code_missing"
    );
}

#[actix_web::test]
async fn test_issued_code_unlocks_sign_in() {
    let fixture = Fixture::new();
    let app = init_app!(fixture, fixture.gate());

    let issue = test::TestRequest::get().uri("/code/image").to_request();
    let resp = test::call_service(&app, issue).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let session = resp
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "SESSION")
        .map(|cookie| cookie.value().to_string())
        .expect("session cookie should be issued");

    let stored = fixture
        .repository
        .get(&session, CodeKind::Image)
        .await
        .unwrap()
        .expect("code should be stored for the new session");
    assert_eq!(stored.code.len(), 4);

    let sign_in = test::TestRequest::post()
        .uri("/authentication/form")
        .cookie(Cookie::new("SESSION", session))
        .insert_header((header::CONTENT_TYPE, FORM))
        .set_payload(format!("username=kim&password=secret&imageCode={}", stored.code))
        .to_request();
    let resp = test::call_service(&app, sign_in).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_sms_issue_requires_mobile() {
    let fixture = Fixture::new();
    let app = init_app!(fixture, fixture.gate());

    let req = test::TestRequest::get().uri("/code/sms").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(fixture.repository.is_empty());
}

#[actix_web::test]
async fn test_unknown_code_kind_is_bad_request() {
    let fixture = Fixture::new();
    let app = init_app!(fixture, fixture.gate());

    let req = test::TestRequest::get().uri("/code/voice").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
