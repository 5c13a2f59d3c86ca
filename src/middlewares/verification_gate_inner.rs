use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse};
use actix_web::error::PayloadError;
use actix_web::web::{self, Bytes};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use crate::domain::verification::{EndpointTable, GateRequest};
use crate::middlewares::failure_handler::VerificationFailureHandler;
use crate::services::verification::VerificationCodeService;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub struct VerificationGateService<S> {
    pub service: Rc<S>,
    pub endpoints: Arc<EndpointTable>,
    pub verification_service: Arc<VerificationCodeService>,
    pub failure_handler: Arc<dyn VerificationFailureHandler>,
}

impl<S, B> Service<ServiceRequest> for VerificationGateService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        // 원본 URI가 아니라 라우터가 매칭하는 디코딩된 경로로 판정
        let path = routed_path(&req);
        let kind = self.endpoints.classify(&path);
        let verification_service = self.verification_service.clone();
        let failure_handler = self.failure_handler.clone();

        Box::pin(async move {
            // 보호 대상이 아닌 경로는 그대로 통과
            let Some(kind) = kind else {
                let res = service.call(req).await?;
                return Ok(res.map_into_left_body());
            };

            log::debug!("인증 코드 보호 경로: {} ({})", path, kind);

            let session_cookie = &verification_service.config().session_cookie;
            let mut gate_request = GateRequest::new(&path)
                .with_fallback_parameters(parse_parameters(req.query_string()));

            if let Some(cookie) = req.cookie(session_cookie) {
                gate_request = gate_request.with_session(cookie.value());
            }

            if is_form_body(&req) {
                let body = req.extract::<Bytes>().await?;
                let form = std::str::from_utf8(&body)
                    .map(parse_parameters)
                    .unwrap_or_default();
                gate_request = gate_request.with_fallback_parameters(form);

                // 다운스트림 핸들러가 본문을 다시 읽을 수 있도록 되돌려 놓음
                req.set_payload(replay_payload(body));
            }

            if let Err(error) = verification_service.validate(&gate_request, kind).await {
                log::warn!("인증 코드 검증 실패: {} - {}", path, error);
                let (req, _) = req.into_parts();
                let response = failure_handler.on_failure(&req, &error);
                let res = ServiceResponse::new(req, response)
                    .map_into_right_body();
                return Ok(res);
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 라우터가 매칭에 사용하는 경로
///
/// actix는 비예약 문자의 퍼센트 인코딩을 풀어 둔 경로로 리소스를 찾습니다.
fn routed_path(req: &ServiceRequest) -> String {
    req.match_info().as_str().to_string()
}

fn is_form_body(req: &ServiceRequest) -> bool {
    req.content_type().eq_ignore_ascii_case(FORM_CONTENT_TYPE)
}

/// `a=1&b=2` 형식의 문자열을 파라미터 맵으로 변환합니다.
///
/// 형식이 잘못된 경우 빈 맵을 반환합니다.
fn parse_parameters(raw: &str) -> HashMap<String, String> {
    web::Query::<HashMap<String, String>>::from_query(raw)
        .map(web::Query::into_inner)
        .unwrap_or_default()
}

fn replay_payload(body: Bytes) -> Payload {
    let stream = futures_util::stream::once(async move { Ok::<_, PayloadError>(body) });
    Payload::Stream {
        payload: Box::pin(stream),
    }
}
