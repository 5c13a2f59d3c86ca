//! 인증 코드 게이트 미들웨어
//!
//! 모든 요청의 경로를 [`EndpointTable`]과 비교해, 보호된 경로라면
//! 제출된 인증 코드를 검증한 뒤에만 다음 서비스로 전달합니다.
//!
//! ```rust,ignore
//! let table = Arc::new(VerificationConfig::from_env().endpoint_table());
//!
//! App::new()
//!     .wrap(VerificationGate::new(table.clone(), VerificationCodeService::instance()))
//!     .configure(configure_all_routes)
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::verification::EndpointTable;
use crate::middlewares::failure_handler::{JsonFailureHandler, VerificationFailureHandler};
use crate::middlewares::verification_gate_inner::VerificationGateService;
use crate::services::verification::VerificationCodeService;

pub struct VerificationGate {
    endpoints: Arc<EndpointTable>,
    verification_service: Arc<VerificationCodeService>,
    failure_handler: Arc<dyn VerificationFailureHandler>,
}

impl VerificationGate {
    /// 기본 JSON 실패 응답을 사용하는 게이트를 생성합니다.
    pub fn new(endpoints: Arc<EndpointTable>, verification_service: Arc<VerificationCodeService>) -> Self {
        Self {
            endpoints,
            verification_service,
            failure_handler: Arc::new(JsonFailureHandler),
        }
    }

    /// 실패 응답 전략을 교체합니다.
    pub fn failure_handler(mut self, failure_handler: Arc<dyn VerificationFailureHandler>) -> Self {
        self.failure_handler = failure_handler;
        self
    }
}

impl<S, B> Transform<S, ServiceRequest> for VerificationGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = VerificationGateService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(VerificationGateService {
            service: Rc::new(service),
            endpoints: self.endpoints.clone(),
            verification_service: self.verification_service.clone(),
            failure_handler: self.failure_handler.clone(),
        }))
    }
}
