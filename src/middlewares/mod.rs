//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//! Spring Security의 Filter와 유사한 역할을 수행합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 인증 코드 게이트 (VerificationGate)
//! - 요청 경로를 보호 경로 테이블과 비교
//! - 쿼리 문자열 또는 폼 본문에서 제출된 코드 추출
//! - 세션 쿠키로 저장된 코드를 찾아 검증하고 1회 소비
//! - 실패 시 [`VerificationFailureHandler`]로 응답하고 파이프라인 종료
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{App, HttpServer};
//! use crate::middlewares::VerificationGate;
//!
//! let table = Arc::new(VerificationConfig::from_env().endpoint_table());
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .wrap(VerificationGate::new(table.clone(), VerificationCodeService::instance()))
//!         .configure(configure_all_routes)
//! })
//! ```
//!
//! ## 실패 응답 교체
//! ```rust,ignore
//! VerificationGate::new(table, service)
//!     .failure_handler(Arc::new(RedirectToLogin))
//! ```

pub mod failure_handler;
pub mod verification_gate;
mod verification_gate_inner;

pub use failure_handler::{JsonFailureHandler, VerificationFailureHandler};
pub use verification_gate::VerificationGate;
