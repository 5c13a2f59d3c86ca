//! HTTP 요청 핸들러 모듈
//!
//! - [`verification`] - 인증 코드 발급
//! - [`authentication`] - 게이트 뒤의 로그인 처리 엔드포인트

pub mod authentication;
pub mod verification;
