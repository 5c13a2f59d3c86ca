//! 인증 코드 서비스 모듈
//!
//! - [`VerificationCodeService`] - 코드 발급과 게이트 검증
//! - [`CodeSender`] - 발급된 코드의 전달 채널
//! - [`code_generator`] - 숫자 코드 생성

pub mod code_generator;
pub mod code_sender;
pub mod verification_code_service;

pub use code_sender::{CodeSender, LogCodeSender};
pub use verification_code_service::VerificationCodeService;
