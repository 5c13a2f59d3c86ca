//! 인증 코드 저장소 모듈
//!
//! 발급 서비스가 코드를 넣고 게이트가 읽고 소비하는 저장소입니다.
//!
//! # Implementations
//!
//! - [`RedisVerificationCodeRepository`] - 운영용, TTL과 Lua 스크립트 기반 원자적 소비
//! - [`InMemoryVerificationCodeRepository`] - 테스트 및 단일 노드 개발용
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::repositories::verification_codes::{RedisVerificationCodeRepository, VerificationCodeRepository};
//!
//! let repo = RedisVerificationCodeRepository::instance();
//! repo.save("session-1", CodeKind::Sms, &VerificationCode::new("123456", 60)).await?;
//!
//! let consumed = repo.remove_if_matches("session-1", CodeKind::Sms, "123456").await?;
//! ```

pub mod in_memory_verification_code_repository;
pub mod redis_verification_code_repository;
pub mod verification_code_repository;

pub use in_memory_verification_code_repository::InMemoryVerificationCodeRepository;
pub use redis_verification_code_repository::RedisVerificationCodeRepository;
pub use verification_code_repository::VerificationCodeRepository;
