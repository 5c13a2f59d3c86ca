//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 싱글톤으로 관리되는 리포지토리들을 제공합니다.
//! 인증 코드는 Redis에 TTL과 함께 저장됩니다.
//!
//! # Features
//!
//! - 싱글톤 패턴을 통한 인스턴스 관리
//! - 세션 단위로 분리된 코드 저장
//! - 원자적 조건부 삭제를 통한 1회성 보장
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::verification_codes::RedisVerificationCodeRepository;
//!
//! let repo = RedisVerificationCodeRepository::instance();
//! let code = repo.get("session-1", CodeKind::Image).await?;
//! ```

pub mod verification_codes;
