//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 싱글톤으로 관리되는 서비스들을 제공합니다.
//!
//! # Features
//!
//! - 인증 코드 발급 (이미지 / SMS)
//! - 보호 경로 요청의 코드 검증 및 1회성 소비
//! - 자동 의존성 주입 및 싱글톤 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::verification::VerificationCodeService;
//!
//! let service = VerificationCodeService::instance();
//! let issued = service.issue("session-1", CodeKind::Image, None).await?;
//! ```

pub mod verification;
