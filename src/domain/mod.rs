//! # Domain Layer Module
//!
//! 인증 코드 게이트의 도메인 계층입니다.
//!
//! ## 모듈 구성
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── verification  - 코드 종류, 발급된 코드, 보호 경로 테이블, 요청 인터페이스
//! └── dto           - HTTP 요청/응답 계약
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, Redis)
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::verification::{CodeKind, EndpointTable};
//!
//! let table = EndpointTable::builder()
//!     .register("/authentication/form", CodeKind::Image)
//!     .register("/auth/sms/*", CodeKind::Sms)
//!     .build();
//!
//! assert_eq!(table.classify("/auth/sms/login"), Some(CodeKind::Sms));
//! ```

pub mod dto;
pub mod verification;

pub use dto::*;
