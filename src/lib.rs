//! 인증 코드 게이트 서비스
//!
//! 로그인 등 민감한 엔드포인트 앞에서 이미지/SMS 인증 코드를 검증하는
//! Actix-web 기반 서비스입니다.
//!
//! # Features
//!
//! - **보호 경로 매칭**: Ant 스타일 패턴으로 코드가 필요한 경로 지정
//! - **코드 검증 게이트**: 세션 단위 저장 코드와 제출 코드 비교, 1회 소비
//! - **코드 발급**: 숫자 코드 생성, 저장, 발송
//! - **Redis**: TTL 기반 코드 저장 및 원자적 소비
//! - **싱글톤 DI**: `inventory` 기반 서비스 레지스트리
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │ VerificationGate│ ← 보호 경로 요청의 코드 검증 (미들웨어)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 코드 발급 / 로그인 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증 및 발급 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 코드 저장소
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │      Redis      │
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use verification_gate::services::verification::VerificationCodeService;
//!
//! let service = VerificationCodeService::instance();
//! let issued = service.issue("session-1", CodeKind::Image, None).await?;
//! ```

pub mod core;
pub mod config;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
